// SPDX-License-Identifier: GPL-3.0-only

//! Keysym lookup table.
//!
//! Maps key identifiers to X11 keysym codes. An identifier is either a keysym
//! name (`"BackSpace"`, `"Shift_L"`, `"a"`) or a single character (`"é"`,
//! `"ł"`, `"п"`). Both live in one string-keyed map and are matched by exact
//! string equality.
//!
//! # Construction
//!
//! The table is built in three passes over the dataset:
//!
//! 1. Every record registers `name -> keysym`.
//! 2. Every record that carries a character registers `char -> keysym`. A later
//!    record overwrites an earlier one sharing the same character.
//! 3. [`ALIASES`] are registered against names already present.
//!
//! The process-wide table built from [`KEYSYMDEF`] is created on first use and
//! never changes afterwards.
//!
//! # Example
//!
//! ```rust
//! use rfb_keyboard::input::resolve;
//!
//! assert_eq!(resolve("BackSpace").unwrap(), 0xff08);
//! assert_eq!(resolve("Backspace").unwrap(), 0xff08);
//! assert_eq!(resolve("a").unwrap(), 0x61);
//! assert!(resolve("no-such-key").is_err());
//! ```

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::error::{KeyboardError, Result};
use crate::input::keysymdef::{KeysymRecord, KEYSYMDEF};

/// Convenience names registered on top of the base dataset, as
/// `(alias, canonical name)`.
pub const ALIASES: &[(&str, &str)] = &[
    ("Del", "Delete"),
    ("Esc", "Escape"),
    ("Cmd", "Super_L"),
    ("Alt", "Alt_L"),
    ("Ctrl", "Control_L"),
    ("Super", "Super_L"),
    ("Shift", "Shift_L"),
    ("Backspace", "BackSpace"),
];

static KEYSYMS: LazyLock<KeysymTable> =
    LazyLock::new(|| KeysymTable::from_records(KEYSYMDEF, ALIASES));

/// Immutable mapping from key identifiers to keysym codes.
#[derive(Debug, Clone, Default)]
pub struct KeysymTable {
    keys: HashMap<String, u32>,
}

impl KeysymTable {
    /// Returns the process-wide table built from the base dataset.
    #[must_use]
    pub fn global() -> &'static KeysymTable {
        &KEYSYMS
    }

    /// Builds a table from `records` followed by `aliases`.
    ///
    /// An alias whose canonical name is missing is skipped.
    #[must_use]
    pub fn from_records(records: &[KeysymRecord], aliases: &[(&str, &str)]) -> Self {
        let mut keys = HashMap::with_capacity(records.len() * 2 + aliases.len());

        for &(name, keysym, _) in records {
            keys.insert(name.to_string(), keysym);
        }

        for &(_, keysym, ch) in records {
            if let Some(ch) = ch {
                keys.insert(ch.to_string(), keysym);
            }
        }

        for &(alias, canonical) in aliases {
            match keys.get(canonical).copied() {
                Some(keysym) => {
                    keys.insert(alias.to_string(), keysym);
                }
                None => {
                    tracing::warn!(
                        "Skipping alias {:?}: canonical key {:?} is not in the table",
                        alias,
                        canonical
                    );
                }
            }
        }

        tracing::debug!("Built keysym table with {} entries", keys.len());
        Self { keys }
    }

    /// Resolves a key name or single character to its keysym.
    ///
    /// # Errors
    ///
    /// Returns [`KeyboardError::UnknownKey`] if `identifier` has no entry.
    pub fn resolve(&self, identifier: &str) -> Result<u32> {
        self.keys
            .get(identifier)
            .copied()
            .ok_or_else(|| KeyboardError::UnknownKey(identifier.to_string()))
    }

    /// Returns whether `identifier` has an entry.
    #[must_use]
    pub fn contains(&self, identifier: &str) -> bool {
        self.keys.contains_key(identifier)
    }

    /// Number of identifiers in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns whether the table has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

/// Resolves `identifier` against the process-wide table.
///
/// # Errors
///
/// Returns [`KeyboardError::UnknownKey`] if `identifier` has no entry.
pub fn resolve(identifier: &str) -> Result<u32> {
    KEYSYMS.resolve(identifier)
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Standard names resolve to their keysymdef codes.
    #[test]
    fn test_resolve_standard_names() {
        let expected = [
            ("BackSpace", 0xff08),
            ("Tab", 0xff09),
            ("Return", 0xff0d),
            ("Escape", 0xff1b),
            ("Delete", 0xffff),
            ("Home", 0xff50),
            ("Left", 0xff51),
            ("Page_Up", 0xff55),
            ("Prior", 0xff55),
            ("Insert", 0xff63),
            ("KP_Enter", 0xff8d),
            ("KP_0", 0xffb0),
            ("KP_9", 0xffb9),
            ("F1", 0xffbe),
            ("F12", 0xffc9),
            ("F35", 0xffe0),
            ("Shift_L", 0xffe1),
            ("Control_L", 0xffe3),
            ("Caps_Lock", 0xffe5),
            ("Alt_L", 0xffe9),
            ("Super_L", 0xffeb),
            ("ISO_Level3_Shift", 0xfe03),
            ("space", 0x20),
            ("A", 0x41),
            ("z", 0x7a),
            ("0", 0x30),
            ("asciitilde", 0x7e),
            ("eacute", 0xe9),
            ("ydiaeresis", 0xff),
            ("EuroSign", 0x20ac),
            ("L1", 0xffc8),
            ("R1", 0xffd2),
            ("dead_acute", 0xfe51),
            ("aogonek", 0x01b1),
            ("lstroke", 0x01b3),
            ("OE", 0x13bc),
            ("Greek_alpha", 0x07e1),
            ("Cyrillic_a", 0x06c1),
            ("hebrew_aleph", 0x0ce0),
            ("kana_A", 0x04b1),
            ("Hangul_Kiyeog", 0x0ea1),
            ("squareroot", 0x0100_221a),
            ("braille_dot_1", 0xfff1),
        ];

        for (name, keysym) in expected {
            assert_eq!(resolve(name).unwrap(), keysym, "keysym for {name}");
        }
    }

    /// Character entries share the code of the record that declared them.
    #[test]
    fn test_resolve_characters_match_names() {
        let pairs = [
            ("a", "a"),
            (" ", "space"),
            ("!", "exclam"),
            ("'", "apostrophe"),
            ("`", "grave"),
            ("\\", "backslash"),
            ("é", "eacute"),
            ("ß", "ssharp"),
            ("€", "EuroSign"),
            ("…", "ellipsis"),
            ("ą", "aogonek"),
            ("ł", "lstroke"),
            ("Œ", "OE"),
            ("α", "Greek_alpha"),
            ("а", "Cyrillic_a"),
            ("п", "Cyrillic_pe"),
            ("\u{5d0}", "hebrew_aleph"),
            ("ア", "kana_A"),
            ("ㄱ", "Hangul_Kiyeog"),
        ];

        for (ch, name) in pairs {
            assert_eq!(resolve(ch).unwrap(), resolve(name).unwrap(), "{ch:?} vs {name}");
        }
    }

    /// Every alias resolves to its canonical key.
    #[test]
    fn test_aliases() {
        assert_eq!(resolve("Del").unwrap(), resolve("Delete").unwrap());
        assert_eq!(resolve("Esc").unwrap(), resolve("Escape").unwrap());
        assert_eq!(resolve("Cmd").unwrap(), resolve("Super_L").unwrap());
        assert_eq!(resolve("Alt").unwrap(), resolve("Alt_L").unwrap());
        assert_eq!(resolve("Ctrl").unwrap(), resolve("Control_L").unwrap());
        assert_eq!(resolve("Super").unwrap(), resolve("Super_L").unwrap());
        assert_eq!(resolve("Shift").unwrap(), resolve("Shift_L").unwrap());
        assert_eq!(resolve("Backspace").unwrap(), resolve("BackSpace").unwrap());
    }

    /// The base dataset carries every canonical name the aliases need.
    #[test]
    fn test_alias_targets_present_in_dataset() {
        for (alias, canonical) in ALIASES {
            assert!(
                KEYSYMDEF.iter().any(|(name, _, _)| name == canonical),
                "{alias} points at missing {canonical}"
            );
        }
    }

    #[test]
    fn test_unknown_key() {
        let err = resolve("no-such-key").unwrap_err();
        assert!(matches!(err, KeyboardError::UnknownKey(ref key) if key == "no-such-key"));

        // Lookup is exact: no case folding, no trimming.
        assert!(resolve("backspace").is_err());
        assert!(resolve("CTRL").is_err());
        assert!(resolve(" Return").is_err());
        assert!(resolve("").is_err());
    }

    /// Keys documented without a `U+` mapping get no character entry.
    #[test]
    fn test_control_characters_are_not_keys() {
        for ch in ["\u{8}", "\t", "\n", "\r", "\u{1b}", "\u{7f}", "•"] {
            assert!(resolve(ch).is_err(), "{ch:?} should not resolve");
        }
        assert_eq!(resolve("enfilledcircbullet").unwrap(), 0x0ae6);
    }

    /// The shipped dataset's colliding characters go to the later record.
    #[test]
    fn test_dataset_collisions_resolve_to_later_record() {
        assert_eq!(resolve("√").unwrap(), resolve("squareroot").unwrap());
        assert_eq!(resolve("radical").unwrap(), 0x08d6);
        assert_eq!(resolve("∂").unwrap(), resolve("partdifferential").unwrap());
        assert_eq!(resolve("partialderivative").unwrap(), 0x08ef);
    }

    /// Keypad keys have no character entry, so '0' stays on the main row.
    #[test]
    fn test_keypad_does_not_claim_characters() {
        assert_eq!(resolve("0").unwrap(), 0x30);
        assert_eq!(resolve("+").unwrap(), 0x2b);
        assert_eq!(resolve("KP_Add").unwrap(), 0xffab);
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let first = resolve("Return").unwrap();
        for _ in 0..10 {
            assert_eq!(resolve("Return").unwrap(), first);
        }
        assert!(std::ptr::eq(KeysymTable::global(), KeysymTable::global()));
    }

    /// Later records win the character entry; names are untouched.
    #[test]
    fn test_character_last_write_wins() {
        let records: &[KeysymRecord] = &[
            ("first", 0x100, Some('x')),
            ("x", 0x78, None),
            ("second", 0x200, Some('x')),
        ];
        let table = KeysymTable::from_records(records, &[]);

        assert_eq!(table.resolve("first").unwrap(), 0x100);
        assert_eq!(table.resolve("second").unwrap(), 0x200);
        // Character pass runs after the name pass, so it overrides the name "x".
        assert_eq!(table.resolve("x").unwrap(), 0x200);
    }

    #[test]
    fn test_alias_with_missing_canonical_is_skipped() {
        let records: &[KeysymRecord] = &[("Escape", 0xff1b, None)];
        let table = KeysymTable::from_records(records, &[("Esc", "Escape"), ("Del", "Delete")]);

        assert_eq!(table.resolve("Esc").unwrap(), 0xff1b);
        assert!(!table.contains("Del"));
        assert_eq!(table.len(), 2);
    }

    /// Aliases are registered last and override any earlier entry.
    #[test]
    fn test_alias_overrides_existing_entry() {
        let records: &[KeysymRecord] = &[("Shift_L", 0xffe1, None), ("Shift", 0x1234, None)];
        let table = KeysymTable::from_records(records, &[("Shift", "Shift_L")]);
        assert_eq!(table.resolve("Shift").unwrap(), 0xffe1);
    }

    #[test]
    fn test_empty_table() {
        let table = KeysymTable::default();
        assert!(table.is_empty());
        assert!(table.resolve("a").is_err());
    }

    #[test]
    fn test_global_table_is_shared_across_threads() {
        let handles: Vec<_> = (0..4)
            .map(|_| std::thread::spawn(|| resolve("Ctrl").unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 0xffe3);
        }
    }
}
