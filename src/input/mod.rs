// SPDX-License-Identifier: GPL-3.0-only

//! Keyboard input for RFB clients.
//!
//! This module turns key names and text into RFB `KeyEvent` messages and writes
//! them to the connection in press/release order.
//!
//! # Features
//!
//! - **Keysym table**: Resolve keysym names, single characters and aliases to codes
//! - **Key events**: Encode the 8-byte `KeyEvent` wire message
//! - **Virtual keyboard**: Hold, press and type keys with guaranteed reverse-order release
//!
//! # Key Identifiers
//!
//! Keys are named by string, in one of three forms:
//!
//! 1. **X11 keysym names**: `"Shift_L"`, `"BackSpace"`, `"Return"`, `"F5"`
//! 2. **Single characters**: `"a"`, `"1"`, `" "`, `"é"`, `"ł"`, `"α"`
//! 3. **Aliases**: `"Ctrl"`, `"Alt"`, `"Shift"`, `"Super"`, `"Cmd"`, `"Esc"`,
//!    `"Del"`, `"Backspace"`
//!
//! # Example Usage
//!
//! ```rust
//! use rfb_keyboard::input::{resolve, Keyboard};
//!
//! assert_eq!(resolve("Ctrl").unwrap(), 0xffe3);
//!
//! let mut keyboard = Keyboard::new(Vec::new());
//!
//! // Select all, then type over it.
//! keyboard.press(["Ctrl", "a"]).unwrap();
//! keyboard.write("hello").unwrap();
//! keyboard.press(["Return"]).unwrap();
//!
//! // Keys pressed before an unknown one are released before the error returns.
//! assert!(keyboard.press(["Shift", "NotAKey"]).is_err());
//! ```

// Sub-modules
pub mod keysym;
pub mod keysymdef;
pub mod message;
pub mod virtual_keyboard;

// Re-export public API
pub use keysym::{resolve, KeysymTable, ALIASES};
pub use keysymdef::{KeysymRecord, KEYSYMDEF};
pub use message::{KeyEvent, KeyState, KEY_EVENT_LEN, KEY_EVENT_MESSAGE_TYPE};
pub use virtual_keyboard::{KeyHold, Keyboard};

// ============================================================================
// Module Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::decode;

    /// Every dataset name resolves to its record, unless a character entry
    /// with the same spelling was registered over it.
    #[test]
    fn test_every_dataset_name_resolves() {
        for &(name, keysym, _) in KEYSYMDEF {
            let expected = KEYSYMDEF
                .iter()
                .rev()
                .find(|&&(_, _, ch)| ch.is_some_and(|c| c.to_string() == name))
                .map_or(keysym, |&(_, code, _)| code);
            assert_eq!(resolve(name).unwrap(), expected, "keysym for {name}");
        }
    }

    /// Every character in the dataset resolves to the last record that carries it.
    #[test]
    fn test_every_dataset_character_resolves() {
        for &(name, _, ch) in KEYSYMDEF {
            let Some(ch) = ch else { continue };
            let last = KEYSYMDEF
                .iter()
                .rev()
                .find(|&&(_, _, c)| c == Some(ch))
                .map(|&(_, keysym, _)| keysym);
            assert_eq!(resolve(&ch.to_string()).ok(), last, "{ch:?} from {name}");
        }
    }

    /// Characters claimed by records with different codes resolve to the
    /// last such record.
    #[test]
    fn test_dataset_character_collisions_last_write_wins() {
        let mut collisions = 0;
        for (index, &(_, first, ch)) in KEYSYMDEF.iter().enumerate() {
            let Some(ch) = ch else { continue };
            let Some(&(later, code, _)) = KEYSYMDEF[index + 1..]
                .iter()
                .rev()
                .find(|&&(_, _, c)| c == Some(ch))
            else {
                continue;
            };
            if code == first {
                continue;
            }
            collisions += 1;
            assert_eq!(resolve(&ch.to_string()).unwrap(), code, "{ch:?} should go to {later}");
        }
        assert!(collisions >= 2, "dataset should contain colliding characters");
    }

    /// Printable ASCII types as its own keysym.
    #[test]
    fn test_printable_ascii_is_identity() {
        for code in 0x20u8..=0x7e {
            let ch = char::from(code);
            assert_eq!(resolve(&ch.to_string()).unwrap(), u32::from(code), "{ch:?}");
        }
    }

    #[test]
    fn test_keyboard_uses_global_table() {
        let mut keyboard = Keyboard::new(Vec::new());
        keyboard.press(["Page_Down"]).unwrap();

        let keysym = KeysymTable::global().resolve("Page_Down").unwrap();
        assert_eq!(
            decode(keyboard.get_ref()),
            vec![(KeyState::Pressed, keysym), (KeyState::Released, keysym)]
        );
        assert_eq!(
            &keyboard.get_ref()[..KEY_EVENT_LEN],
            &KeyEvent::press(keysym).to_bytes()
        );
    }
}
