// SPDX-License-Identifier: GPL-3.0-only

//! Virtual keyboard for RFB key event emission.
//!
//! [`Keyboard`] writes `KeyEvent` messages to a byte sink. It handles:
//!
//! - Raw keysym press and release (`down`, `up`, `click`)
//! - Scoped holds over named keys that release in reverse order
//! - Chords (`press`) and sequential typing (`write`)
//!
//! # Holds
//!
//! [`Keyboard::hold`] presses keys in the given order and returns a
//! [`KeyHold`] guard. The guard releases the keys in reverse order, either
//! through [`KeyHold::release`], which reports sink errors, or when it is
//! dropped (including during unwinding). Every key whose press message
//! reached the sink gets a matching release.
//!
//! The guard derefs to the keyboard, so more keys can be sent while the chord
//! is held. Nested holds unwind as a stack.
//!
//! # Sink
//!
//! Any [`Write`] works. Pass `&mut stream` to keep ownership of the
//! connection with the caller. Flushing is left to the sink.
//!
//! # Example
//!
//! ```rust
//! use rfb_keyboard::input::Keyboard;
//!
//! let mut sink = Vec::new();
//! let mut keyboard = Keyboard::new(&mut sink);
//!
//! // Ctrl+Alt+Del
//! keyboard.press(["Ctrl", "Alt", "Del"]).unwrap();
//!
//! // Shift held while typing
//! let mut shift = keyboard.hold(["Shift"]).unwrap();
//! shift.write("abc").unwrap();
//! shift.release().unwrap();
//!
//! assert_eq!(sink.len(), (6 + 2 + 6) * 8);
//! ```

use std::io::Write;
use std::ops::{Deref, DerefMut};

use crate::error::Result;
use crate::input::keysym::resolve;
use crate::input::message::KeyEvent;

/// Virtual keyboard writing RFB key events to a byte sink.
///
/// # Thread Safety
///
/// Every emitting operation takes `&mut self`. Interleaving events from two
/// keyboards on one connection breaks release ordering, so callers sharing a
/// connection must serialize access themselves.
pub struct Keyboard<W: Write> {
    writer: W,
}

impl<W: Write> std::fmt::Debug for Keyboard<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Keyboard").finish_non_exhaustive()
    }
}

impl<W: Write> Keyboard<W> {
    /// Creates a keyboard that writes to `writer`.
    #[must_use]
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns a reference to the underlying sink.
    #[must_use]
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Returns a mutable reference to the underlying sink.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes the keyboard, returning the sink.
    #[must_use]
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Sends a key press for a raw keysym.
    ///
    /// # Errors
    ///
    /// Returns [`KeyboardError::Io`](crate::KeyboardError::Io) if the sink
    /// refuses the write.
    pub fn down(&mut self, keysym: u32) -> Result<()> {
        self.emit(KeyEvent::press(keysym))
    }

    /// Sends a key release for a raw keysym.
    ///
    /// # Errors
    ///
    /// Returns [`KeyboardError::Io`](crate::KeyboardError::Io) if the sink
    /// refuses the write.
    pub fn up(&mut self, keysym: u32) -> Result<()> {
        self.emit(KeyEvent::release(keysym))
    }

    /// Sends a press immediately followed by a release for a raw keysym.
    ///
    /// # Errors
    ///
    /// Returns [`KeyboardError::Io`](crate::KeyboardError::Io) if the sink
    /// refuses either write. The release is not attempted if the press failed.
    pub fn click(&mut self, keysym: u32) -> Result<()> {
        self.down(keysym)?;
        self.up(keysym)
    }

    /// Presses `keys` in order and returns a guard that releases them in
    /// reverse order.
    ///
    /// # Errors
    ///
    /// - [`KeyboardError::UnknownKey`](crate::KeyboardError::UnknownKey) if a
    ///   key does not resolve. Keys pressed before it are released first and
    ///   later keys are never pressed.
    /// - [`KeyboardError::Io`](crate::KeyboardError::Io) if the sink refuses a
    ///   press. Keys already pressed are released on a best-effort basis.
    pub fn hold<I>(&mut self, keys: I) -> Result<KeyHold<'_, W>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut hold = KeyHold {
            keyboard: self,
            pressed: Vec::new(),
        };

        // On error the guard drops here and unwinds the keys pressed so far.
        for key in keys {
            let keysym = resolve(key.as_ref())?;
            hold.keyboard.down(keysym)?;
            hold.pressed.push(keysym);
        }

        Ok(hold)
    }

    /// Runs `f` while `keys` are held, then releases them.
    ///
    /// The keys are released even if `f` returns an error or panics.
    ///
    /// # Errors
    ///
    /// Returns the first error from pressing the keys, from `f`, or from
    /// releasing the keys after `f` succeeded.
    pub fn hold_with<I, T, F>(&mut self, keys: I, f: F) -> Result<T>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        F: FnOnce(&mut Self) -> Result<T>,
    {
        let mut hold = self.hold(keys)?;
        let value = f(&mut *hold)?;
        hold.release()?;
        Ok(value)
    }

    /// Presses all `keys` in order, then releases them in reverse order.
    ///
    /// # Errors
    ///
    /// Same as [`hold`](Self::hold), plus sink errors while releasing.
    pub fn press<I>(&mut self, keys: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        self.hold(keys)?.release()
    }

    /// Types `text` one character at a time.
    ///
    /// Each character is pressed and released before the next one starts.
    /// Characters resolve through the keysym table. Control characters such as
    /// `'\n'` have no entry; send those with [`press`](Self::press) by name.
    ///
    /// # Errors
    ///
    /// Stops at the first character that fails to resolve or to send.
    /// Characters before it have already been typed.
    pub fn write(&mut self, text: &str) -> Result<()> {
        let mut buf = [0u8; 4];
        for ch in text.chars() {
            let key: &str = ch.encode_utf8(&mut buf);
            self.press([key])?;
        }
        Ok(())
    }

    fn emit(&mut self, event: KeyEvent) -> Result<()> {
        self.writer.write_all(&event.to_bytes())?;
        tracing::debug!("Sent key {:?}: keysym={:#06x}", event.state, event.keysym);
        Ok(())
    }
}

/// Keys held down by [`Keyboard::hold`].
///
/// Releases the held keys in reverse order on [`release`](Self::release) or
/// on drop.
#[must_use = "dropping the hold releases the keys immediately"]
pub struct KeyHold<'a, W: Write> {
    keyboard: &'a mut Keyboard<W>,
    pressed: Vec<u32>,
}

impl<W: Write> std::fmt::Debug for KeyHold<'_, W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyHold")
            .field("pressed", &self.pressed)
            .finish_non_exhaustive()
    }
}

impl<W: Write> KeyHold<'_, W> {
    /// Keysyms currently held, in press order.
    #[must_use]
    pub fn held(&self) -> &[u32] {
        &self.pressed
    }

    /// Releases the held keys in reverse order.
    ///
    /// Every key is attempted even if an earlier release fails.
    ///
    /// # Errors
    ///
    /// Returns the first sink error encountered.
    pub fn release(mut self) -> Result<()> {
        self.release_all()
    }

    fn release_all(&mut self) -> Result<()> {
        let mut first_err = None;
        while let Some(keysym) = self.pressed.pop() {
            if let Err(err) = self.keyboard.up(keysym) {
                first_err.get_or_insert(err);
            }
        }
        first_err.map_or(Ok(()), Err)
    }
}

impl<W: Write> Deref for KeyHold<'_, W> {
    type Target = Keyboard<W>;

    fn deref(&self) -> &Self::Target {
        self.keyboard
    }
}

impl<W: Write> DerefMut for KeyHold<'_, W> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.keyboard
    }
}

impl<W: Write> Drop for KeyHold<'_, W> {
    fn drop(&mut self) {
        if let Err(err) = self.release_all() {
            tracing::warn!("Failed to release held keys: {}", err);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KeyboardError;
    use crate::input::message::KeyState;
    use crate::test_support::{decode, init_tracing, FailingSink};

    fn down(keysym: u32) -> (KeyState, u32) {
        (KeyState::Pressed, keysym)
    }

    fn up(keysym: u32) -> (KeyState, u32) {
        (KeyState::Released, keysym)
    }

    const CTRL: u32 = 0xffe3;
    const ALT: u32 = 0xffe9;
    const DEL: u32 = 0xffff;
    const SHIFT: u32 = 0xffe1;

    /// Chords press in order and release in exact reverse.
    #[test]
    fn test_press_chord_order() {
        init_tracing();
        let mut keyboard = Keyboard::new(Vec::new());
        keyboard.press(["Ctrl", "Alt", "Del"]).unwrap();

        assert_eq!(
            decode(keyboard.get_ref()),
            vec![down(CTRL), down(ALT), down(DEL), up(DEL), up(ALT), up(CTRL)]
        );
    }

    /// Each character completes its press/release pair before the next.
    #[test]
    fn test_write_types_sequentially() {
        let mut keyboard = Keyboard::new(Vec::new());
        keyboard.write("ab").unwrap();

        assert_eq!(
            decode(keyboard.get_ref()),
            vec![down(0x61), up(0x61), down(0x62), up(0x62)]
        );
    }

    #[test]
    fn test_backspace_wire_bytes() {
        let mut keyboard = Keyboard::new(Vec::new());
        keyboard.press(["BackSpace"]).unwrap();

        assert_eq!(
            keyboard.into_inner(),
            vec![
                0x04, 0x01, 0x00, 0x00, 0x00, 0x00, 0xff, 0x08, //
                0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0x08,
            ]
        );
    }

    /// A failed lookup releases only what was pressed, then surfaces.
    #[test]
    fn test_hold_partial_failure_releases_pressed_keys() {
        init_tracing();
        let mut keyboard = Keyboard::new(Vec::new());

        let err = keyboard.hold(["a", "unknown-key", "b"]).unwrap_err();
        assert!(matches!(err, KeyboardError::UnknownKey(ref key) if key == "unknown-key"));

        assert_eq!(decode(keyboard.get_ref()), vec![down(0x61), up(0x61)]);
    }

    #[test]
    fn test_press_partial_failure() {
        let mut keyboard = Keyboard::new(Vec::new());
        let err = keyboard.press(["Ctrl", "Shift", "nope"]).unwrap_err();
        assert!(err.is_unknown_key());

        assert_eq!(
            decode(keyboard.get_ref()),
            vec![down(CTRL), down(SHIFT), up(SHIFT), up(CTRL)]
        );
    }

    /// Unknown first key: nothing is sent at all.
    #[test]
    fn test_hold_unknown_first_key_sends_nothing() {
        let mut keyboard = Keyboard::new(Vec::new());
        assert!(keyboard.hold(["unknown-key", "a"]).is_err());
        assert!(keyboard.get_ref().is_empty());
    }

    #[test]
    fn test_hold_explicit_release() {
        let mut keyboard = Keyboard::new(Vec::new());

        let hold = keyboard.hold(["Ctrl", "c"]).unwrap();
        assert_eq!(hold.held(), &[CTRL, 0x63]);
        assert_eq!(decode(hold.get_ref()), vec![down(CTRL), down(0x63)]);
        hold.release().unwrap();

        assert_eq!(
            decode(keyboard.get_ref()),
            vec![down(CTRL), down(0x63), up(0x63), up(CTRL)]
        );
    }

    /// The guard releases on an early return through `?`.
    #[test]
    fn test_hold_released_on_early_return() {
        fn copy_then_fail(keyboard: &mut Keyboard<Vec<u8>>) -> Result<()> {
            let mut ctrl = keyboard.hold(["Ctrl"])?;
            ctrl.write("c")?;
            ctrl.write("\u{1F600}")?;
            ctrl.release()
        }

        let mut keyboard = Keyboard::new(Vec::new());
        let err = copy_then_fail(&mut keyboard).unwrap_err();
        assert!(err.is_unknown_key());

        assert_eq!(
            decode(keyboard.get_ref()),
            vec![down(CTRL), down(0x63), up(0x63), up(CTRL)]
        );
    }

    #[test]
    fn test_hold_released_on_drop() {
        let mut keyboard = Keyboard::new(Vec::new());
        {
            let _hold = keyboard.hold(["Alt", "Tab"]).unwrap();
        }

        assert_eq!(
            decode(keyboard.get_ref()),
            vec![down(ALT), down(0xff09), up(0xff09), up(ALT)]
        );
    }

    /// Inner holds unwind before outer ones.
    #[test]
    fn test_nested_holds() {
        let mut keyboard = Keyboard::new(Vec::new());

        let mut ctrl = keyboard.hold(["Ctrl"]).unwrap();
        let mut shift = ctrl.hold(["Shift"]).unwrap();
        shift.press(["Esc"]).unwrap();
        shift.release().unwrap();
        ctrl.release().unwrap();

        assert_eq!(
            decode(keyboard.get_ref()),
            vec![
                down(CTRL),
                down(SHIFT),
                down(0xff1b),
                up(0xff1b),
                up(SHIFT),
                up(CTRL),
            ]
        );
    }

    #[test]
    fn test_hold_with_returns_closure_value() {
        let mut keyboard = Keyboard::new(Vec::new());

        let typed = keyboard
            .hold_with(["Shift"], |kb| {
                kb.write("x")?;
                Ok(1)
            })
            .unwrap();
        assert_eq!(typed, 1);

        assert_eq!(
            decode(keyboard.get_ref()),
            vec![down(SHIFT), down(0x78), up(0x78), up(SHIFT)]
        );
    }

    #[test]
    fn test_hold_with_releases_on_closure_error() {
        let mut keyboard = Keyboard::new(Vec::new());

        let err = keyboard
            .hold_with(["Super"], |kb| kb.press(["bogus"]))
            .unwrap_err();
        assert!(err.is_unknown_key());

        assert_eq!(decode(keyboard.get_ref()), vec![down(0xffeb), up(0xffeb)]);
    }

    #[test]
    fn test_hold_with_releases_on_panic() {
        let mut keyboard = Keyboard::new(Vec::new());

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _ = keyboard.hold_with(["Ctrl"], |_| -> Result<()> { panic!("boom") });
        }));
        assert!(result.is_err());

        assert_eq!(decode(keyboard.get_ref()), vec![down(CTRL), up(CTRL)]);
    }

    /// `write` stops at the first unknown character.
    #[test]
    fn test_write_unknown_character() {
        let mut keyboard = Keyboard::new(Vec::new());
        let err = keyboard.write("a\u{1F600}b").unwrap_err();
        assert!(matches!(err, KeyboardError::UnknownKey(ref key) if key == "\u{1F600}"));

        assert_eq!(decode(keyboard.get_ref()), vec![down(0x61), up(0x61)]);
    }

    /// Control characters have no keysym; the keys are sent by name instead.
    #[test]
    fn test_write_control_characters() {
        let mut keyboard = Keyboard::new(Vec::new());
        let err = keyboard.write("a\n").unwrap_err();
        assert!(matches!(err, KeyboardError::UnknownKey(ref key) if key == "\n"));

        keyboard.press(["Return"]).unwrap();
        assert_eq!(
            decode(keyboard.get_ref()),
            vec![down(0x61), up(0x61), down(0xff0d), up(0xff0d)]
        );
    }

    /// Latin-2 letters type through their legacy keysyms.
    #[test]
    fn test_write_latin2() {
        let mut keyboard = Keyboard::new(Vec::new());
        keyboard.write("ł").unwrap();

        assert_eq!(decode(keyboard.get_ref()), vec![down(0x01b3), up(0x01b3)]);
    }

    #[test]
    fn test_write_cyrillic() {
        let mut keyboard = Keyboard::new(Vec::new());
        keyboard.write("привет").unwrap();

        let expected: Vec<_> = [0x06d0, 0x06d2, 0x06c9, 0x06d7, 0x06c5, 0x06d4]
            .into_iter()
            .flat_map(|keysym| [down(keysym), up(keysym)])
            .collect();
        assert_eq!(decode(keyboard.get_ref()), expected);
    }

    #[test]
    fn test_write_non_ascii() {
        let mut keyboard = Keyboard::new(Vec::new());
        keyboard.write("é€").unwrap();

        assert_eq!(
            decode(keyboard.get_ref()),
            vec![down(0xe9), up(0xe9), down(0x20ac), up(0x20ac)]
        );
    }

    #[test]
    fn test_empty_operations_send_nothing() {
        let mut keyboard = Keyboard::new(Vec::new());
        keyboard.write("").unwrap();
        keyboard.press(std::iter::empty::<&str>()).unwrap();
        keyboard.hold(Vec::<String>::new()).unwrap().release().unwrap();

        assert!(keyboard.get_ref().is_empty());
    }

    #[test]
    fn test_raw_keysym_operations() {
        let mut keyboard = Keyboard::new(Vec::new());
        keyboard.down(0x1008_ff13).unwrap();
        keyboard.up(0x1008_ff13).unwrap();
        keyboard.click(0x20).unwrap();

        assert_eq!(
            decode(keyboard.get_ref()),
            vec![down(0x1008_ff13), up(0x1008_ff13), down(0x20), up(0x20)]
        );

        keyboard.get_mut().clear();
        keyboard.click(0xff0d).unwrap();
        assert_eq!(decode(keyboard.get_ref()), vec![down(0xff0d), up(0xff0d)]);
    }

    /// The caller can lend the sink and keep ownership.
    #[test]
    fn test_borrowed_sink() {
        let mut sink = Vec::new();
        {
            let mut keyboard = Keyboard::new(&mut sink);
            keyboard.press(vec!["Esc".to_string()]).unwrap();
        }
        assert_eq!(decode(&sink), vec![down(0xff1b), up(0xff1b)]);
    }

    #[test]
    fn test_sink_error_on_press() {
        let mut keyboard = Keyboard::new(FailingSink::new(0));
        let err = keyboard.press(["a"]).unwrap_err();

        match err {
            KeyboardError::Io(io) => assert_eq!(io.kind(), std::io::ErrorKind::BrokenPipe),
            other => panic!("expected Io, got {other:?}"),
        }
        assert!(keyboard.get_ref().written.is_empty());
    }

    /// A failed press is not released; earlier keys still get their release attempt.
    #[test]
    fn test_sink_error_mid_hold() {
        init_tracing();
        let mut keyboard = Keyboard::new(FailingSink::new(8));
        let err = keyboard.hold(["Ctrl", "a"]).unwrap_err();
        assert!(matches!(err, KeyboardError::Io(_)));

        // The release of Ctrl was attempted but the sink was already full.
        assert_eq!(decode(&keyboard.get_ref().written), vec![down(CTRL)]);
        assert_eq!(keyboard.get_ref().attempts, 3);
    }

    /// `release` tries every key and reports the first sink error.
    #[test]
    fn test_sink_error_on_release() {
        let mut keyboard = Keyboard::new(FailingSink::new(24));
        let hold = keyboard.hold(["Ctrl", "Alt"]).unwrap();
        let err = hold.release().unwrap_err();
        assert!(matches!(err, KeyboardError::Io(_)));

        assert_eq!(
            decode(&keyboard.get_ref().written),
            vec![down(CTRL), down(ALT), up(ALT)]
        );
        assert_eq!(keyboard.get_ref().attempts, 4);
    }

    #[test]
    fn test_debug_does_not_expose_sink() {
        let mut keyboard = Keyboard::new(vec![0xAAu8]);
        assert_eq!(format!("{keyboard:?}"), "Keyboard { .. }");

        let hold = keyboard.hold(["a"]).unwrap();
        assert_eq!(format!("{hold:?}"), "KeyHold { pressed: [97], .. }");
    }
}
