// SPDX-License-Identifier: GPL-3.0-only

//! rfb-keyboard - Virtual keyboard input for RFB (VNC) clients
//!
//! This crate encodes keyboard input for the remote framebuffer protocol. It
//! turns key names and text into `KeyEvent` client messages and writes them to
//! an already-open connection in the correct press/release order.
//!
//! # Architecture
//!
//! The crate consists of two components:
//!
//! 1. **Keysym table** (`input::keysym`): A process-wide, read-only map from
//!    key names, single characters and aliases to X11 keysym codes.
//!
//! 2. **Virtual keyboard** (`input::virtual_keyboard`): Writes key events to a
//!    byte sink. Held keys are released in reverse order on every exit path,
//!    which makes chords and typed text safe to abort halfway.
//!
//! Connection setup, authentication and the rest of the protocol are left to
//! the caller. Any [`std::io::Write`] can serve as the sink.
//!
//! # Modules
//!
//! - `error`: Error type shared by lookup and emission
//! - `input`: Keysym table, key event encoding and the virtual keyboard

pub mod error;
pub mod input;

#[cfg(test)]
pub(crate) mod test_support;

pub use crate::error::{KeyboardError, Result};
pub use crate::input::{resolve, KeyHold, Keyboard};

// ============================================================================
// Integration Tests
// ============================================================================

#[cfg(test)]
mod integration_tests {
    use crate::input::{KeyState, KEY_EVENT_LEN};
    use crate::test_support::{decode, init_tracing};
    use crate::{resolve, Keyboard, KeyboardError};
    use std::io::{Read, Seek, SeekFrom};

    /// Integration Test 1: Ctrl+Alt+Del over a lent sink
    ///
    /// Verifies the full path from names through the table to wire bytes,
    /// with the caller keeping ownership of the sink.
    #[test]
    fn test_ctrl_alt_del_flow() {
        init_tracing();
        let mut sink = Vec::new();
        Keyboard::new(&mut sink).press(["Ctrl", "Alt", "Del"]).unwrap();

        assert_eq!(sink.len(), 6 * KEY_EVENT_LEN);
        let states: Vec<KeyState> = decode(&sink).into_iter().map(|(state, _)| state).collect();
        assert_eq!(
            states,
            [
                KeyState::Pressed,
                KeyState::Pressed,
                KeyState::Pressed,
                KeyState::Released,
                KeyState::Released,
                KeyState::Released,
            ]
        );

        let keysyms: Vec<u32> = decode(&sink).into_iter().map(|(_, keysym)| keysym).collect();
        let ctrl = resolve("Ctrl").unwrap();
        let alt = resolve("Alt").unwrap();
        let del = resolve("Del").unwrap();
        assert_eq!(keysyms, [ctrl, alt, del, del, alt, ctrl]);
    }

    /// Integration Test 2: File-backed sink
    ///
    /// Verifies that a real file receives exactly the bytes of the session.
    #[test]
    fn test_file_sink_receives_exact_bytes() {
        let mut file = tempfile::tempfile().unwrap();
        {
            let mut keyboard = Keyboard::new(&mut file);
            keyboard.press(["Backspace"]).unwrap();
            keyboard.write("ok").unwrap();
        }

        file.seek(SeekFrom::Start(0)).unwrap();
        let mut bytes = Vec::new();
        file.read_to_end(&mut bytes).unwrap();

        assert_eq!(bytes.len(), 6 * KEY_EVENT_LEN);
        assert_eq!(&bytes[..8], &[0x04, 0x01, 0x00, 0x00, 0x00, 0x00, 0xff, 0x08]);
        assert_eq!(&bytes[8..16], &[0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0x08]);
        assert_eq!(
            decode(&bytes[16..]),
            vec![
                (KeyState::Pressed, 0x6f),
                (KeyState::Released, 0x6f),
                (KeyState::Pressed, 0x6b),
                (KeyState::Released, 0x6b),
            ]
        );
    }

    /// Integration Test 3: Login sequence with a failed step
    ///
    /// A typical scripted session: type a user name, tab, type a password
    /// containing an untypeable character. Everything before the bad character
    /// goes out with balanced press/release pairs; nothing after it does.
    #[test]
    fn test_scripted_session_aborts_cleanly() {
        init_tracing();
        let mut keyboard = Keyboard::new(Vec::new());

        let result = (|| -> crate::Result<()> {
            keyboard.write("root")?;
            keyboard.press(["Tab"])?;
            let mut shift = keyboard.hold(["Shift"])?;
            shift.write("P\u{2603}ss")?;
            shift.release()?;
            keyboard.press(["Return"])
        })();

        let err = result.unwrap_err();
        assert!(matches!(err, KeyboardError::UnknownKey(ref key) if key == "\u{2603}"));

        let events = decode(keyboard.get_ref());
        let pressed = events.iter().filter(|(s, _)| *s == KeyState::Pressed).count();
        let released = events.iter().filter(|(s, _)| *s == KeyState::Released).count();
        assert_eq!(pressed, released, "every press must be released");

        // root (4 pairs) + Tab + Shift + P
        assert_eq!(events.len(), (4 + 1 + 1 + 1) * 2);
        assert_eq!(events.last(), Some(&(KeyState::Released, 0xffe1)));
        assert!(!events.iter().any(|&(_, keysym)| keysym == 0xff0d));
    }

    /// Integration Test 4: Concurrent keyboards on separate sinks
    ///
    /// The shared table serves lookups from many threads; each keyboard
    /// keeps its own ordering.
    #[test]
    fn test_concurrent_keyboards() {
        let handles: Vec<_> = ["abc", "xyz", "123", "!?."]
            .into_iter()
            .map(|text| {
                std::thread::spawn(move || {
                    let mut keyboard = Keyboard::new(Vec::new());
                    keyboard.write(text).unwrap();
                    (text, keyboard.into_inner())
                })
            })
            .collect();

        for handle in handles {
            let (text, bytes) = handle.join().unwrap();
            let expected: Vec<_> = text
                .chars()
                .flat_map(|c| [(KeyState::Pressed, c as u32), (KeyState::Released, c as u32)])
                .collect();
            assert_eq!(decode(&bytes), expected);
        }
    }
}
