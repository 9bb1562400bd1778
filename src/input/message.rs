// SPDX-License-Identifier: GPL-3.0-only

//! RFB `KeyEvent` client message.
//!
//! Every key transition is sent as a fixed 8-byte message:
//!
//! | Offset | Size | Value                              |
//! |--------|------|------------------------------------|
//! | 0      | 1    | message type, always `4`           |
//! | 1      | 1    | down flag: `1` pressed, `0` released |
//! | 2      | 2    | padding, always zero               |
//! | 4      | 4    | keysym, big-endian                 |

/// Message type of the `KeyEvent` client message.
pub const KEY_EVENT_MESSAGE_TYPE: u8 = 4;

/// Encoded length of a `KeyEvent` message in bytes.
pub const KEY_EVENT_LEN: usize = 8;

/// Key event state for the wire message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyState {
    /// Key was pressed down.
    Pressed,
    /// Key was released.
    Released,
}

impl KeyState {
    /// Value of the down flag byte.
    #[must_use]
    pub fn down_flag(self) -> u8 {
        match self {
            Self::Pressed => 1,
            Self::Released => 0,
        }
    }
}

/// A key event to be written to the remote framebuffer server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The X11 keysym.
    pub keysym: u32,
    /// Whether the key was pressed or released.
    pub state: KeyState,
}

impl KeyEvent {
    /// Creates a new key press event.
    #[must_use]
    pub fn press(keysym: u32) -> Self {
        Self {
            keysym,
            state: KeyState::Pressed,
        }
    }

    /// Creates a new key release event.
    #[must_use]
    pub fn release(keysym: u32) -> Self {
        Self {
            keysym,
            state: KeyState::Released,
        }
    }

    /// Encodes the event as it appears on the wire.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; KEY_EVENT_LEN] {
        let [k0, k1, k2, k3] = self.keysym.to_be_bytes();
        [
            KEY_EVENT_MESSAGE_TYPE,
            self.state.down_flag(),
            0,
            0,
            k0,
            k1,
            k2,
            k3,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// BackSpace press and release encode byte-for-byte.
    #[test]
    fn test_backspace_bytes() {
        assert_eq!(
            KeyEvent::press(0xff08).to_bytes(),
            [0x04, 0x01, 0x00, 0x00, 0x00, 0x00, 0xff, 0x08]
        );
        assert_eq!(
            KeyEvent::release(0xff08).to_bytes(),
            [0x04, 0x00, 0x00, 0x00, 0x00, 0x00, 0xff, 0x08]
        );
    }

    /// The keysym occupies all four trailing bytes, most significant first.
    #[test]
    fn test_keysym_is_big_endian() {
        let bytes = KeyEvent::press(0x0100_20ac).to_bytes();
        assert_eq!(&bytes[4..], &[0x01, 0x00, 0x20, 0xac]);
    }

    #[test]
    fn test_key_event_construction() {
        let press = KeyEvent::press(0x61);
        assert_eq!(press.keysym, 0x61);
        assert_eq!(press.state, KeyState::Pressed);

        let release = KeyEvent::release(0x61);
        assert_eq!(release.keysym, 0x61);
        assert_eq!(release.state, KeyState::Released);
    }

    #[test]
    fn test_down_flag() {
        assert_eq!(KeyState::Pressed.down_flag(), 1);
        assert_eq!(KeyState::Released.down_flag(), 0);
    }
}
