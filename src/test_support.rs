// SPDX-License-Identifier: GPL-3.0-only

//! Helpers shared by the unit and integration tests.

use std::io::{self, Write};

use crate::input::{KeyState, KEY_EVENT_LEN, KEY_EVENT_MESSAGE_TYPE};

/// Installs a test-friendly subscriber once. Honors `RUST_LOG`.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Splits a sink's bytes into `(state, keysym)` pairs, checking the framing.
pub(crate) fn decode(bytes: &[u8]) -> Vec<(KeyState, u32)> {
    assert_eq!(
        bytes.len() % KEY_EVENT_LEN,
        0,
        "sink holds a partial key event"
    );

    bytes
        .chunks_exact(KEY_EVENT_LEN)
        .map(|event| {
            assert_eq!(event[0], KEY_EVENT_MESSAGE_TYPE, "wrong message type");
            assert_eq!(&event[2..4], &[0, 0], "padding must be zero");
            let state = match event[1] {
                1 => KeyState::Pressed,
                0 => KeyState::Released,
                flag => panic!("invalid down flag {flag}"),
            };
            let keysym = u32::from_be_bytes([event[4], event[5], event[6], event[7]]);
            (state, keysym)
        })
        .collect()
}

/// Sink that accepts `budget` bytes and then fails every write.
#[derive(Debug, Default)]
pub(crate) struct FailingSink {
    pub written: Vec<u8>,
    pub attempts: usize,
    budget: usize,
}

impl FailingSink {
    pub(crate) fn new(budget: usize) -> Self {
        Self {
            budget,
            ..Self::default()
        }
    }
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.attempts += 1;
        if buf.len() > self.budget {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        self.budget -= buf.len();
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
