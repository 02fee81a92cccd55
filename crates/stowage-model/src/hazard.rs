// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Hazard notification.
//!
//! Only some container kinds can put a vessel in a hazardous situation. Those
//! kinds implement `HazardNotifier` and raise a hazard when an overfill is
//! attempted, before the load is refused. A hazard is emitted as a `WARN`
//! level `tracing` event carrying the container serial; routing it anywhere is
//! up to the subscriber the host installs.
//!
//! Notification never changes container state and cannot fail.

use stowage_core::serial::SerialNumber;

/// The capability to raise hazard notifications.
///
/// Implemented by `LiquidContainer` and `GasContainer` only.
pub trait HazardNotifier {
    /// The message attached to every hazard this container raises.
    fn hazard_message(&self) -> &'static str;

    /// Raises a hazard for the container identified by `serial`.
    fn notify_hazard(&self, serial: SerialNumber) {
        tracing::warn!(
            serial = %serial,
            kind = %serial.kind(),
            "{} {}",
            self.hazard_message(),
            serial
        );
    }
}

/// Collects formatted `tracing` output so tests can assert on hazard events.
#[cfg(test)]
pub(crate) mod capture {
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for SharedBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SharedBuffer {
        type Writer = SharedBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Runs `f` with a thread-local subscriber and returns its result together
    /// with everything that was logged.
    pub(crate) fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, String) {
        let buffer = SharedBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buffer.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        let result = tracing::subscriber::with_default(subscriber, f);
        let logged = String::from_utf8_lossy(&buffer.0.lock().unwrap()).into_owned();
        (result, logged)
    }
}
