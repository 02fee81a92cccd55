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

//! Error types for the container and vessel model.
//!
//! `OverfillError` is the only way a load can fail. Its messages are fixed per
//! cause, and every variant also carries the numbers that led to the rejection
//! so callers can report more than the message. Vessel capacity rejections are
//! not errors and live in `vessel::RejectionReason`.

use stowage_core::serial::SerialNumber;

/// A load was refused by a container.
///
/// The container's state is unchanged when this is returned, so the load may
/// be retried with a corrected weight.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum OverfillError {
    /// A liquid load exceeded the hazardous (50%) or regular (90%) limit.
    /// The message is the same for both limits.
    #[error("Overfilled hazardous liquid container")]
    Liquid {
        serial: SerialNumber,
        weight: f64,
        limit: f64,
        hazardous: bool,
    },
    /// A gas load exceeded the maximum payload.
    #[error("Overfilled gas container")]
    Gas {
        serial: SerialNumber,
        weight: f64,
        limit: f64,
    },
    /// A refrigerated container is colder than its product requires.
    #[error("Temperature too low for product type")]
    TemperatureTooLow {
        serial: SerialNumber,
        required_temp: f64,
        container_temp: f64,
    },
    /// A refrigerated load exceeded the maximum payload.
    #[error("Overfilled refrigerated container")]
    Refrigerated {
        serial: SerialNumber,
        weight: f64,
        limit: f64,
    },
}
