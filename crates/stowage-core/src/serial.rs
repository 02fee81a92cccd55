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

//! Container serial numbers.
//!
//! Every container is stamped with a serial of the form `KON-<kind>-<sequence>`
//! at construction. The kind code is a single letter (`L`, `G` or `C`) and the
//! sequence is drawn from **one counter shared by all kinds**, so a liquid
//! container built after a gas container always carries a larger sequence:
//!
//! ```rust
//! use stowage_core::serial::{KindCode, SerialGenerator};
//!
//! let generator = SerialGenerator::new();
//! let a = generator.next_serial(KindCode::Gas);
//! let b = generator.next_serial(KindCode::Liquid);
//! assert_eq!(a.to_string(), "KON-G-1");
//! assert_eq!(b.to_string(), "KON-L-2");
//! ```
//!
//! The counter is an `AtomicU64`, so two threads never observe the same
//! sequence value.

use std::sync::atomic::{AtomicU64, Ordering};

/// The prefix shared by every serial number.
pub const SERIAL_PREFIX: &str = "KON";

/// The single-letter code identifying the kind of container in a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum KindCode {
    /// Liquid containers, code `L`.
    Liquid,
    /// Gas containers, code `G`.
    Gas,
    /// Refrigerated containers, code `C`.
    Refrigerated,
}

impl KindCode {
    /// Returns the letter used for this kind inside a serial number.
    #[inline]
    pub const fn code(self) -> char {
        match self {
            KindCode::Liquid => 'L',
            KindCode::Gas => 'G',
            KindCode::Refrigerated => 'C',
        }
    }
}

impl std::fmt::Display for KindCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A container serial number, `KON-<kind>-<sequence>`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SerialNumber {
    kind: KindCode,
    sequence: u64,
}

impl SerialNumber {
    /// Creates a serial number from its parts.
    ///
    /// This does not allocate a sequence value. Use a `SerialGenerator` to stamp
    /// new containers.
    #[inline]
    pub const fn new(kind: KindCode, sequence: u64) -> Self {
        Self { kind, sequence }
    }

    #[inline]
    pub const fn kind(&self) -> KindCode {
        self.kind
    }

    /// Returns the numeric sequence suffix.
    #[inline]
    pub const fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Returns `true` if the rendered form of this serial equals `s`.
    pub fn matches(&self, s: &str) -> bool {
        self.to_string() == s
    }
}

impl std::fmt::Display for SerialNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", SERIAL_PREFIX, self.kind, self.sequence)
    }
}

/// Allocates serial numbers from a single sequence shared by all kinds.
///
/// The sequence starts at `1` and is incremented after each allocation; the
/// serial carries the value **before** the increment.
#[derive(Debug)]
pub struct SerialGenerator {
    next: AtomicU64,
}

impl SerialGenerator {
    /// Creates a generator whose first serial carries sequence `1`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
        }
    }

    /// Allocates the next serial for a container of the given kind.
    #[inline]
    pub fn next_serial(&self, kind: KindCode) -> SerialNumber {
        let sequence = self.next.fetch_add(1, Ordering::Relaxed);
        SerialNumber::new(kind, sequence)
    }
}

impl Default for SerialGenerator {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_SERIALS: SerialGenerator = SerialGenerator::new();

/// Returns the process-wide generator used by the default container constructors.
#[inline]
pub fn global() -> &'static SerialGenerator {
    &GLOBAL_SERIALS
}

/// Allocates the next serial from the process-wide generator.
#[inline]
pub fn next_serial(kind: KindCode) -> SerialNumber {
    GLOBAL_SERIALS.next_serial(kind)
}
