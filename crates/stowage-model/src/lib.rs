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

//! # Stowage Model
//!
//! **Container kinds, load validation and vessel capacity enforcement.**
//!
//! This crate encodes the business rules of a container vessel: which loads a
//! container of a given kind will accept, which containers a vessel will admit,
//! and what happens when either is asked for too much.
//!
//! ## Architecture
//!
//! * **`container`**: The closed set of container kinds (`LiquidContainer`,
//!   `GasContainer`, `RefrigeratedContainer`) and the `Container` enum that
//!   dispatches over them. Each kind owns its own load and unload rules.
//! * **`hazard`**: The `HazardNotifier` capability, implemented only by the kinds
//!   that can raise a hazard. Hazards are emitted as `tracing` warnings.
//! * **`error`**: `OverfillError`, the single error kind for rejected loads.
//! * **`vessel`**: The `Vessel`, which owns its containers and enforces container
//!   count and total weight limits on admission.
//!
//! ## Example
//!
//! ```rust
//! use stowage_model::{Dimensions, GasContainer, LiquidContainer, Vessel, VesselConfig};
//!
//! let mut liquid = LiquidContainer::new(Dimensions::new(250, 300, 2000.0, 10000.0));
//! liquid.load(4000.0, true).unwrap();
//!
//! let mut gas = GasContainer::new(Dimensions::new(250, 300, 1500.0, 8000.0), 10.0);
//! assert!(gas.load(9000.0, false).is_err());
//!
//! let mut vessel = Vessel::new(VesselConfig::new("Poseidon", 20.0, 100, 40000.0));
//! assert!(vessel.load_container(liquid).is_loaded());
//! assert!(vessel.load_container(gas).is_loaded());
//! assert_eq!(vessel.total_weight_kg(), 7500.0);
//! ```

pub mod container;
pub mod error;
pub mod hazard;
pub mod vessel;

pub use container::{Container, Dimensions, GasContainer, LiquidContainer, RefrigeratedContainer};
pub use error::OverfillError;
pub use hazard::HazardNotifier;
pub use stowage_core::serial::{KindCode, SerialGenerator, SerialNumber};
pub use vessel::{LoadOutcome, RejectionReason, Vessel, VesselConfig, VesselSummary};
