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

use super::{Dimensions, Hull};
use crate::{error::OverfillError, hazard::HazardNotifier};
use stowage_core::serial::{self, KindCode, SerialGenerator};

/// Fraction of the load a gas container still holds after unloading.
pub const GAS_RETAINED_FRACTION: f64 = 0.05;

/// A pressurised gas container, serial kind `G`.
///
/// Gas may be loaded up to the full max payload. Unloading never fully empties
/// the tank: 5% of the load stays behind.
#[derive(Debug, PartialEq)]
pub struct GasContainer {
    hull: Hull,
    pressure: f64,
}

impl GasContainer {
    /// Builds an empty gas container with a serial from the process-wide sequence.
    pub fn new(dimensions: Dimensions, pressure: f64) -> Self {
        Self::with_generator(dimensions, pressure, serial::global())
    }

    /// Builds an empty gas container with a serial from `generator`.
    pub fn with_generator(
        dimensions: Dimensions,
        pressure: f64,
        generator: &SerialGenerator,
    ) -> Self {
        Self {
            hull: Hull::new(KindCode::Gas, dimensions, generator),
            pressure,
        }
    }

    #[inline]
    pub fn hull(&self) -> &Hull {
        &self.hull
    }

    #[inline]
    pub fn pressure(&self) -> f64 {
        self.pressure
    }

    /// Sets the current load to `weight`.
    ///
    /// `is_hazardous` is accepted for parity with the other kinds and does not
    /// affect the limit. A refused request logs a hazard through `tracing`.
    ///
    /// # Errors
    ///
    /// Returns `OverfillError::Gas` if `weight` exceeds the max payload.
    pub fn load(&mut self, weight: f64, _is_hazardous: bool) -> Result<(), OverfillError> {
        let limit = self.hull.dimensions.max_payload;
        if weight > limit {
            self.notify_hazard(self.hull.serial);
            return Err(OverfillError::Gas {
                serial: self.hull.serial,
                weight,
                limit,
            });
        }

        self.hull.set_current_load(weight);
        tracing::debug!(serial = %self.hull.serial, weight, "loaded gas container");
        Ok(())
    }

    /// Releases the cargo, keeping `GAS_RETAINED_FRACTION` of it in the tank.
    pub fn unload(&mut self) {
        let retained = self.hull.current_load * GAS_RETAINED_FRACTION;
        self.hull.set_current_load(retained);
        tracing::debug!(serial = %self.hull.serial, retained, "unloaded gas container");
    }
}

impl HazardNotifier for GasContainer {
    fn hazard_message(&self) -> &'static str {
        "Hazardous situation in gas container"
    }
}

impl std::fmt::Display for GasContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[GasContainer] {} Load: {}, Pressure: {}",
            self.hull.serial, self.hull.current_load, self.pressure
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hazard::capture::capture_logs;

    fn gas(max_payload: f64) -> GasContainer {
        let generator = SerialGenerator::new();
        GasContainer::with_generator(
            Dimensions::new(250, 300, 1500.0, max_payload),
            10.0,
            &generator,
        )
    }

    #[test]
    fn test_load_within_payload() {
        let mut c = gas(8000.0);
        c.load(7000.0, false).unwrap();
        assert_eq!(c.hull().current_load(), 7000.0);
    }

    #[test]
    fn test_load_at_payload_succeeds() {
        let mut c = gas(8000.0);
        assert!(c.load(8000.0, false).is_ok());
    }

    #[test]
    fn test_hazard_flag_does_not_change_limit() {
        let mut hazardous = gas(8000.0);
        let mut regular = gas(8000.0);
        assert!(hazardous.load(7999.0, true).is_ok());
        assert!(regular.load(7999.0, false).is_ok());
        assert!(hazardous.load(8001.0, true).is_err());
        assert!(regular.load(8001.0, false).is_err());
    }

    #[test]
    fn test_overfill_leaves_load_unchanged() {
        let mut c = gas(8000.0);
        c.load(1000.0, false).unwrap();
        let err = c.load(9000.0, false).unwrap_err();
        assert_eq!(err.to_string(), "Overfilled gas container");
        assert!(matches!(err, OverfillError::Gas { limit, .. } if limit == 8000.0));
        assert_eq!(c.hull().current_load(), 1000.0);
    }

    #[test]
    fn test_overfill_notifies() {
        let mut c = gas(8000.0);
        let (result, logged) = capture_logs(|| c.load(9000.0, false));
        assert!(result.is_err());
        assert!(logged.contains("Hazardous situation in gas container KON-G-1"));
    }

    #[test]
    fn test_unload_retains_five_percent() {
        let mut c = gas(8000.0);
        c.load(7000.0, false).unwrap();
        c.unload();
        assert!((c.hull().current_load() - 350.0).abs() < 1e-9);
        assert!(c.hull().current_load() > 0.0);
    }

    #[test]
    fn test_repeated_unload_keeps_shrinking() {
        let mut c = gas(8000.0);
        c.load(8000.0, false).unwrap();
        c.unload();
        c.unload();
        assert!((c.hull().current_load() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_display() {
        let mut c = gas(8000.0);
        c.load(7000.0, false).unwrap();
        assert_eq!(
            c.to_string(),
            "[GasContainer] KON-G-1 Load: 7000, Pressure: 10"
        );
    }
}
