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

/// Fraction of the max payload a liquid container may hold when the cargo is hazardous.
pub const HAZARDOUS_LIQUID_FILL_RATIO: f64 = 0.5;

/// Fraction of the max payload a liquid container may hold otherwise.
pub const REGULAR_LIQUID_FILL_RATIO: f64 = 0.9;

/// A tank container for liquids, serial kind `L`.
///
/// Liquids are never filled to the brim: hazardous cargo may use half of the
/// max payload, anything else 90%. Overfilling raises a hazard before the load
/// is refused.
#[derive(Debug, PartialEq)]
pub struct LiquidContainer {
    hull: Hull,
    hazardous: bool,
}

impl LiquidContainer {
    /// Builds an empty liquid container with a serial from the process-wide sequence.
    pub fn new(dimensions: Dimensions) -> Self {
        Self::with_generator(dimensions, serial::global())
    }

    /// Builds an empty liquid container with a serial from `generator`.
    pub fn with_generator(dimensions: Dimensions, generator: &SerialGenerator) -> Self {
        Self {
            hull: Hull::new(KindCode::Liquid, dimensions, generator),
            hazardous: false,
        }
    }

    #[inline]
    pub fn hull(&self) -> &Hull {
        &self.hull
    }

    /// Whether the most recent load request declared hazardous cargo.
    ///
    /// This is recorded even when the request was refused.
    #[inline]
    pub fn is_hazardous(&self) -> bool {
        self.hazardous
    }

    /// The largest load accepted for cargo of the given hazard class.
    #[inline]
    pub fn limit_for(&self, is_hazardous: bool) -> f64 {
        let ratio = if is_hazardous {
            HAZARDOUS_LIQUID_FILL_RATIO
        } else {
            REGULAR_LIQUID_FILL_RATIO
        };
        ratio * self.hull.dimensions.max_payload
    }

    /// Sets the current load to `weight`.
    ///
    /// A refused request logs a hazard through `tracing` before returning.
    ///
    /// # Errors
    ///
    /// Returns `OverfillError::Liquid` if `weight` exceeds `limit_for(is_hazardous)`.
    pub fn load(&mut self, weight: f64, is_hazardous: bool) -> Result<(), OverfillError> {
        self.hazardous = is_hazardous;
        let limit = self.limit_for(is_hazardous);
        if weight > limit {
            self.notify_hazard(self.hull.serial);
            return Err(OverfillError::Liquid {
                serial: self.hull.serial,
                weight,
                limit,
                hazardous: is_hazardous,
            });
        }

        self.hull.set_current_load(weight);
        tracing::debug!(
            serial = %self.hull.serial,
            weight,
            hazardous = is_hazardous,
            "loaded liquid container"
        );
        Ok(())
    }

    /// Empties the container.
    pub fn unload(&mut self) {
        self.hull.set_current_load(0.0);
        tracing::debug!(serial = %self.hull.serial, "unloaded liquid container");
    }
}

impl HazardNotifier for LiquidContainer {
    fn hazard_message(&self) -> &'static str {
        "Hazardous situation in container"
    }
}

impl std::fmt::Display for LiquidContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[LiquidContainer] {} Load: {}",
            self.hull.serial, self.hull.current_load
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hazard::capture::capture_logs;

    fn liquid(max_payload: f64) -> LiquidContainer {
        let generator = SerialGenerator::new();
        LiquidContainer::with_generator(
            Dimensions::new(250, 300, 2000.0, max_payload),
            &generator,
        )
    }

    #[test]
    fn test_limits() {
        let c = liquid(10000.0);
        assert_eq!(c.limit_for(true), 5000.0);
        assert_eq!(c.limit_for(false), 9000.0);
    }

    #[test]
    fn test_hazardous_load_within_limit() {
        let mut c = liquid(10000.0);
        c.load(4000.0, true).unwrap();
        assert_eq!(c.hull().current_load(), 4000.0);
        assert!(c.is_hazardous());
    }

    #[test]
    fn test_hazardous_load_at_limit_succeeds() {
        let mut c = liquid(10000.0);
        assert!(c.load(5000.0, true).is_ok());
        assert_eq!(c.hull().current_load(), 5000.0);
    }

    #[test]
    fn test_hazardous_overfill_leaves_load_unchanged() {
        let mut c = liquid(10000.0);
        let err = c.load(9500.0, true).unwrap_err();
        assert_eq!(err.to_string(), "Overfilled hazardous liquid container");
        assert_eq!(
            err,
            OverfillError::Liquid {
                serial: c.hull().serial_number(),
                weight: 9500.0,
                limit: 5000.0,
                hazardous: true,
            }
        );
        assert_eq!(c.hull().current_load(), 0.0);
    }

    #[test]
    fn test_regular_limit() {
        let mut c = liquid(10000.0);
        assert!(c.load(9000.0, false).is_ok());
        assert_eq!(c.hull().current_load(), 9000.0);

        let err = c.load(9000.5, false).unwrap_err();
        assert!(matches!(err, OverfillError::Liquid { limit, .. } if limit == 9000.0));
        assert_eq!(c.hull().current_load(), 9000.0);
    }

    #[test]
    fn test_same_weight_depends_on_hazard_flag() {
        let mut c = liquid(10000.0);
        assert!(c.load(7000.0, false).is_ok());
        assert!(c.load(7000.0, true).is_err());
        assert_eq!(c.hull().current_load(), 7000.0);
    }

    #[test]
    fn test_hazard_flag_recorded_on_failure() {
        let mut c = liquid(10000.0);
        c.load(100.0, false).unwrap();
        assert!(!c.is_hazardous());
        assert!(c.load(6000.0, true).is_err());
        assert!(c.is_hazardous());
    }

    #[test]
    fn test_load_replaces_rather_than_adds() {
        let mut c = liquid(10000.0);
        c.load(3000.0, false).unwrap();
        c.load(2000.0, false).unwrap();
        assert_eq!(c.hull().current_load(), 2000.0);
    }

    #[test]
    fn test_overfill_notifies_before_failing() {
        let mut c = liquid(10000.0);
        let (result, logged) = capture_logs(|| c.load(9500.0, true));
        assert!(result.is_err());
        assert_eq!(
            logged
                .matches("Hazardous situation in container KON-L-1")
                .count(),
            1
        );
    }

    #[test]
    fn test_successful_load_does_not_notify() {
        let mut c = liquid(10000.0);
        let (result, logged) = capture_logs(|| c.load(4000.0, true));
        assert!(result.is_ok());
        assert!(!logged.contains("Hazardous situation"));
        assert!(logged.contains("loaded liquid container"));
    }

    #[test]
    fn test_unload_empties() {
        let mut c = liquid(10000.0);
        c.load(4000.0, true).unwrap();
        c.unload();
        assert_eq!(c.hull().current_load(), 0.0);
    }

    #[test]
    fn test_display() {
        let mut c = liquid(10000.0);
        c.load(4000.0, true).unwrap();
        assert_eq!(c.to_string(), "[LiquidContainer] KON-L-1 Load: 4000");
    }
}
