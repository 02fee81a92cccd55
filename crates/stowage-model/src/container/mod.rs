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

//! Container kinds.
//!
//! The set of kinds is closed: `LiquidContainer`, `GasContainer` and
//! `RefrigeratedContainer`. Each kind is its own type that owns its load and
//! unload rules, and `Container` is the tagged union a vessel stores. Every
//! operation on `Container` is an exhaustive match, so adding a kind is a
//! compile error everywhere it has to be handled.
//!
//! All kinds share a `Hull`: the serial number, the `Dimensions` fixed at
//! construction, and the current load. The current load is private to this
//! module tree and is only ever written by a kind's own `load`/`unload`.
//!
//! Weights are in kilograms throughout.
//!
//! Containers are deliberately not `Clone`: a copy would carry the same serial
//! number, and serials are unique.

mod gas;
mod liquid;
mod refrigerated;

pub use gas::{GAS_RETAINED_FRACTION, GasContainer};
pub use liquid::{HAZARDOUS_LIQUID_FILL_RATIO, LiquidContainer, REGULAR_LIQUID_FILL_RATIO};
pub use refrigerated::RefrigeratedContainer;

use crate::{error::OverfillError, hazard::HazardNotifier};
use serde::{Deserialize, Serialize};
use stowage_core::serial::{KindCode, SerialGenerator, SerialNumber};

/// The physical attributes fixed when a container is built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    height: u32,
    depth: u32,
    tare_weight: f64,
    max_payload: f64,
}

impl Dimensions {
    /// Creates dimensions from a height, a depth and two weights in kilograms.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stowage_model::Dimensions;
    /// let d = Dimensions::new(250, 300, 2000.0, 10000.0);
    /// assert_eq!(d.max_payload(), 10000.0);
    /// ```
    #[inline]
    pub const fn new(height: u32, depth: u32, tare_weight: f64, max_payload: f64) -> Self {
        Self {
            height,
            depth,
            tare_weight,
            max_payload,
        }
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// The empty weight of the container.
    #[inline]
    pub fn tare_weight(&self) -> f64 {
        self.tare_weight
    }

    /// The largest cargo weight the container is rated for.
    #[inline]
    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }
}

/// State shared by every container kind.
#[derive(Debug, PartialEq)]
pub struct Hull {
    serial: SerialNumber,
    dimensions: Dimensions,
    current_load: f64,
}

impl Hull {
    fn new(kind: KindCode, dimensions: Dimensions, generator: &SerialGenerator) -> Self {
        Self {
            serial: generator.next_serial(kind),
            dimensions,
            current_load: 0.0,
        }
    }

    #[inline]
    pub fn serial_number(&self) -> SerialNumber {
        self.serial
    }

    #[inline]
    pub fn dimensions(&self) -> &Dimensions {
        &self.dimensions
    }

    #[inline]
    pub fn current_load(&self) -> f64 {
        self.current_load
    }

    /// Tare weight plus current load.
    #[inline]
    pub fn gross_weight(&self) -> f64 {
        self.dimensions.tare_weight + self.current_load
    }

    #[inline]
    fn set_current_load(&mut self, weight: f64) {
        self.current_load = weight;
    }
}

/// Any container, dispatched by kind.
#[derive(Debug, PartialEq)]
pub enum Container {
    Liquid(LiquidContainer),
    Gas(GasContainer),
    Refrigerated(RefrigeratedContainer),
}

impl Container {
    #[inline]
    pub fn kind(&self) -> KindCode {
        match self {
            Container::Liquid(_) => KindCode::Liquid,
            Container::Gas(_) => KindCode::Gas,
            Container::Refrigerated(_) => KindCode::Refrigerated,
        }
    }

    #[inline]
    pub fn hull(&self) -> &Hull {
        match self {
            Container::Liquid(c) => c.hull(),
            Container::Gas(c) => c.hull(),
            Container::Refrigerated(c) => c.hull(),
        }
    }

    #[inline]
    pub fn serial_number(&self) -> SerialNumber {
        self.hull().serial_number()
    }

    #[inline]
    pub fn dimensions(&self) -> &Dimensions {
        self.hull().dimensions()
    }

    #[inline]
    pub fn tare_weight(&self) -> f64 {
        self.dimensions().tare_weight()
    }

    #[inline]
    pub fn max_payload(&self) -> f64 {
        self.dimensions().max_payload()
    }

    #[inline]
    pub fn current_load(&self) -> f64 {
        self.hull().current_load()
    }

    /// Tare weight plus current load, the weight a vessel accounts for.
    #[inline]
    pub fn gross_weight(&self) -> f64 {
        self.hull().gross_weight()
    }

    /// Loads `weight` kilograms of cargo, replacing the current load.
    ///
    /// Hazards raised by the attempt are logged through `tracing`.
    ///
    /// # Errors
    ///
    /// Returns an `OverfillError` if the container's kind refuses the load. The
    /// container is left unchanged in that case, apart from a liquid
    /// container's hazard flag, which always reflects the last request.
    pub fn load(&mut self, weight: f64, is_hazardous: bool) -> Result<(), OverfillError> {
        match self {
            Container::Liquid(c) => c.load(weight, is_hazardous),
            Container::Gas(c) => c.load(weight, is_hazardous),
            Container::Refrigerated(c) => c.load(weight, is_hazardous),
        }
    }

    /// Unloads the container according to its kind's rules.
    pub fn unload(&mut self) {
        match self {
            Container::Liquid(c) => c.unload(),
            Container::Gas(c) => c.unload(),
            Container::Refrigerated(c) => c.unload(),
        }
    }

    /// Returns the hazard capability, if this kind has one.
    pub fn as_hazard_notifier(&self) -> Option<&dyn HazardNotifier> {
        match self {
            Container::Liquid(c) => Some(c as &dyn HazardNotifier),
            Container::Gas(c) => Some(c as &dyn HazardNotifier),
            Container::Refrigerated(_) => None,
        }
    }
}

impl From<LiquidContainer> for Container {
    fn from(c: LiquidContainer) -> Self {
        Container::Liquid(c)
    }
}

impl From<GasContainer> for Container {
    fn from(c: GasContainer) -> Self {
        Container::Gas(c)
    }
}

impl From<RefrigeratedContainer> for Container {
    fn from(c: RefrigeratedContainer) -> Self {
        Container::Refrigerated(c)
    }
}

impl std::fmt::Display for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Container::Liquid(c) => std::fmt::Display::fmt(c, f),
            Container::Gas(c) => std::fmt::Display::fmt(c, f),
            Container::Refrigerated(c) => std::fmt::Display::fmt(c, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hazard::capture::capture_logs;

    fn dims(tare: f64, payload: f64) -> Dimensions {
        Dimensions::new(250, 300, tare, payload)
    }

    fn fleet(generator: &SerialGenerator) -> Vec<Container> {
        vec![
            LiquidContainer::with_generator(dims(2000.0, 10000.0), generator).into(),
            GasContainer::with_generator(dims(1500.0, 8000.0), 10.0, generator).into(),
            RefrigeratedContainer::with_generator(
                dims(2200.0, 9000.0),
                "Bananas",
                5.0,
                6.0,
                generator,
            )
            .into(),
        ]
    }

    #[test]
    fn test_dimensions_deserialize() {
        let d: Dimensions = serde_json::from_str(
            r#"{"height": 250, "depth": 300, "tare_weight": 2000.0, "max_payload": 10000.0}"#,
        )
        .unwrap();
        assert_eq!(d, dims(2000.0, 10000.0));
        assert_eq!(d.height(), 250);
        assert_eq!(d.depth(), 300);
    }

    #[test]
    fn test_kinds_and_serials() {
        let generator = SerialGenerator::new();
        let containers = fleet(&generator);
        let kinds: Vec<KindCode> = containers.iter().map(Container::kind).collect();
        assert_eq!(
            kinds,
            vec![KindCode::Liquid, KindCode::Gas, KindCode::Refrigerated]
        );
        let serials: Vec<String> = containers
            .iter()
            .map(|c| c.serial_number().to_string())
            .collect();
        assert_eq!(serials, vec!["KON-L-1", "KON-G-2", "KON-C-3"]);
    }

    #[test]
    fn test_default_constructors_share_one_sequence() {
        let d = dims(100.0, 1000.0);
        let serials = [
            Container::from(GasContainer::new(d, 2.0)).serial_number(),
            Container::from(LiquidContainer::new(d)).serial_number(),
            Container::from(RefrigeratedContainer::new(d, "Fish", -18.0, -20.0)).serial_number(),
            Container::from(LiquidContainer::new(d)).serial_number(),
        ];
        // The process-wide sequence is shared with concurrently running tests,
        // so only strict growth is guaranteed here.
        assert!(serials.windows(2).all(|w| w[0].sequence() < w[1].sequence()));
        assert_eq!(serials[2].kind(), KindCode::Refrigerated);
    }

    #[test]
    fn test_new_containers_start_empty() {
        let generator = SerialGenerator::new();
        for c in fleet(&generator) {
            assert_eq!(c.current_load(), 0.0);
            assert_eq!(c.gross_weight(), c.tare_weight());
        }
    }

    #[test]
    fn test_dispatch_load_and_unload() {
        let generator = SerialGenerator::new();
        let mut containers = fleet(&generator);

        containers[0].load(4000.0, true).unwrap();
        containers[1].load(7000.0, false).unwrap();
        containers[2].load(8000.0, false).unwrap();

        let gross: Vec<f64> = containers.iter().map(Container::gross_weight).collect();
        assert_eq!(gross, vec![6000.0, 8500.0, 10200.0]);

        for c in containers.iter_mut() {
            c.unload();
        }
        assert_eq!(containers[0].current_load(), 0.0);
        assert!((containers[1].current_load() - 350.0).abs() < 1e-9);
        assert_eq!(containers[2].current_load(), 0.0);
    }

    #[test]
    fn test_hazard_capability_only_on_liquid_and_gas() {
        let generator = SerialGenerator::new();
        let containers = fleet(&generator);
        assert!(containers[0].as_hazard_notifier().is_some());
        assert!(containers[1].as_hazard_notifier().is_some());
        assert!(containers[2].as_hazard_notifier().is_none());
    }

    #[test]
    fn test_overfill_logs_hazard_for_liquid_and_gas_only() {
        let generator = SerialGenerator::new();
        let mut containers = fleet(&generator);

        let (failures, logged) = capture_logs(|| {
            containers
                .iter_mut()
                .map(|c| c.load(1_000_000.0, false))
                .filter(|r| r.is_err())
                .count()
        });

        assert_eq!(failures, 3);
        assert!(logged.contains("Hazardous situation in container KON-L-1"));
        assert!(logged.contains("Hazardous situation in gas container KON-G-2"));
        assert!(!logged.contains("KON-C-3"));
    }

    #[test]
    fn test_display_delegates_to_kind() {
        let generator = SerialGenerator::new();
        let containers = fleet(&generator);
        assert_eq!(containers[0].to_string(), "[LiquidContainer] KON-L-1 Load: 0");
        assert_eq!(
            containers[1].to_string(),
            "[GasContainer] KON-G-2 Load: 0, Pressure: 10"
        );
        assert_eq!(
            containers[2].to_string(),
            "[RefrigeratedContainer] KON-C-3 Load: 0 Product: Bananas"
        );
    }
}
