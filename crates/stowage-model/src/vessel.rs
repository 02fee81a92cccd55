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

//! The container vessel.
//!
//! A `Vessel` owns the containers it carries, in the order they were loaded,
//! and enforces two limits on every admission:
//!
//! * the number of containers never exceeds `max_container_count`, and
//! * the gross weight (tare plus current load) of all containers never exceeds
//!   `max_total_weight_tons`, compared in kilograms.
//!
//! Admission is a single `&mut self` call that checks and appends, so no other
//! admission can interleave between the two. A refused container is handed
//! back inside the `LoadOutcome`; refusal is an ordinary outcome, not an error.

use crate::container::Container;
use serde::{Deserialize, Serialize};
use stowage_core::units::tonnes_to_kilograms;

/// The immutable configuration of a vessel.
///
/// Derives `Serialize`/`Deserialize` so hosts can read it from their own
/// configuration files. Any values are accepted: a vessel with a count of zero
/// simply refuses every container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VesselConfig {
    pub name: String,
    /// Maximum speed in knots.
    pub max_speed: f64,
    pub max_container_count: usize,
    /// Maximum gross weight of all containers, in metric tonnes.
    pub max_total_weight_tons: f64,
}

impl VesselConfig {
    pub fn new(
        name: impl Into<String>,
        max_speed: f64,
        max_container_count: usize,
        max_total_weight_tons: f64,
    ) -> Self {
        Self {
            name: name.into(),
            max_speed,
            max_container_count,
            max_total_weight_tons,
        }
    }

    /// The weight limit in kilograms.
    #[inline]
    pub fn weight_limit_kg(&self) -> f64 {
        tonnes_to_kilograms(self.max_total_weight_tons)
    }
}

/// Why a vessel refused a container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RejectionReason {
    /// The vessel already carries `max_container_count` containers.
    ContainerLimitReached { limit: usize },
    /// Admitting the container would push the gross weight past the limit.
    WeightLimitExceeded { attempted_kg: f64, limit_kg: f64 },
}

impl std::fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectionReason::ContainerLimitReached { limit } => {
                write!(f, "container limit of {} reached", limit)
            }
            RejectionReason::WeightLimitExceeded {
                attempted_kg,
                limit_kg,
            } => write!(
                f,
                "total weight of {} kg would exceed the limit of {} kg",
                attempted_kg, limit_kg
            ),
        }
    }
}

/// The result of offering a container to a vessel.
#[must_use = "a rejected container is returned inside the outcome and is dropped if ignored"]
#[derive(Debug)]
pub enum LoadOutcome {
    /// The container is now owned by the vessel.
    Loaded,
    /// The vessel is unchanged and the container is handed back.
    Rejected {
        container: Container,
        reason: RejectionReason,
    },
}

impl LoadOutcome {
    #[inline]
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded)
    }

    #[inline]
    pub fn is_rejected(&self) -> bool {
        !self.is_loaded()
    }

    #[inline]
    pub fn reason(&self) -> Option<RejectionReason> {
        match self {
            LoadOutcome::Loaded => None,
            LoadOutcome::Rejected { reason, .. } => Some(*reason),
        }
    }

    /// Takes back a refused container.
    pub fn into_rejected(self) -> Option<Container> {
        match self {
            LoadOutcome::Loaded => None,
            LoadOutcome::Rejected { container, .. } => Some(container),
        }
    }
}

impl From<LoadOutcome> for bool {
    fn from(outcome: LoadOutcome) -> Self {
        outcome.is_loaded()
    }
}

/// A container vessel with count and weight limits.
#[derive(Debug)]
pub struct Vessel {
    config: VesselConfig,
    containers: Vec<Container>,
}

impl Vessel {
    /// Creates an empty vessel.
    pub fn new(config: VesselConfig) -> Self {
        Self {
            config,
            containers: Vec::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &VesselConfig {
        &self.config
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.config.name
    }

    #[inline]
    pub fn max_speed(&self) -> f64 {
        self.config.max_speed
    }

    #[inline]
    pub fn max_container_count(&self) -> usize {
        self.config.max_container_count
    }

    #[inline]
    pub fn max_total_weight_tons(&self) -> f64 {
        self.config.max_total_weight_tons
    }

    #[inline]
    pub fn weight_limit_kg(&self) -> f64 {
        self.config.weight_limit_kg()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// The containers on board, in load order.
    #[inline]
    pub fn containers(&self) -> &[Container] {
        &self.containers
    }

    /// The gross weight of everything on board, in kilograms.
    pub fn total_weight_kg(&self) -> f64 {
        self.containers
            .iter()
            .fold(0.0, |total, c| total + c.gross_weight())
    }

    /// Runs the admission check for `container` without taking it.
    ///
    /// # Errors
    ///
    /// Returns the reason `load_container` would refuse the container.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn can_load(&self, container: &Container) -> Result<(), RejectionReason> {
        if self.containers.len() >= self.config.max_container_count {
            return Err(RejectionReason::ContainerLimitReached {
                limit: self.config.max_container_count,
            });
        }

        let limit_kg = self.weight_limit_kg();
        let attempted_kg =
            self.total_weight_kg() + container.tare_weight() + container.current_load();
        // NaN fails `<=`, so a NaN total is refused.
        if !(attempted_kg <= limit_kg) {
            return Err(RejectionReason::WeightLimitExceeded {
                attempted_kg,
                limit_kg,
            });
        }

        Ok(())
    }

    /// Offers a container to the vessel.
    ///
    /// The container is admitted and appended if the vessel has a free slot and
    /// its gross weight fits under the weight limit. Otherwise the vessel is left
    /// untouched and the container comes back in `LoadOutcome::Rejected`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use stowage_model::{Dimensions, LiquidContainer, Vessel, VesselConfig};
    /// let mut vessel = Vessel::new(VesselConfig::new("Tug", 12.0, 1, 10.0));
    /// let a = LiquidContainer::new(Dimensions::new(1, 1, 2000.0, 1000.0));
    /// let b = LiquidContainer::new(Dimensions::new(1, 1, 2000.0, 1000.0));
    ///
    /// assert!(vessel.load_container(a).is_loaded());
    /// let refused = vessel.load_container(b);
    /// assert!(refused.is_rejected());
    /// assert!(refused.into_rejected().is_some());
    /// assert_eq!(vessel.len(), 1);
    /// ```
    pub fn load_container(&mut self, container: impl Into<Container>) -> LoadOutcome {
        let container = container.into();
        let serial = container.serial_number();

        if let Err(reason) = self.can_load(&container) {
            tracing::info!(
                vessel = %self.config.name,
                serial = %serial,
                %reason,
                "container rejected"
            );
            return LoadOutcome::Rejected { container, reason };
        }

        self.containers.push(container);
        tracing::debug!(
            vessel = %self.config.name,
            serial = %serial,
            total_weight_kg = self.total_weight_kg(),
            "container loaded"
        );
        LoadOutcome::Loaded
    }

    /// Removes every container whose serial renders as `serial`.
    ///
    /// Returns `true` if at least one container was removed.
    pub fn remove_container(&mut self, serial: &str) -> bool {
        let before = self.containers.len();
        self.containers.retain(|c| !c.serial_number().matches(serial));
        let removed = before - self.containers.len();

        if removed > 0 {
            tracing::debug!(
                vessel = %self.config.name,
                serial,
                removed,
                "container removed"
            );
        }
        removed > 0
    }

    /// The vessel's configuration and a description of each container, in load order.
    pub fn summary(&self) -> VesselSummary {
        VesselSummary {
            name: self.config.name.clone(),
            max_speed: self.config.max_speed,
            max_container_count: self.config.max_container_count,
            max_total_weight_tons: self.config.max_total_weight_tons,
            total_weight_kg: self.total_weight_kg(),
            containers: self.containers.iter().map(ToString::to_string).collect(),
        }
    }
}

/// A snapshot of a vessel's configuration and cargo.
#[derive(Debug, Clone, PartialEq)]
pub struct VesselSummary {
    pub name: String,
    pub max_speed: f64,
    pub max_container_count: usize,
    pub max_total_weight_tons: f64,
    pub total_weight_kg: f64,
    /// One description per container, in load order.
    pub containers: Vec<String>,
}

impl std::fmt::Display for VesselSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Ship: {} Speed: {}kn Max weight: {}t",
            self.name, self.max_speed, self.max_total_weight_tons
        )?;
        for line in &self.containers {
            writeln!(f)?;
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}
