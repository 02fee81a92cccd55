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
use crate::error::OverfillError;
use stowage_core::serial::{self, KindCode, SerialGenerator};

/// A temperature-controlled container, serial kind `C`.
///
/// A refrigerated container only accepts cargo while it is at least as warm
/// as its product requires. It has no hazard capability: refusals are plain
/// errors.
#[derive(Debug, PartialEq)]
pub struct RefrigeratedContainer {
    hull: Hull,
    product_type: String,
    required_temp: f64,
    container_temp: f64,
}

impl RefrigeratedContainer {
    /// Builds an empty refrigerated container with a serial from the process-wide sequence.
    pub fn new(
        dimensions: Dimensions,
        product_type: impl Into<String>,
        required_temp: f64,
        container_temp: f64,
    ) -> Self {
        Self::with_generator(
            dimensions,
            product_type,
            required_temp,
            container_temp,
            serial::global(),
        )
    }

    /// Builds an empty refrigerated container with a serial from `generator`.
    pub fn with_generator(
        dimensions: Dimensions,
        product_type: impl Into<String>,
        required_temp: f64,
        container_temp: f64,
        generator: &SerialGenerator,
    ) -> Self {
        Self {
            hull: Hull::new(KindCode::Refrigerated, dimensions, generator),
            product_type: product_type.into(),
            required_temp,
            container_temp,
        }
    }

    #[inline]
    pub fn hull(&self) -> &Hull {
        &self.hull
    }

    #[inline]
    pub fn product_type(&self) -> &str {
        &self.product_type
    }

    #[inline]
    pub fn required_temp(&self) -> f64 {
        self.required_temp
    }

    #[inline]
    pub fn container_temp(&self) -> f64 {
        self.container_temp
    }

    /// Returns `true` if the container is warm enough for its product.
    #[inline]
    pub fn temperature_ok(&self) -> bool {
        self.container_temp >= self.required_temp
    }

    /// Sets the current load to `weight`. The hazard flag is ignored.
    ///
    /// # Errors
    ///
    /// Returns `OverfillError::TemperatureTooLow` if the container is colder than
    /// required, whatever the weight. Otherwise returns
    /// `OverfillError::Refrigerated` if `weight` exceeds the max payload.
    pub fn load(&mut self, weight: f64, _is_hazardous: bool) -> Result<(), OverfillError> {
        if self.container_temp < self.required_temp {
            return Err(OverfillError::TemperatureTooLow {
                serial: self.hull.serial,
                required_temp: self.required_temp,
                container_temp: self.container_temp,
            });
        }

        let limit = self.hull.dimensions.max_payload;
        if weight > limit {
            return Err(OverfillError::Refrigerated {
                serial: self.hull.serial,
                weight,
                limit,
            });
        }

        self.hull.set_current_load(weight);
        tracing::debug!(
            serial = %self.hull.serial,
            weight,
            product = %self.product_type,
            "loaded refrigerated container"
        );
        Ok(())
    }

    /// Empties the container.
    pub fn unload(&mut self) {
        self.hull.set_current_load(0.0);
        tracing::debug!(serial = %self.hull.serial, "unloaded refrigerated container");
    }
}

impl std::fmt::Display for RefrigeratedContainer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[RefrigeratedContainer] {} Load: {} Product: {}",
            self.hull.serial, self.hull.current_load, self.product_type
        )
    }
}
