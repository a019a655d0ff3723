// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Named units of measure within a dimension
//!
//! A unit is a named scale factor relative to the coherent SI base unit of
//! its dimension: the kilometer is 1000 meters, so its scale is 1000.0 and
//! its dimension is length. Units are immutable and registered once in the
//! SI registry at startup; quantities constructed through a unit are
//! normalized into base-unit terms immediately.

use crate::units::dimension::Dimension;
use crate::units::quantity::Quantity;
use std::fmt;

/// A named scale factor within a physical dimension
///
/// # Examples
///
/// ```
/// use physics_laws::units::si::{KILOMETER, METER};
///
/// let q = KILOMETER.quantity(1.5);
/// assert_eq!(q.magnitude(), 1500.0); // normalized to meters
/// assert_eq!(q.dimension(), METER.dimension());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Unit {
    name: &'static str,
    symbol: &'static str,
    dimension: Dimension,
    scale: f64,
}

impl Unit {
    /// Create a unit with the given name, printable symbol, dimension, and
    /// scale factor into coherent base-unit terms
    ///
    /// The scale must be finite and non-zero; this is checked at
    /// registration time rather than here so the constructor stays `const`.
    pub const fn new(
        name: &'static str,
        symbol: &'static str,
        dimension: Dimension,
        scale: f64,
    ) -> Self {
        Unit {
            name,
            symbol,
            dimension,
            scale,
        }
    }

    /// Get the unit name (e.g. "kilometer")
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the printable symbol (e.g. "km")
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }

    /// Get the dimension this unit measures
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Get the conversion factor from this unit into base-unit terms
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Check that the scale factor is finite and non-zero
    pub fn is_valid(&self) -> bool {
        self.scale.is_finite() && self.scale != 0.0
    }

    /// Construct a quantity of `value` in this unit, normalized to base units
    pub fn quantity(&self, value: f64) -> Quantity {
        Quantity::from_base(value * self.scale, self.dimension)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::dimension::LENGTH;

    #[test]
    fn test_unit_accessors() {
        let km = Unit::new("kilometer", "km", LENGTH, 1000.0);
        assert_eq!(km.name(), "kilometer");
        assert_eq!(km.symbol(), "km");
        assert_eq!(km.dimension(), LENGTH);
        assert_eq!(km.scale(), 1000.0);
        assert!(km.is_valid());
    }

    #[test]
    fn test_quantity_normalizes_into_base_units() {
        let km = Unit::new("kilometer", "km", LENGTH, 1000.0);
        let q = km.quantity(2.5);
        assert_eq!(q.magnitude(), 2500.0);
        assert_eq!(q.dimension(), LENGTH);
    }

    #[test]
    fn test_invalid_scale_detected() {
        let broken = Unit::new("broken", "?", LENGTH, 0.0);
        assert!(!broken.is_valid());

        let nan = Unit::new("nan", "?", LENGTH, f64::NAN);
        assert!(!nan.is_valid());
    }

    #[test]
    fn test_display_uses_symbol() {
        let km = Unit::new("kilometer", "km", LENGTH, 1000.0);
        assert_eq!(km.to_string(), "km");
    }
}
