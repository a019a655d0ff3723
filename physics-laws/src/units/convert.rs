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
//! Conversion of quantities into plain numbers in a requested unit
//!
//! The converter is the only place a dimensioned result becomes a bare
//! number, and the only place rounding happens, and rounding only happens
//! when the caller asks for a fixed number of significant digits. A target
//! unit whose dimension is not equivalent to the quantity's is a hard
//! [`PhysicsError::DimensionMismatch`], never a silent rescale.

use crate::errors::PhysicsError;
use crate::units::quantity::Quantity;
use crate::units::unit::Unit;

/// Convert a quantity into a plain numeric value in the target unit
///
/// Fails if the target unit's dimension is not equivalent to the
/// quantity's. No rounding is applied.
///
/// # Examples
///
/// ```
/// use physics_laws::units::convert_to;
/// use physics_laws::units::si::{KILOMETER, METER};
///
/// let q = METER.quantity(2500.0);
/// assert_eq!(convert_to(q, KILOMETER).unwrap(), 2.5);
/// ```
pub fn convert_to(quantity: Quantity, unit: Unit) -> Result<f64, PhysicsError> {
    if !quantity.dimension().equivalent(unit.dimension()) {
        return Err(PhysicsError::DimensionMismatch {
            role: format!("target unit '{}'", unit.name()),
            expected: quantity.dimension(),
            actual: unit.dimension(),
        });
    }
    Ok(quantity.magnitude() / unit.scale())
}

/// Convert a quantity and round the result to `digits` significant digits
///
/// Only the requested rounding is applied; `digits` must be at least 1.
///
/// # Panics
///
/// Panics if `digits` is zero.
pub fn convert_to_significant(
    quantity: Quantity,
    unit: Unit,
    digits: u32,
) -> Result<f64, PhysicsError> {
    assert!(digits > 0, "Significant digits must be at least 1");
    let value = convert_to(quantity, unit)?;
    Ok(round_significant(value, digits))
}

/// Round a value to the given number of significant digits
fn round_significant(value: f64, digits: u32) -> f64 {
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    let magnitude = value.abs().log10().floor();
    let factor = 10f64.powf(digits as f64 - 1.0 - magnitude);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::units::si::{JOULE, KILOGRAM, KILOMETER, METER, SECOND, WATT};

    #[test]
    fn test_identity_conversion() {
        let q = METER.quantity(42.0);
        assert_eq!(convert_to(q, METER).unwrap(), 42.0);
    }

    #[test]
    fn test_scaled_conversion() {
        let q = KILOMETER.quantity(1.5);
        assert_eq!(convert_to(q, METER).unwrap(), 1500.0);
        assert_eq!(convert_to(q, KILOMETER).unwrap(), 1.5);
    }

    #[test]
    fn test_round_trip_preserves_magnitude() {
        let original = 3.7254;
        let q = KILOMETER.quantity(original);
        let meters = convert_to(q, METER).unwrap();
        let back = convert_to(METER.quantity(meters), KILOMETER).unwrap();
        assert_relative_eq!(back, original, max_relative = 1e-12);
    }

    #[test]
    fn test_equivalent_dimension_accepted() {
        // One joule per second is one watt.
        let rate = JOULE.quantity(3.0) / SECOND.quantity(1.0);
        assert_eq!(convert_to(rate, WATT).unwrap(), 3.0);
    }

    #[test]
    fn test_mismatched_dimension_rejected() {
        let q = KILOGRAM.quantity(1.0);
        let err = convert_to(q, METER).unwrap_err();
        assert!(matches!(err, PhysicsError::DimensionMismatch { .. }));
    }

    #[test]
    fn test_significant_digit_rounding() {
        let q = METER.quantity(9.82316543);
        assert_eq!(convert_to_significant(q, METER, 6).unwrap(), 9.82317);
        assert_eq!(convert_to_significant(q, METER, 3).unwrap(), 9.82);
        assert_eq!(convert_to_significant(q, METER, 1).unwrap(), 10.0);
    }

    #[test]
    fn test_no_rounding_unless_requested() {
        let q = METER.quantity(9.82316543);
        assert_eq!(convert_to(q, METER).unwrap(), 9.82316543);
    }

    #[test]
    fn test_rounding_small_and_negative_values() {
        let q = METER.quantity(-0.000123456);
        assert_relative_eq!(
            convert_to_significant(q, METER, 3).unwrap(),
            -0.000123,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_rounding_zero() {
        let q = METER.quantity(0.0);
        assert_eq!(convert_to_significant(q, METER, 4).unwrap(), 0.0);
    }

    #[test]
    #[should_panic(expected = "Significant digits must be at least 1")]
    fn test_zero_digits_panics() {
        let _ = convert_to_significant(METER.quantity(1.0), METER, 0);
    }
}
