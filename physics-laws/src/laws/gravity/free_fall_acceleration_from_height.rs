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
//! Free-fall acceleration above a planet's surface
//!
//! A body released at height h above a planet of mass M and radius R
//! accelerates toward it at
//!
//! **g = G · M / (R + h)²**
//!
//! which follows from Newton's law of universal gravitation applied to a
//! test mass: the m of F = m·g cancels against the m in F = G·M·m/r², so
//! the free-fall acceleration is independent of the falling body.
//!
//! For Earth (M = 5.976e24 kg, R = 6.371e6 m) this gives the familiar
//! ≈9.82 m/s² at the surface, decreasing with altitude.
//!
//! # References
//!
//! - Newton, I. (1687). "Philosophiæ Naturalis Principia Mathematica"

use crate::algebra::expr::{sym, Equation, Symbol};
use crate::errors::PhysicsError;
use crate::laws::gravity::gravitational_constant;
use crate::laws::{Law, SymbolSpec};
use crate::units::dimension::{LENGTH, MASS};
use crate::units::quantity::Quantity;
use crate::units::validator::Argument;
use std::sync::OnceLock;

/// Height above the planet's surface
pub const HEIGHT: Symbol = "height";

/// Mass of the planet
pub const PLANET_MASS: Symbol = "planet_mass";

/// Radius of the planet
pub const PLANET_RADIUS: Symbol = "planet_radius";

/// The gravitational constant symbol, bound at definition time
pub const CONSTANT_GRAVITATION: Symbol = "constant_gravitation";

/// Free-fall acceleration (the output)
pub const ACCELERATION_FREE_FALL: Symbol = "acceleration_free_fall";

/// Get the law definition
pub fn law() -> &'static Law {
    static LAW: OnceLock<Law> = OnceLock::new();
    LAW.get_or_init(|| {
        Law::new(
            "free_fall_acceleration_from_height",
            Equation::new(
                sym(ACCELERATION_FREE_FALL),
                sym(CONSTANT_GRAVITATION) * sym(PLANET_MASS)
                    / (sym(PLANET_RADIUS) + sym(HEIGHT)).pow(2),
            ),
            ACCELERATION_FREE_FALL,
            vec![
                SymbolSpec::new(HEIGHT, LENGTH),
                SymbolSpec::new(PLANET_MASS, MASS),
                SymbolSpec::new(PLANET_RADIUS, LENGTH),
            ],
            vec![(CONSTANT_GRAVITATION, gravitational_constant())],
        )
    })
}

/// Calculate the free-fall acceleration at a height above a planet
pub fn calculate_acceleration(
    height: Argument,
    planet_mass: Argument,
    planet_radius: Argument,
) -> Result<Quantity, PhysicsError> {
    law().evaluate(&[
        (HEIGHT, height),
        (PLANET_MASS, planet_mass),
        (PLANET_RADIUS, planet_radius),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::convert::convert_to;
    use crate::units::dimension::ACCELERATION;
    use crate::units::si::{KILOGRAM, METER, METER_PER_SECOND_SQUARED};
    use approx::assert_relative_eq;

    // M - Earth mass    5.976e+24 kg
    // R - Earth radius  6.371e+6 m
    const EARTH_MASS: f64 = 5.976e24;
    const EARTH_RADIUS: f64 = 6.371e6;

    #[test]
    fn test_acceleration_at_the_surface() {
        let result = calculate_acceleration(
            METER.quantity(0.0).into(),
            KILOGRAM.quantity(EARTH_MASS).into(),
            METER.quantity(EARTH_RADIUS).into(),
        )
        .unwrap();

        assert!(result.dimension().equivalent(ACCELERATION));
        let value = convert_to(result, METER_PER_SECOND_SQUARED).unwrap();
        assert_relative_eq!(value, 9.82316, max_relative = 0.005);
    }

    #[test]
    fn test_acceleration_decreases_with_altitude() {
        let surface = calculate_acceleration(
            METER.quantity(0.0).into(),
            KILOGRAM.quantity(EARTH_MASS).into(),
            METER.quantity(EARTH_RADIUS).into(),
        )
        .unwrap();
        let aloft = calculate_acceleration(
            METER.quantity(10_000.0).into(),
            KILOGRAM.quantity(EARTH_MASS).into(),
            METER.quantity(EARTH_RADIUS).into(),
        )
        .unwrap();
        assert!(aloft.magnitude() < surface.magnitude());
    }

    #[test]
    fn test_bad_height() {
        let err = calculate_acceleration(
            KILOGRAM.quantity(1.0).into(),
            KILOGRAM.quantity(EARTH_MASS).into(),
            METER.quantity(EARTH_RADIUS).into(),
        )
        .unwrap_err();
        assert!(matches!(err, PhysicsError::DimensionMismatch { .. }));

        let err = calculate_acceleration(
            100.0.into(),
            KILOGRAM.quantity(EARTH_MASS).into(),
            METER.quantity(EARTH_RADIUS).into(),
        )
        .unwrap_err();
        assert!(matches!(err, PhysicsError::InvalidArgumentKind { .. }));
    }

    #[test]
    fn test_bad_planet_mass() {
        let err = calculate_acceleration(
            METER.quantity(0.0).into(),
            METER.quantity(1.0).into(),
            METER.quantity(EARTH_RADIUS).into(),
        )
        .unwrap_err();
        assert!(matches!(err, PhysicsError::DimensionMismatch { .. }));

        let err = calculate_acceleration(
            METER.quantity(0.0).into(),
            100.0.into(),
            METER.quantity(EARTH_RADIUS).into(),
        )
        .unwrap_err();
        assert!(matches!(err, PhysicsError::InvalidArgumentKind { .. }));
    }

    #[test]
    fn test_bad_planet_radius() {
        let err = calculate_acceleration(
            METER.quantity(0.0).into(),
            KILOGRAM.quantity(EARTH_MASS).into(),
            KILOGRAM.quantity(1.0).into(),
        )
        .unwrap_err();
        assert!(matches!(err, PhysicsError::DimensionMismatch { .. }));

        let err = calculate_acceleration(
            METER.quantity(0.0).into(),
            KILOGRAM.quantity(EARTH_MASS).into(),
            100.0.into(),
        )
        .unwrap_err();
        assert!(matches!(err, PhysicsError::InvalidArgumentKind { .. }));
    }
}
