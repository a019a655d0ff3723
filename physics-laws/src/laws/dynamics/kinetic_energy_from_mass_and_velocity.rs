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
//! Kinetic energy of a moving body: **E = m · v² / 2**

use crate::algebra::expr::{num, sym, Equation, Symbol};
use crate::errors::PhysicsError;
use crate::laws::{Law, SymbolSpec};
use crate::units::dimension::{MASS, VELOCITY};
use crate::units::quantity::Quantity;
use crate::units::validator::Argument;
use std::sync::OnceLock;

/// Mass of the body
pub const BODY_MASS: Symbol = "body_mass";

/// Speed of the body
pub const BODY_VELOCITY: Symbol = "body_velocity";

/// Kinetic energy (the output)
pub const KINETIC_ENERGY: Symbol = "kinetic_energy";

/// Get the law definition
pub fn law() -> &'static Law {
    static LAW: OnceLock<Law> = OnceLock::new();
    LAW.get_or_init(|| {
        Law::new(
            "kinetic_energy_from_mass_and_velocity",
            Equation::new(
                sym(KINETIC_ENERGY),
                sym(BODY_MASS) * sym(BODY_VELOCITY).pow(2) / num(2.0),
            ),
            KINETIC_ENERGY,
            vec![
                SymbolSpec::new(BODY_MASS, MASS),
                SymbolSpec::new(BODY_VELOCITY, VELOCITY),
            ],
            vec![],
        )
    })
}

/// Calculate the kinetic energy of a body
pub fn calculate_kinetic_energy(
    body_mass: Argument,
    body_velocity: Argument,
) -> Result<Quantity, PhysicsError> {
    law().evaluate(&[(BODY_MASS, body_mass), (BODY_VELOCITY, body_velocity)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::convert::convert_to;
    use crate::units::dimension::ENERGY;
    use crate::units::si::{JOULE, KILOGRAM, METER_PER_SECOND, SECOND};
    use approx::assert_relative_eq;

    #[test]
    fn test_basic_energy() {
        let result = calculate_kinetic_energy(
            KILOGRAM.quantity(2.0).into(),
            METER_PER_SECOND.quantity(3.0).into(),
        )
        .unwrap();
        assert!(result.dimension().equivalent(ENERGY));
        let joules = convert_to(result, JOULE).unwrap();
        assert_relative_eq!(joules, 9.0, max_relative = 1e-12);
    }

    #[test]
    fn test_energy_is_even_in_velocity() {
        let forward = calculate_kinetic_energy(
            KILOGRAM.quantity(2.0).into(),
            METER_PER_SECOND.quantity(3.0).into(),
        )
        .unwrap();
        let backward = calculate_kinetic_energy(
            KILOGRAM.quantity(2.0).into(),
            METER_PER_SECOND.quantity(-3.0).into(),
        )
        .unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_bad_inputs() {
        let err = calculate_kinetic_energy(
            SECOND.quantity(2.0).into(),
            METER_PER_SECOND.quantity(3.0).into(),
        )
        .unwrap_err();
        assert!(matches!(err, PhysicsError::DimensionMismatch { .. }));

        let err = calculate_kinetic_energy(
            KILOGRAM.quantity(2.0).into(),
            3.0.into(),
        )
        .unwrap_err();
        assert!(matches!(err, PhysicsError::InvalidArgumentKind { .. }));
    }
}
