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
//! Newton's law of universal gravitation
//!
//! Every point mass attracts every other point mass with a force
//! proportional to the product of their masses and inversely proportional
//! to the square of the distance between them:
//!
//! **F = G · m₁ · m₂ / r²**

use crate::algebra::expr::{sym, Equation, Symbol};
use crate::errors::PhysicsError;
use crate::laws::gravity::gravitational_constant;
use crate::laws::{Law, SymbolSpec};
use crate::units::dimension::{LENGTH, MASS};
use crate::units::quantity::Quantity;
use crate::units::validator::Argument;
use std::sync::OnceLock;

/// Mass of the first body
pub const FIRST_MASS: Symbol = "first_mass";

/// Mass of the second body
pub const SECOND_MASS: Symbol = "second_mass";

/// Distance between the centers of mass
pub const DISTANCE: Symbol = "distance";

/// The gravitational constant symbol, bound at definition time
pub const CONSTANT_GRAVITATION: Symbol = "constant_gravitation";

/// Gravitational force between the bodies (the output)
pub const GRAVITY_FORCE: Symbol = "gravity_force";

/// Get the law definition
pub fn law() -> &'static Law {
    static LAW: OnceLock<Law> = OnceLock::new();
    LAW.get_or_init(|| {
        Law::new(
            "gravity_force_from_radial_distance",
            Equation::new(
                sym(GRAVITY_FORCE),
                sym(CONSTANT_GRAVITATION) * sym(FIRST_MASS) * sym(SECOND_MASS)
                    / sym(DISTANCE).pow(2),
            ),
            GRAVITY_FORCE,
            vec![
                SymbolSpec::new(FIRST_MASS, MASS),
                SymbolSpec::new(SECOND_MASS, MASS),
                SymbolSpec::new(DISTANCE, LENGTH),
            ],
            vec![(CONSTANT_GRAVITATION, gravitational_constant())],
        )
    })
}

/// Calculate the gravitational force between two bodies
pub fn calculate_force(
    first_mass: Argument,
    second_mass: Argument,
    distance: Argument,
) -> Result<Quantity, PhysicsError> {
    law().evaluate(&[
        (FIRST_MASS, first_mass),
        (SECOND_MASS, second_mass),
        (DISTANCE, distance),
    ])
}
