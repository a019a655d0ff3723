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
//! Amount of heat energy from mass and temperature change
//!
//! The energy needed to change a body's temperature is proportional to its
//! mass and to the temperature difference, with the specific heat capacity
//! of the material as the proportionality constant:
//!
//! **Q = C · m · (t₂ − t₁)**
//!
//! Where:
//! - Q is the amount of energy transferred as heat
//! - C is the specific heat capacity of the material (J/(kg·K))
//! - m is the mass of the body
//! - t₂ and t₁ are the final and initial temperatures
//!
//! Losses to the surroundings are ignored; a negative result means the
//! body released energy while cooling.

use crate::algebra::expr::{sym, Equation, Symbol};
use crate::errors::PhysicsError;
use crate::laws::{Law, SymbolSpec};
use crate::units::dimension::{MASS, SPECIFIC_HEAT_CAPACITY, TEMPERATURE};
use crate::units::quantity::Quantity;
use crate::units::validator::Argument;
use std::sync::OnceLock;

/// Specific heat capacity of the body's material
pub const SPECIFIC_HEAT: Symbol = "specific_heat";

/// Mass of the body being heated
pub const BODY_MASS: Symbol = "body_mass";

/// Final temperature
pub const TEMPERATURE_END: Symbol = "temperature_end";

/// Initial temperature
pub const TEMPERATURE_ORIGIN: Symbol = "temperature_origin";

/// Amount of energy transferred as heat (the output)
pub const AMOUNT_ENERGY: Symbol = "amount_energy";

/// Get the law definition
pub fn law() -> &'static Law {
    static LAW: OnceLock<Law> = OnceLock::new();
    LAW.get_or_init(|| {
        Law::new(
            "amount_energy_from_mass_and_temperature",
            Equation::new(
                sym(AMOUNT_ENERGY),
                sym(SPECIFIC_HEAT)
                    * sym(BODY_MASS)
                    * (sym(TEMPERATURE_END) - sym(TEMPERATURE_ORIGIN)),
            ),
            AMOUNT_ENERGY,
            vec![
                SymbolSpec::new(SPECIFIC_HEAT, SPECIFIC_HEAT_CAPACITY),
                SymbolSpec::new(BODY_MASS, MASS),
                SymbolSpec::new(TEMPERATURE_END, TEMPERATURE),
                SymbolSpec::new(TEMPERATURE_ORIGIN, TEMPERATURE),
            ],
            vec![],
        )
    })
}

/// Calculate the heat energy for a temperature change
pub fn calculate_amount_energy(
    specific_heat: Argument,
    body_mass: Argument,
    temperature_end: Argument,
    temperature_origin: Argument,
) -> Result<Quantity, PhysicsError> {
    law().evaluate(&[
        (SPECIFIC_HEAT, specific_heat),
        (BODY_MASS, body_mass),
        (TEMPERATURE_END, temperature_end),
        (TEMPERATURE_ORIGIN, temperature_origin),
    ])
}
