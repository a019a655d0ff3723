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
//! Newton's second law, solved for acceleration
//!
//! A net force acting on a body accelerates it in proportion to its mass:
//!
//! **F = m · a**
//!
//! The law is stated in its familiar form and solved for the acceleration
//! at definition time, so the closed form the evaluator reuses is
//! `a = F / m`.
//!
//! # References
//!
//! - Newton, I. (1687). "Philosophiæ Naturalis Principia Mathematica"

use crate::algebra::expr::{sym, Equation, Symbol};
use crate::errors::PhysicsError;
use crate::laws::{Law, SymbolSpec};
use crate::units::dimension::{FORCE, MASS};
use crate::units::quantity::Quantity;
use crate::units::validator::Argument;
use std::sync::OnceLock;

/// Net force applied to the body
pub const FORCE_APPLIED: Symbol = "force";

/// Mass of the body
pub const BODY_MASS: Symbol = "mass";

/// Resulting acceleration (the output)
pub const ACCELERATION_RESULT: Symbol = "acceleration";

/// Get the law definition
pub fn law() -> &'static Law {
    static LAW: OnceLock<Law> = OnceLock::new();
    LAW.get_or_init(|| {
        Law::new(
            "acceleration_from_force_and_mass",
            Equation::new(sym(FORCE_APPLIED), sym(BODY_MASS) * sym(ACCELERATION_RESULT)),
            ACCELERATION_RESULT,
            vec![
                SymbolSpec::new(FORCE_APPLIED, FORCE),
                SymbolSpec::new(BODY_MASS, MASS),
            ],
            vec![],
        )
    })
}

/// Calculate the acceleration produced by a force on a mass
pub fn calculate_acceleration(
    force: Argument,
    mass: Argument,
) -> Result<Quantity, PhysicsError> {
    law().evaluate(&[(FORCE_APPLIED, force), (BODY_MASS, mass)])
}
