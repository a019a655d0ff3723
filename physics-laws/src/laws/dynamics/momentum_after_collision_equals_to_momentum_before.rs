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
//! Conservation of momentum across a collision
//!
//! In a closed system the total momentum after an elastic collision equals
//! the total momentum before it:
//!
//! **P_after = P_before**
//!
//! The equation looks trivial, but the catalog states it anyway: it is the
//! one-dimensional projection of a conservation law, and the evaluator
//! still enforces that the input really is a momentum.

use crate::algebra::expr::{sym, Equation, Symbol};
use crate::errors::PhysicsError;
use crate::laws::{Law, SymbolSpec};
use crate::units::dimension::MOMENTUM;
use crate::units::quantity::Quantity;
use crate::units::validator::Argument;
use std::sync::OnceLock;

/// Total momentum before the collision
pub const MOMENTUM_BEFORE: Symbol = "momentum_before";

/// Total momentum after the collision (the output)
pub const MOMENTUM_AFTER: Symbol = "momentum_after";

/// Get the law definition
pub fn law() -> &'static Law {
    static LAW: OnceLock<Law> = OnceLock::new();
    LAW.get_or_init(|| {
        Law::new(
            "momentum_after_collision_equals_to_momentum_before",
            Equation::new(sym(MOMENTUM_AFTER), sym(MOMENTUM_BEFORE)),
            MOMENTUM_AFTER,
            vec![SymbolSpec::new(MOMENTUM_BEFORE, MOMENTUM)],
            vec![],
        )
    })
}

/// Calculate the momentum after the collision
pub fn calculate_momentum_after(momentum_before: Argument) -> Result<Quantity, PhysicsError> {
    law().evaluate(&[(MOMENTUM_BEFORE, momentum_before)])
}
