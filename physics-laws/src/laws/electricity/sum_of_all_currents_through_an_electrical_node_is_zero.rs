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
//! Kirchhoff's current law for an electrical node
//!
//! Charge does not accumulate in a node: the signed sum of all currents
//! through it is zero, so the current leaving balances whatever flows in:
//!
//! **I_in + I_out = 0**
//!
//! The aggregate entry point sums any number of incoming currents before
//! applying the law. Summing no currents at all is not an error: with
//! nothing flowing, the net current is exactly the dimensionless zero.
//!
//! # References
//!
//! - Kirchhoff, G. (1845). "Ueber den Durchgang eines elektrischen Stromes
//!   durch eine Ebene, insbesondere durch eine kreisförmige"

use crate::algebra::expr::{num, sym, Equation, Symbol};
use crate::errors::PhysicsError;
use crate::laws::{Law, SymbolSpec};
use crate::units::dimension::CURRENT;
use crate::units::quantity::Quantity;
use crate::units::validator::{validate_all, Argument};
use std::sync::OnceLock;

/// Net current flowing into the node
pub const CURRENT_IN: Symbol = "current_in";

/// Current flowing out of the node (the output)
pub const CURRENT_OUT: Symbol = "current_out";

/// Get the law definition
pub fn law() -> &'static Law {
    static LAW: OnceLock<Law> = OnceLock::new();
    LAW.get_or_init(|| {
        Law::new(
            "sum_of_all_currents_through_an_electrical_node_is_zero",
            Equation::new(sym(CURRENT_IN) + sym(CURRENT_OUT), num(0.0)),
            CURRENT_OUT,
            vec![SymbolSpec::new(CURRENT_IN, CURRENT)],
            vec![],
        )
    })
}

/// Calculate the outgoing current balancing a single incoming current
pub fn calculate_current(current: Argument) -> Result<Quantity, PhysicsError> {
    law().evaluate(&[(CURRENT_IN, current)])
}

/// Calculate the outgoing current balancing a set of incoming currents
///
/// Every element is validated before the sum; the first invalid element
/// aborts the whole calculation. An empty slice yields exactly zero,
/// dimensionless; no currents means no net current.
pub fn calculate_current_from_array(currents: &[Argument]) -> Result<Quantity, PhysicsError> {
    if currents.is_empty() {
        return Ok(Quantity::zero());
    }

    let validated = validate_all(currents, CURRENT, CURRENT_IN)?;
    let total = validated
        .iter()
        .map(Quantity::magnitude)
        .sum::<f64>();
    law().evaluate(&[(CURRENT_IN, Quantity::from_base(total, CURRENT).into())])
}
