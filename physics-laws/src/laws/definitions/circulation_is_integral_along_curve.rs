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
//! Circulation of a vector field along a parametrized curve
//!
//! The circulation of a field **F** along a curve **r**(t) is the line
//! integral
//!
//! **C = ∮ F · dr = ∫ F(r(t)) · r′(t) dt**
//!
//! over the curve parameter. Both the field (over the coordinate symbols
//! `x`, `y`, `z`) and the curve (over [`PARAMETER`]) are given as
//! expression triples; the curve is substituted into the field, the
//! tangent comes from differentiating the curve, and the resulting scalar
//! integrand is integrated numerically.
//!
//! For a force field the circulation is the work done along the path; a
//! closed curve in a conservative field circulates zero.

use crate::algebra::calculus::{differentiate, SimpsonRule};
use crate::algebra::expr::{num, Bindings, Expr, Symbol};
use crate::errors::PhysicsError;

/// The curve parameter symbol
pub const PARAMETER: Symbol = "parameter";

/// First coordinate symbol of the field
pub const COORD_X: Symbol = "x";

/// Second coordinate symbol of the field
pub const COORD_Y: Symbol = "y";

/// Third coordinate symbol of the field
pub const COORD_Z: Symbol = "z";

/// Calculate the circulation of `field` along `curve` between two
/// parameter values
///
/// `field` components are expressions over [`COORD_X`], [`COORD_Y`],
/// [`COORD_Z`]; `curve` components are expressions over [`PARAMETER`].
/// The integral is signed, so swapping the bounds traverses the curve in
/// the opposite direction.
///
/// Fails with [`PhysicsError::MissingBinding`] when the integrand still
/// contains a symbol other than the parameter after substitution (a field
/// over symbols the curve never binds).
pub fn calculate_circulation(
    field: &[Expr; 3],
    curve: &[Expr; 3],
    parameter_from: f64,
    parameter_to: f64,
) -> Result<f64, PhysicsError> {
    let mut integrand = num(0.0);
    for axis in 0..3 {
        let tangent = differentiate(&curve[axis], PARAMETER);
        let component = field[axis]
            .substitute(COORD_X, &curve[0])
            .substitute(COORD_Y, &curve[1])
            .substitute(COORD_Z, &curve[2]);
        integrand = integrand + component * tangent;
    }

    for symbol in integrand.free_symbols() {
        if symbol != PARAMETER {
            return Err(PhysicsError::MissingBinding {
                symbol: symbol.to_string(),
            });
        }
    }

    let rule = SimpsonRule::default();
    Ok(rule.integrate(
        |t| {
            let bindings: Bindings = [(PARAMETER, t)].into_iter().collect();
            // The free-symbol check above guarantees the only binding the
            // integrand needs is the parameter itself.
            integrand.eval(&bindings).unwrap_or(f64::NAN)
        },
        parameter_from,
        parameter_to,
    ))
}
