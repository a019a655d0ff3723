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
//! Symbol isolation for law equations
//!
//! Every law designates one symbol as its output; the closed form for that
//! symbol is derived once, at definition time, by peeling inverse
//! operations off the side of the equation containing it. This handles the
//! shapes that appear in the catalog: the target occurring exactly once,
//! reachable through sums, differences, products, quotients, negation,
//! squares, and square roots. It is not a general equation solver.

use crate::algebra::expr::{Equation, Expr, Symbol};

/// Solve an equation for a symbol occurring exactly once
///
/// Returns the closed-form expression for `target` in terms of the other
/// symbols, or `None` when the target does not occur exactly once or sits
/// under an operation with no supported inverse (e.g. inside a sine).
pub fn solve_for(equation: &Equation, target: Symbol) -> Option<Expr> {
    let occurrences = equation.lhs().count_symbol(target) + equation.rhs().count_symbol(target);
    if occurrences != 1 {
        return None;
    }

    if equation.lhs().contains_symbol(target) {
        isolate(equation.lhs(), equation.rhs().clone(), target)
    } else {
        isolate(equation.rhs(), equation.lhs().clone(), target)
    }
}

/// Peel operations off `expr` until the target symbol stands alone,
/// applying the inverse of each peeled operation to `other`
fn isolate(expr: &Expr, other: Expr, target: Symbol) -> Option<Expr> {
    match expr {
        Expr::Sym(name) if *name == target => Some(other),
        Expr::Add(a, b) => {
            if a.contains_symbol(target) {
                isolate(a, other - (**b).clone(), target)
            } else {
                isolate(b, other - (**a).clone(), target)
            }
        }
        Expr::Sub(a, b) => {
            if a.contains_symbol(target) {
                isolate(a, other + (**b).clone(), target)
            } else {
                isolate(b, (**a).clone() - other, target)
            }
        }
        Expr::Mul(a, b) => {
            if a.contains_symbol(target) {
                isolate(a, other / (**b).clone(), target)
            } else {
                isolate(b, other / (**a).clone(), target)
            }
        }
        Expr::Div(a, b) => {
            if a.contains_symbol(target) {
                isolate(a, other * (**b).clone(), target)
            } else {
                isolate(b, (**a).clone() / other, target)
            }
        }
        Expr::Neg(a) => isolate(a, -other, target),
        Expr::Pow(a, 1) => isolate(a, other, target),
        Expr::Pow(a, 2) => isolate(a, other.sqrt(), target),
        Expr::Sqrt(a) => isolate(a, other.pow(2), target),
        // No inverse carried for higher powers or trigonometric wrappers;
        // nothing in the catalog needs them.
        _ => None,
    }
}
