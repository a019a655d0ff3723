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
//! Differentiation and numeric quadrature
//!
//! The circulation definition needs two pieces of calculus: the derivative
//! of a parametrized curve with respect to its parameter (symbolic, via
//! the standard differentiation rules) and a definite integral of the
//! resulting scalar integrand (numeric, via composite Simpson quadrature).
//!
//! # Choosing an interval count
//!
//! Simpson's rule is exact for cubics per panel and converges at fourth
//! order for smooth integrands, so the default of 1024 intervals is far
//! more than the catalog's trigonometric and rational integrands need.
//! Raise it only for integrands with sharp features.

use crate::algebra::expr::{num, Expr, Symbol};

/// Default number of Simpson intervals
pub const DEFAULT_INTERVALS: usize = 1024;

/// Differentiate an expression with respect to a symbol
///
/// Applies the sum, product, quotient, power, and chain rules. The result
/// is not simplified: zero and one factors from constant subtrees stay in
/// the tree and fall out during numeric evaluation.
pub fn differentiate(expr: &Expr, symbol: Symbol) -> Expr {
    match expr {
        Expr::Num(_) => num(0.0),
        Expr::Sym(name) => {
            if *name == symbol {
                num(1.0)
            } else {
                num(0.0)
            }
        }
        Expr::Add(a, b) => differentiate(a, symbol) + differentiate(b, symbol),
        Expr::Sub(a, b) => differentiate(a, symbol) - differentiate(b, symbol),
        Expr::Mul(a, b) => {
            let a = (**a).clone();
            let b = (**b).clone();
            differentiate(&a, symbol) * b.clone() + a * differentiate(&b, symbol)
        }
        Expr::Div(a, b) => {
            let a = (**a).clone();
            let b = (**b).clone();
            (differentiate(&a, symbol) * b.clone() - a * differentiate(&b, symbol))
                / b.pow(2)
        }
        Expr::Pow(a, n) => {
            let base = (**a).clone();
            num(*n as f64) * base.clone().pow(*n - 1) * differentiate(&base, symbol)
        }
        Expr::Neg(a) => -differentiate(a, symbol),
        Expr::Sqrt(a) => {
            let inner = (**a).clone();
            differentiate(&inner, symbol) / (num(2.0) * inner.sqrt())
        }
        Expr::Sin(a) => {
            let inner = (**a).clone();
            inner.clone().cos() * differentiate(&inner, symbol)
        }
        Expr::Cos(a) => {
            let inner = (**a).clone();
            -(inner.clone().sin() * differentiate(&inner, symbol))
        }
    }
}

/// Composite Simpson quadrature over a fixed number of intervals
///
/// # Examples
///
/// ```
/// use physics_laws::algebra::calculus::SimpsonRule;
///
/// let rule = SimpsonRule::default();
/// let integral = rule.integrate(|x| x * x, 0.0, 1.0);
/// assert!((integral - 1.0 / 3.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SimpsonRule {
    intervals: usize,
}

impl SimpsonRule {
    /// Create a rule with the given number of intervals
    ///
    /// # Panics
    ///
    /// Panics if `intervals` is zero or odd; Simpson panels pair
    /// intervals, so the count must be even.
    pub fn new(intervals: usize) -> Self {
        assert!(
            intervals > 0 && intervals % 2 == 0,
            "Interval count must be positive and even"
        );
        SimpsonRule { intervals }
    }

    /// Get the interval count
    pub fn intervals(&self) -> usize {
        self.intervals
    }

    /// Integrate `f` from `from` to `to`
    ///
    /// The integral is signed: swapping the bounds negates the result.
    /// Coincident bounds integrate to exactly zero.
    pub fn integrate<F: Fn(f64) -> f64>(&self, f: F, from: f64, to: f64) -> f64 {
        if from == to {
            return 0.0;
        }

        let h = (to - from) / self.intervals as f64;
        let mut sum = f(from) + f(to);
        for i in 1..self.intervals {
            let x = from + h * i as f64;
            let weight = if i % 2 == 0 { 2.0 } else { 4.0 };
            sum += weight * f(x);
        }
        sum * h / 3.0
    }
}

impl Default for SimpsonRule {
    fn default() -> Self {
        SimpsonRule::new(DEFAULT_INTERVALS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::expr::{sym, Bindings};
    use approx::assert_relative_eq;
    use std::f64::consts::PI;

    fn eval_at(expr: &Expr, symbol: Symbol, value: f64) -> f64 {
        let bindings: Bindings = [(symbol, value)].into_iter().collect();
        expr.eval(&bindings).unwrap()
    }

    #[test]
    fn test_differentiate_polynomial() {
        // d/dx (3x^2 + x) = 6x + 1
        let e = num(3.0) * sym("x").pow(2) + sym("x");
        let d = differentiate(&e, "x");
        assert_relative_eq!(eval_at(&d, "x", 2.0), 13.0, max_relative = 1e-12);
    }

    #[test]
    fn test_differentiate_trigonometry() {
        let d_sin = differentiate(&sym("t").sin(), "t");
        assert_relative_eq!(eval_at(&d_sin, "t", 0.3), (0.3f64).cos(), max_relative = 1e-12);

        let d_cos = differentiate(&sym("t").cos(), "t");
        assert_relative_eq!(eval_at(&d_cos, "t", 0.3), -(0.3f64).sin(), max_relative = 1e-12);
    }

    #[test]
    fn test_differentiate_chain_rule() {
        // d/dt sin(2t) = 2 cos(2t)
        let e = (num(2.0) * sym("t")).sin();
        let d = differentiate(&e, "t");
        assert_relative_eq!(
            eval_at(&d, "t", 0.5),
            2.0 * (1.0f64).cos(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_differentiate_quotient_and_sqrt() {
        // d/dx (1/x) = -1/x^2
        let e = num(1.0) / sym("x");
        let d = differentiate(&e, "x");
        assert_relative_eq!(eval_at(&d, "x", 4.0), -1.0 / 16.0, max_relative = 1e-12);

        // d/dx sqrt(x) = 1 / (2 sqrt(x))
        let e = sym("x").sqrt();
        let d = differentiate(&e, "x");
        assert_relative_eq!(eval_at(&d, "x", 9.0), 1.0 / 6.0, max_relative = 1e-12);
    }

    #[test]
    fn test_differentiate_wrt_other_symbol_is_zero() {
        let e = sym("x").pow(2);
        let d = differentiate(&e, "y");
        assert_eq!(eval_at(&d, "x", 5.0), 0.0);
    }

    #[test]
    fn test_simpson_polynomial() {
        let rule = SimpsonRule::default();
        assert_relative_eq!(
            rule.integrate(|x| x * x, 0.0, 1.0),
            1.0 / 3.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_simpson_sine() {
        let rule = SimpsonRule::default();
        assert_relative_eq!(rule.integrate(f64::sin, 0.0, PI), 2.0, max_relative = 1e-9);
    }

    #[test]
    fn test_simpson_signed_bounds() {
        let rule = SimpsonRule::default();
        let forward = rule.integrate(|x| x.exp(), 0.0, 1.0);
        let reverse = rule.integrate(|x| x.exp(), 1.0, 0.0);
        assert_relative_eq!(forward, -reverse, max_relative = 1e-12);
    }

    #[test]
    fn test_simpson_coincident_bounds() {
        let rule = SimpsonRule::new(2);
        assert_eq!(rule.integrate(|x| x, 3.0, 3.0), 0.0);
    }

    #[test]
    #[should_panic(expected = "Interval count must be positive and even")]
    fn test_odd_interval_count_panics() {
        SimpsonRule::new(3);
    }

    #[test]
    #[should_panic(expected = "Interval count must be positive and even")]
    fn test_zero_interval_count_panics() {
        SimpsonRule::new(0);
    }
}
