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
//! Symbolic expression trees for law equations
//!
//! Expressions carry exactly what the law catalog needs: named symbols,
//! numeric constants, the four arithmetic operations, integer powers,
//! square roots, and sine/cosine (for parametrized curves). An expression
//! can be evaluated numerically against symbol bindings, evaluated over
//! dimensional algebra to derive a result dimension compositionally, and
//! rewritten by substituting a symbol with another expression.
//!
//! This is deliberately not a computer-algebra system: there is no
//! canonical form, no simplifier, and no general solver; only the
//! single-occurrence isolation in [`crate::algebra::solve`].

use crate::errors::PhysicsError;
use crate::units::dimension::{Dimension, DIMENSIONLESS};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

/// A symbolic placeholder name within an equation
pub type Symbol = &'static str;

/// Numeric bindings for evaluation, symbol → base-unit magnitude
pub type Bindings = HashMap<Symbol, f64>;

/// Dimension bindings for compositional dimension derivation
pub type DimensionBindings = HashMap<Symbol, Dimension>;

/// A symbolic expression tree
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric constant (dimensionless)
    Num(f64),
    /// A named symbol, bound at evaluation time
    Sym(Symbol),
    /// Sum of two expressions
    Add(Box<Expr>, Box<Expr>),
    /// Difference of two expressions
    Sub(Box<Expr>, Box<Expr>),
    /// Product of two expressions
    Mul(Box<Expr>, Box<Expr>),
    /// Quotient of two expressions
    Div(Box<Expr>, Box<Expr>),
    /// Integer power of an expression
    Pow(Box<Expr>, i32),
    /// Negation of an expression
    Neg(Box<Expr>),
    /// Square root of an expression
    Sqrt(Box<Expr>),
    /// Sine of a dimensionless expression
    Sin(Box<Expr>),
    /// Cosine of a dimensionless expression
    Cos(Box<Expr>),
}

/// Build a symbol expression
pub fn sym(name: Symbol) -> Expr {
    Expr::Sym(name)
}

/// Build a numeric constant expression
pub fn num(value: f64) -> Expr {
    Expr::Num(value)
}

impl Expr {
    /// Raise this expression to an integer power
    pub fn pow(self, exponent: i32) -> Expr {
        Expr::Pow(Box::new(self), exponent)
    }

    /// Square root of this expression
    pub fn sqrt(self) -> Expr {
        Expr::Sqrt(Box::new(self))
    }

    /// Sine of this expression
    pub fn sin(self) -> Expr {
        Expr::Sin(Box::new(self))
    }

    /// Cosine of this expression
    pub fn cos(self) -> Expr {
        Expr::Cos(Box::new(self))
    }

    /// Count occurrences of a symbol in this expression
    pub fn count_symbol(&self, symbol: Symbol) -> usize {
        match self {
            Expr::Num(_) => 0,
            Expr::Sym(name) => usize::from(*name == symbol),
            Expr::Add(a, b) | Expr::Sub(a, b) | Expr::Mul(a, b) | Expr::Div(a, b) => {
                a.count_symbol(symbol) + b.count_symbol(symbol)
            }
            Expr::Pow(a, _) => a.count_symbol(symbol),
            Expr::Neg(a) | Expr::Sqrt(a) | Expr::Sin(a) | Expr::Cos(a) => a.count_symbol(symbol),
        }
    }

    /// Check whether a symbol occurs in this expression
    pub fn contains_symbol(&self, symbol: Symbol) -> bool {
        self.count_symbol(symbol) > 0
    }

    /// Collect the set of free symbols in this expression
    pub fn free_symbols(&self) -> BTreeSet<Symbol> {
        let mut symbols = BTreeSet::new();
        self.collect_symbols(&mut symbols);
        symbols
    }

    fn collect_symbols(&self, out: &mut BTreeSet<Symbol>) {
        match self {
            Expr::Num(_) => {}
            Expr::Sym(name) => {
                out.insert(*name);
            }
            Expr::Add(a, b) | Expr::Sub(a, b) | Expr::Mul(a, b) | Expr::Div(a, b) => {
                a.collect_symbols(out);
                b.collect_symbols(out);
            }
            Expr::Pow(a, _) => a.collect_symbols(out),
            Expr::Neg(a) | Expr::Sqrt(a) | Expr::Sin(a) | Expr::Cos(a) => a.collect_symbols(out),
        }
    }

    /// Replace every occurrence of a symbol with another expression
    pub fn substitute(&self, symbol: Symbol, replacement: &Expr) -> Expr {
        match self {
            Expr::Num(value) => Expr::Num(*value),
            Expr::Sym(name) => {
                if *name == symbol {
                    replacement.clone()
                } else {
                    Expr::Sym(*name)
                }
            }
            Expr::Add(a, b) => Expr::Add(
                Box::new(a.substitute(symbol, replacement)),
                Box::new(b.substitute(symbol, replacement)),
            ),
            Expr::Sub(a, b) => Expr::Sub(
                Box::new(a.substitute(symbol, replacement)),
                Box::new(b.substitute(symbol, replacement)),
            ),
            Expr::Mul(a, b) => Expr::Mul(
                Box::new(a.substitute(symbol, replacement)),
                Box::new(b.substitute(symbol, replacement)),
            ),
            Expr::Div(a, b) => Expr::Div(
                Box::new(a.substitute(symbol, replacement)),
                Box::new(b.substitute(symbol, replacement)),
            ),
            Expr::Pow(a, n) => Expr::Pow(Box::new(a.substitute(symbol, replacement)), *n),
            Expr::Neg(a) => Expr::Neg(Box::new(a.substitute(symbol, replacement))),
            Expr::Sqrt(a) => Expr::Sqrt(Box::new(a.substitute(symbol, replacement))),
            Expr::Sin(a) => Expr::Sin(Box::new(a.substitute(symbol, replacement))),
            Expr::Cos(a) => Expr::Cos(Box::new(a.substitute(symbol, replacement))),
        }
    }

    /// Evaluate numerically against symbol bindings
    ///
    /// Substitution order never matters: bindings are a map and every
    /// symbol is read independently. An unbound symbol is a
    /// [`PhysicsError::MissingBinding`].
    pub fn eval(&self, bindings: &Bindings) -> Result<f64, PhysicsError> {
        match self {
            Expr::Num(value) => Ok(*value),
            Expr::Sym(name) => {
                bindings
                    .get(name)
                    .copied()
                    .ok_or_else(|| PhysicsError::MissingBinding {
                        symbol: name.to_string(),
                    })
            }
            Expr::Add(a, b) => Ok(a.eval(bindings)? + b.eval(bindings)?),
            Expr::Sub(a, b) => Ok(a.eval(bindings)? - b.eval(bindings)?),
            Expr::Mul(a, b) => Ok(a.eval(bindings)? * b.eval(bindings)?),
            Expr::Div(a, b) => Ok(a.eval(bindings)? / b.eval(bindings)?),
            Expr::Pow(a, n) => Ok(a.eval(bindings)?.powi(*n)),
            Expr::Neg(a) => Ok(-a.eval(bindings)?),
            Expr::Sqrt(a) => Ok(a.eval(bindings)?.sqrt()),
            Expr::Sin(a) => Ok(a.eval(bindings)?.sin()),
            Expr::Cos(a) => Ok(a.eval(bindings)?.cos()),
        }
    }

    /// Derive the dimension of this expression from symbol dimensions
    ///
    /// This is the compositional rule the evaluator relies on: the result
    /// dimension of a law falls out of the equation's own dimensional
    /// algebra, it is never hard-coded per law. Numeric constants are
    /// dimensionless; sums require equivalent operands; products and
    /// quotients compose exponents; trigonometric arguments must be
    /// dimensionless.
    pub fn dimension(&self, bindings: &DimensionBindings) -> Result<Dimension, PhysicsError> {
        match self {
            Expr::Num(_) => Ok(DIMENSIONLESS),
            Expr::Sym(name) => {
                bindings
                    .get(name)
                    .copied()
                    .ok_or_else(|| PhysicsError::MissingBinding {
                        symbol: name.to_string(),
                    })
            }
            Expr::Add(a, b) | Expr::Sub(a, b) => {
                // A literal zero is dimension-polymorphic: solved forms
                // like `0 - current_in` carry the other operand's
                // dimension.
                if let Expr::Num(value) = &**a {
                    if *value == 0.0 {
                        return b.dimension(bindings);
                    }
                }
                if let Expr::Num(value) = &**b {
                    if *value == 0.0 {
                        return a.dimension(bindings);
                    }
                }
                let left = a.dimension(bindings)?;
                let right = b.dimension(bindings)?;
                if left.equivalent(right) {
                    Ok(left)
                } else {
                    Err(PhysicsError::DimensionMismatch {
                        role: "sum operand".to_string(),
                        expected: left,
                        actual: right,
                    })
                }
            }
            Expr::Mul(a, b) => Ok(a.dimension(bindings)? * b.dimension(bindings)?),
            Expr::Div(a, b) => Ok(a.dimension(bindings)? / b.dimension(bindings)?),
            Expr::Pow(a, n) => Ok(a.dimension(bindings)?.powi(*n)),
            Expr::Neg(a) => a.dimension(bindings),
            Expr::Sqrt(a) => {
                let inner = a.dimension(bindings)?;
                inner
                    .sqrt()
                    .ok_or(PhysicsError::FractionalDimension(inner))
            }
            Expr::Sin(a) | Expr::Cos(a) => {
                let inner = a.dimension(bindings)?;
                if inner.is_dimensionless() {
                    Ok(DIMENSIONLESS)
                } else {
                    Err(PhysicsError::DimensionMismatch {
                        role: "trigonometric argument".to_string(),
                        expected: DIMENSIONLESS,
                        actual: inner,
                    })
                }
            }
        }
    }

    fn precedence(&self) -> u8 {
        match self {
            Expr::Add(..) | Expr::Sub(..) => 1,
            Expr::Mul(..) | Expr::Div(..) => 2,
            Expr::Neg(..) => 3,
            Expr::Pow(..) => 4,
            Expr::Num(_) | Expr::Sym(_) | Expr::Sqrt(..) | Expr::Sin(..) | Expr::Cos(..) => 5,
        }
    }

    fn fmt_child(&self, f: &mut fmt::Formatter<'_>, min_precedence: u8) -> fmt::Result {
        if self.precedence() < min_precedence {
            write!(f, "({})", self)
        } else {
            write!(f, "{}", self)
        }
    }
}

impl Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::Add(Box::new(self), Box::new(rhs))
    }
}

impl Sub for Expr {
    type Output = Expr;

    fn sub(self, rhs: Expr) -> Expr {
        Expr::Sub(Box::new(self), Box::new(rhs))
    }
}

impl Mul for Expr {
    type Output = Expr;

    fn mul(self, rhs: Expr) -> Expr {
        Expr::Mul(Box::new(self), Box::new(rhs))
    }
}

impl Div for Expr {
    type Output = Expr;

    fn div(self, rhs: Expr) -> Expr {
        Expr::Div(Box::new(self), Box::new(rhs))
    }
}

impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Expr {
        Expr::Neg(Box::new(self))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Num(value) => write!(f, "{}", value),
            Expr::Sym(name) => write!(f, "{}", name),
            Expr::Add(a, b) => {
                a.fmt_child(f, 1)?;
                write!(f, " + ")?;
                b.fmt_child(f, 1)
            }
            Expr::Sub(a, b) => {
                a.fmt_child(f, 1)?;
                write!(f, " - ")?;
                b.fmt_child(f, 2)
            }
            Expr::Mul(a, b) => {
                a.fmt_child(f, 2)?;
                write!(f, " * ")?;
                b.fmt_child(f, 2)
            }
            Expr::Div(a, b) => {
                a.fmt_child(f, 2)?;
                write!(f, " / ")?;
                b.fmt_child(f, 3)
            }
            Expr::Pow(a, n) => {
                a.fmt_child(f, 5)?;
                write!(f, "^{}", n)
            }
            Expr::Neg(a) => {
                write!(f, "-")?;
                a.fmt_child(f, 3)
            }
            Expr::Sqrt(a) => write!(f, "sqrt({})", a),
            Expr::Sin(a) => write!(f, "sin({})", a),
            Expr::Cos(a) => write!(f, "cos({})", a),
        }
    }
}

/// An equation relating two expressions
///
/// Laws state their physics as an equation and designate one symbol as the
/// solve-for target; the closed form is derived once, at definition time.
#[derive(Debug, Clone, PartialEq)]
pub struct Equation {
    lhs: Expr,
    rhs: Expr,
}

impl Equation {
    /// Create an equation from its two sides
    pub fn new(lhs: Expr, rhs: Expr) -> Self {
        Equation { lhs, rhs }
    }

    /// Get the left-hand side
    pub fn lhs(&self) -> &Expr {
        &self.lhs
    }

    /// Get the right-hand side
    pub fn rhs(&self) -> &Expr {
        &self.rhs
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.lhs, self.rhs)
    }
}
