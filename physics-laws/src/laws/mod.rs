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
//! Law definitions and the generic evaluator
//!
//! A law is a declarative value: an equation over named symbols, a
//! designated output symbol, and a dimension for every input role. The
//! closed form for the output is solved once, when the law is built, so
//! repeated evaluation reuses it. One generic evaluator serves the whole
//! catalog:
//!
//! 1. every bound input is validated: kind first, then dimension, first
//!    failure aborts with no partial result;
//! 2. validated magnitudes are substituted into the closed form;
//! 3. the result dimension is derived from the equation's own dimensional
//!    algebra, never hard-coded per law.
//!
//! Per-law modules declare their symbols and expose typed `calculate_*`
//! wrappers over [`Law::evaluate`].

use crate::algebra::expr::{Bindings, DimensionBindings, Equation, Expr, Symbol};
use crate::algebra::solve::solve_for;
use crate::errors::PhysicsError;
use crate::units::dimension::Dimension;
use crate::units::quantity::Quantity;
use crate::units::validator::{validate, Argument};

pub mod definitions;
pub mod dynamics;
pub mod electricity;
pub mod gravity;
pub mod registry;

pub use registry::{catalog, LawRegistry};

/// An input role of a law: the symbol it binds and the dimension it requires
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymbolSpec {
    symbol: Symbol,
    dimension: Dimension,
}

impl SymbolSpec {
    /// Create a symbol spec
    pub const fn new(symbol: Symbol, dimension: Dimension) -> Self {
        SymbolSpec { symbol, dimension }
    }

    /// Get the symbol name
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Get the required dimension
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }
}

/// An immutable law definition with its pre-solved closed form
///
/// Laws are built once at startup (each law module holds its instance in a
/// `OnceLock`) and parameterized per call through [`Law::evaluate`],
/// never mutated.
pub struct Law {
    name: &'static str,
    equation: Equation,
    output: Symbol,
    inputs: Vec<SymbolSpec>,
    constants: Vec<(Symbol, Quantity)>,
    solved: Expr,
}

impl Law {
    /// Build a law and solve its equation for the output symbol
    ///
    /// `constants` are symbols bound once at definition time (e.g. the
    /// gravitational constant) rather than per call.
    ///
    /// # Panics
    ///
    /// Panics when the equation cannot be solved for the output symbol,
    /// when a declared input does not occur in the equation, or when
    /// symbols are declared twice. These are programming errors in a
    /// static catalog definition, not runtime conditions.
    pub fn new(
        name: &'static str,
        equation: Equation,
        output: Symbol,
        inputs: Vec<SymbolSpec>,
        constants: Vec<(Symbol, Quantity)>,
    ) -> Self {
        let solved = match solve_for(&equation, output) {
            Some(expr) => expr,
            None => panic!("Law '{}' cannot be solved for '{}'", name, output),
        };

        let mut declared: Vec<Symbol> = inputs.iter().map(|spec| spec.symbol).collect();
        declared.extend(constants.iter().map(|(symbol, _)| *symbol));
        for (index, symbol) in declared.iter().enumerate() {
            assert!(
                !declared[..index].contains(symbol),
                "Law '{}' declares symbol '{}' twice",
                name,
                symbol
            );
            assert!(
                *symbol != output,
                "Law '{}' declares its output '{}' as an input",
                name,
                output
            );
            assert!(
                equation.lhs().contains_symbol(*symbol) || equation.rhs().contains_symbol(*symbol),
                "Law '{}' declares symbol '{}' which does not occur in its equation",
                name,
                symbol
            );
        }

        Law {
            name,
            equation,
            output,
            inputs,
            constants,
            solved,
        }
    }

    /// Get the law name
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Get the stated equation
    pub fn equation(&self) -> &Equation {
        &self.equation
    }

    /// Get the output symbol
    pub fn output(&self) -> Symbol {
        self.output
    }

    /// Get the input specs
    pub fn inputs(&self) -> &[SymbolSpec] {
        &self.inputs
    }

    /// Get the closed form solved for the output symbol
    pub fn solved(&self) -> &Expr {
        &self.solved
    }

    /// Evaluate the law against bound inputs
    ///
    /// Binding order is irrelevant; bindings for symbols the law does not
    /// declare are ignored. Any single invalid input aborts the whole
    /// evaluation: validation reports the first failing role and no
    /// partial result is produced.
    pub fn evaluate(&self, bindings: &[(Symbol, Argument)]) -> Result<Quantity, PhysicsError> {
        let mut values = Bindings::new();
        let mut dims = DimensionBindings::new();

        for spec in &self.inputs {
            let bound = bindings
                .iter()
                .find(|(symbol, _)| *symbol == spec.symbol)
                .map(|(_, argument)| *argument)
                .ok_or_else(|| PhysicsError::MissingBinding {
                    symbol: spec.symbol.to_string(),
                })?;
            let quantity = validate(bound, spec.dimension, spec.symbol)?;
            values.insert(spec.symbol, quantity.magnitude());
            dims.insert(spec.symbol, quantity.dimension());
        }

        for (symbol, quantity) in &self.constants {
            values.insert(*symbol, quantity.magnitude());
            dims.insert(*symbol, quantity.dimension());
        }

        let magnitude = self.solved.eval(&values)?;
        let dimension = self.solved.dimension(&dims)?;

        if !magnitude.is_finite() {
            log::warn!(
                "law '{}' produced a non-finite result for '{}'",
                self.name,
                self.output
            );
        }

        Ok(Quantity::from_base(magnitude, dimension))
    }
}
