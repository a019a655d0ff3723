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
//! Input validation for law evaluation
//!
//! Laws accept [`Argument`] values: an explicit tagged variant that either
//! carries a dimensioned [`Quantity`] or a bare number. The tag replaces
//! duck typing: "does this look like a quantity" becomes a match with a
//! distinct error path per failure mode:
//!
//! - a bare number where a quantity is required →
//!   [`PhysicsError::InvalidArgumentKind`]
//! - a quantity with the wrong dimension for its role →
//!   [`PhysicsError::DimensionMismatch`]
//!
//! All checks are pure. Aggregate validation walks elements in order and
//! reports the first invalid one; an empty aggregate is not an error (the
//! identity for an empty sum is the dimensionless zero, handled by the
//! laws that aggregate).

use crate::errors::PhysicsError;
use crate::units::dimension::Dimension;
use crate::units::quantity::Quantity;

/// An input to a law: either a dimensioned quantity or a bare number
///
/// Bare numbers are representable on purpose: they are how callers pass
/// the wrong kind of value, and the validator rejects them with an error
/// distinct from a dimension mismatch.
///
/// # Examples
///
/// ```
/// use physics_laws::units::{Argument, si::AMPERE};
///
/// let good: Argument = AMPERE.quantity(3.0).into();
/// let bad: Argument = 100.0.into();
/// assert!(matches!(good, Argument::Quantity(_)));
/// assert!(matches!(bad, Argument::Number(_)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Argument {
    /// A dimensioned quantity
    Quantity(Quantity),
    /// A bare number with no dimension information
    Number(f64),
}

impl From<Quantity> for Argument {
    fn from(quantity: Quantity) -> Self {
        Argument::Quantity(quantity)
    }
}

impl From<f64> for Argument {
    fn from(value: f64) -> Self {
        Argument::Number(value)
    }
}

/// Require that an argument is a quantity at all
///
/// `role` names the symbol the argument was bound to and appears in the
/// error message.
pub fn expect_quantity(argument: Argument, role: &str) -> Result<Quantity, PhysicsError> {
    match argument {
        Argument::Quantity(quantity) => Ok(quantity),
        Argument::Number(_) => Err(PhysicsError::InvalidArgumentKind {
            role: role.to_string(),
        }),
    }
}

/// Require that a quantity carries the expected dimension
pub fn expect_dimension(
    quantity: Quantity,
    expected: Dimension,
    role: &str,
) -> Result<Quantity, PhysicsError> {
    if quantity.dimension().equivalent(expected) {
        Ok(quantity)
    } else {
        Err(PhysicsError::DimensionMismatch {
            role: role.to_string(),
            expected,
            actual: quantity.dimension(),
        })
    }
}

/// Validate an argument's kind and dimension in one step
///
/// The kind check runs first: a bare number is reported as
/// [`PhysicsError::InvalidArgumentKind`] even though its dimension is also
/// unknown.
pub fn validate(
    argument: Argument,
    expected: Dimension,
    role: &str,
) -> Result<Quantity, PhysicsError> {
    let quantity = expect_quantity(argument, role)?;
    expect_dimension(quantity, expected, role)
}

/// Validate every element of an aggregate against one expected dimension
///
/// Elements are checked in order and the first invalid one aborts the whole
/// validation; no partial result escapes. An empty slice validates to an
/// empty vector; the aggregate identity is the caller's concern.
pub fn validate_all(
    arguments: &[Argument],
    expected: Dimension,
    role: &str,
) -> Result<Vec<Quantity>, PhysicsError> {
    arguments
        .iter()
        .map(|argument| validate(*argument, expected, role))
        .collect()
}
