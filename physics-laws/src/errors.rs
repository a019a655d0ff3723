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
//! Error types for quantity validation, law evaluation, and registries
//!
//! Two error kinds are user-facing and must stay distinguishable by variant:
//! a recognized quantity carrying the wrong dimension
//! ([`PhysicsError::DimensionMismatch`]) and an argument that is not a
//! quantity at all ([`PhysicsError::InvalidArgumentKind`]). Callers match on
//! the variant; no error is ever recovered from or silently coerced.

use crate::units::Dimension;
use thiserror::Error;

/// Errors produced while validating inputs, evaluating a law, or converting
/// a result into a target unit.
///
/// Every variant is immediate, synchronous, and terminal for the call that
/// produced it.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PhysicsError {
    /// The input is a recognized quantity but carries the wrong dimension
    /// for its role. Never auto-converted.
    #[error("dimension mismatch for '{role}': expected {expected}, got {actual}")]
    DimensionMismatch {
        /// Name of the symbol or target the quantity was bound to
        role: String,
        /// Dimension the role requires
        expected: Dimension,
        /// Dimension the quantity actually carries
        actual: Dimension,
    },

    /// The input is not a quantity at all (a bare number where a dimensioned
    /// value is required). Distinct from a dimension mismatch so callers can
    /// tell the two apart.
    #[error("'{role}' must be a dimensioned quantity, not a bare number")]
    InvalidArgumentKind {
        /// Name of the symbol the argument was bound to
        role: String,
    },

    /// A law was evaluated without a binding for one of its declared symbols.
    #[error("no binding supplied for symbol '{symbol}'")]
    MissingBinding {
        /// The unbound symbol
        symbol: String,
    },

    /// A square root was taken of a dimension with an odd exponent, which
    /// has no representation in integer dimensional algebra.
    #[error("cannot take the square root of dimension {0}")]
    FractionalDimension(Dimension),
}

/// Errors from the process-wide registries (units, dimensions, laws).
///
/// Registration happens once at startup; duplicates indicate a programming
/// error in the catalog but are surfaced as errors so the registries stay
/// usable from tests.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RegistryError {
    /// A unit with this name is already registered.
    #[error("unit '{0}' is already registered")]
    DuplicateUnit(String),

    /// A dimension with this name is already registered.
    #[error("dimension '{0}' is already registered")]
    DuplicateDimension(String),

    /// A law with this name is already registered.
    #[error("law '{0}' is already registered")]
    DuplicateLaw(String),

    /// No unit with this name has been registered.
    #[error("no unit named '{0}' is registered")]
    UnknownUnit(String),

    /// No dimension with this name has been registered.
    #[error("no dimension named '{0}' is registered")]
    UnknownDimension(String),

    /// No law with this name has been registered.
    #[error("no law named '{0}' is registered")]
    UnknownLaw(String),
}
