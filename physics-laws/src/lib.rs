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
//! # Physics Laws
//!
//! A catalog of physics laws and definitions (mechanics, electricity,
//! gravity, dynamics) expressed as symbolic equations over dimensioned
//! quantities, with unit-dimension checking on every input.
//!
//! ## Features
//!
//! - **Dimensional Analysis**: dimensions as exponent vectors, so
//!   equivalence (joule/second ≡ watt) is structural, not string-based
//! - **Validated Substitution**: every law input is checked for kind and
//!   dimension before evaluation, with two distinguishable error variants
//! - **Declarative Laws**: each law is an equation plus role-tagged
//!   symbols; the closed form is solved once at definition time and one
//!   generic evaluator serves the whole catalog
//! - **Explicit Conversion**: results stay dimensioned until the caller
//!   converts them into a chosen unit, with opt-in significant-digit
//!   rounding
//!
//! ## Example
//!
//! ```rust
//! use physics_laws::laws::gravity::free_fall_acceleration_from_height as free_fall;
//! use physics_laws::units::convert_to;
//! use physics_laws::units::si::{KILOGRAM, METER, METER_PER_SECOND_SQUARED};
//!
//! let g = free_fall::calculate_acceleration(
//!     METER.quantity(0.0).into(),
//!     KILOGRAM.quantity(5.976e24).into(),
//!     METER.quantity(6.371e6).into(),
//! ).unwrap();
//!
//! let value = convert_to(g, METER_PER_SECOND_SQUARED).unwrap();
//! assert!((value - 9.823).abs() < 0.01);
//! ```

#![warn(missing_docs)]

/// Minimal symbolic expression layer
pub mod algebra;

/// Error types
pub mod errors;

/// The law catalog and its generic evaluator
pub mod laws;

/// Units, dimensions, quantities, validation, and conversion
pub mod units;

pub use errors::{PhysicsError, RegistryError};
pub use laws::{catalog, Law, LawRegistry, SymbolSpec};
pub use units::{convert_to, convert_to_significant, Argument, Dimension, Quantity, Unit};
