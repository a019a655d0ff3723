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
//! Units, dimensions, quantities, validation, and conversion
//!
//! This is the shared infrastructure every law delegates to: dimensions as
//! exponent vectors, units as named scale factors, quantities normalized
//! into base-unit terms at construction, a validator with two distinct
//! error paths, and a converter that turns a dimensioned result back into
//! a plain number.

pub mod convert;
pub mod dimension;
pub mod quantity;
pub mod si;
pub mod unit;
pub mod validator;

pub use convert::{convert_to, convert_to_significant};
pub use dimension::Dimension;
pub use quantity::Quantity;
pub use unit::Unit;
pub use validator::{expect_dimension, expect_quantity, validate, validate_all, Argument};
