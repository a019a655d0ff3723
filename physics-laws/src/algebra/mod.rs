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
//! Minimal symbolic layer for law equations
//!
//! Expression trees, single-occurrence symbol isolation, differentiation,
//! and numeric quadrature: exactly the capabilities the law catalog
//! consumes, and nothing more.

pub mod calculus;
pub mod expr;
pub mod solve;

pub use calculus::{differentiate, SimpsonRule};
pub use expr::{num, sym, Bindings, DimensionBindings, Equation, Expr, Symbol};
pub use solve::solve_for;
