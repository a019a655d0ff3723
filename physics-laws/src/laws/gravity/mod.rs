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
//! Laws of Newtonian gravitation

use crate::units::dimension::{Dimension, FORCE, LENGTH, MASS};
use crate::units::quantity::Quantity;

pub mod free_fall_acceleration_from_height;
pub mod gravity_force_from_radial_distance;

/// Universal gravitational constant in SI units (N·m²/kg²)
///
/// The catalog uses the classical 6.672e-11 value its reference results
/// were computed against, not the current CODATA recommendation.
pub const GRAVITATIONAL_CONSTANT: f64 = 6.672e-11;

/// The gravitational constant as a dimensioned quantity
pub fn gravitational_constant() -> Quantity {
    let dimension: Dimension = FORCE * LENGTH.powi(2) / MASS.powi(2);
    Quantity::from_base(GRAVITATIONAL_CONSTANT, dimension)
}
