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
//! Physical dimensions as exponent vectors over the SI base dimensions
//!
//! A dimension is the category that distinguishes a meter from a second,
//! independent of unit choice. Dimensions are represented as integer
//! exponent vectors over the seven SI base dimensions, so dimensional
//! algebra is exponent arithmetic and equivalence is plain equality:
//! joule/second and watt reduce to the same exponents and compare equal
//! by construction, with symmetry and transitivity following structurally
//! rather than from any string matching.
//!
//! # Example
//!
//! ```
//! use physics_laws::units::dimension::{ENERGY, MASS, LENGTH, TIME};
//!
//! let derived = MASS * LENGTH.powi(2) / TIME.powi(2);
//! assert!(derived.equivalent(ENERGY));
//! ```

use std::fmt;
use std::ops::{Div, Mul};

/// Physical dimension as an exponent vector over the SI base dimensions
///
/// Immutable value type. All dimensions used by the law catalog are built
/// at process start and never mutated; arithmetic produces new values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimension {
    length: i8,
    mass: i8,
    time: i8,
    current: i8,
    temperature: i8,
    amount: i8,
    luminosity: i8,
}

/// The dimensionless identity (all exponents zero)
pub const DIMENSIONLESS: Dimension = Dimension::new(0, 0, 0, 0, 0, 0, 0);

/// Length (base dimension, meter)
pub const LENGTH: Dimension = Dimension::new(1, 0, 0, 0, 0, 0, 0);

/// Mass (base dimension, kilogram)
pub const MASS: Dimension = Dimension::new(0, 1, 0, 0, 0, 0, 0);

/// Time (base dimension, second)
pub const TIME: Dimension = Dimension::new(0, 0, 1, 0, 0, 0, 0);

/// Electric current (base dimension, ampere)
pub const CURRENT: Dimension = Dimension::new(0, 0, 0, 1, 0, 0, 0);

/// Thermodynamic temperature (base dimension, kelvin)
pub const TEMPERATURE: Dimension = Dimension::new(0, 0, 0, 0, 1, 0, 0);

/// Amount of substance (base dimension, mole)
pub const AMOUNT_OF_SUBSTANCE: Dimension = Dimension::new(0, 0, 0, 0, 0, 1, 0);

/// Luminous intensity (base dimension, candela)
pub const LUMINOUS_INTENSITY: Dimension = Dimension::new(0, 0, 0, 0, 0, 0, 1);

/// Velocity: length / time
pub const VELOCITY: Dimension = Dimension::new(1, 0, -1, 0, 0, 0, 0);

/// Acceleration: length / time²
pub const ACCELERATION: Dimension = Dimension::new(1, 0, -2, 0, 0, 0, 0);

/// Force: mass · length / time²
pub const FORCE: Dimension = Dimension::new(1, 1, -2, 0, 0, 0, 0);

/// Energy: mass · length² / time²
pub const ENERGY: Dimension = Dimension::new(2, 1, -2, 0, 0, 0, 0);

/// Power: mass · length² / time³
pub const POWER: Dimension = Dimension::new(2, 1, -3, 0, 0, 0, 0);

/// Momentum: mass · length / time
pub const MOMENTUM: Dimension = Dimension::new(1, 1, -1, 0, 0, 0, 0);

/// Frequency: 1 / time (angle is dimensionless in SI, so this covers
/// circular frequency in radians per second as well)
pub const FREQUENCY: Dimension = Dimension::new(0, 0, -1, 0, 0, 0, 0);

/// Specific heat capacity: energy / (mass · temperature)
pub const SPECIFIC_HEAT_CAPACITY: Dimension = Dimension::new(2, 0, -2, 0, -1, 0, 0);

impl Dimension {
    /// Create a dimension from base-dimension exponents
    ///
    /// Exponent order: length, mass, time, current, temperature,
    /// amount of substance, luminous intensity.
    pub const fn new(
        length: i8,
        mass: i8,
        time: i8,
        current: i8,
        temperature: i8,
        amount: i8,
        luminosity: i8,
    ) -> Self {
        Dimension {
            length,
            mass,
            time,
            current,
            temperature,
            amount,
            luminosity,
        }
    }

    /// Check whether two dimensions are dimensionally equivalent
    ///
    /// Equivalence is equality of exponent vectors, so it is reflexive,
    /// symmetric, and transitive without further machinery.
    pub fn equivalent(self, other: Dimension) -> bool {
        self == other
    }

    /// Check whether this is the dimensionless identity
    pub fn is_dimensionless(self) -> bool {
        self == DIMENSIONLESS
    }

    /// Raise the dimension to an integer power
    pub fn powi(self, exponent: i32) -> Dimension {
        let n = exponent as i8;
        Dimension::new(
            self.length * n,
            self.mass * n,
            self.time * n,
            self.current * n,
            self.temperature * n,
            self.amount * n,
            self.luminosity * n,
        )
    }

    /// The reciprocal dimension (all exponents negated)
    pub fn recip(self) -> Dimension {
        self.powi(-1)
    }

    /// Halve all exponents, if they are all even
    ///
    /// Returns `None` when any exponent is odd: the result would need
    /// fractional exponents, which this representation does not carry.
    pub fn sqrt(self) -> Option<Dimension> {
        let exps = [
            self.length,
            self.mass,
            self.time,
            self.current,
            self.temperature,
            self.amount,
            self.luminosity,
        ];
        if exps.iter().any(|e| e % 2 != 0) {
            return None;
        }
        Some(Dimension::new(
            self.length / 2,
            self.mass / 2,
            self.time / 2,
            self.current / 2,
            self.temperature / 2,
            self.amount / 2,
            self.luminosity / 2,
        ))
    }
}

impl Mul for Dimension {
    type Output = Dimension;

    fn mul(self, rhs: Dimension) -> Dimension {
        Dimension::new(
            self.length + rhs.length,
            self.mass + rhs.mass,
            self.time + rhs.time,
            self.current + rhs.current,
            self.temperature + rhs.temperature,
            self.amount + rhs.amount,
            self.luminosity + rhs.luminosity,
        )
    }
}

impl Div for Dimension {
    type Output = Dimension;

    fn div(self, rhs: Dimension) -> Dimension {
        Dimension::new(
            self.length - rhs.length,
            self.mass - rhs.mass,
            self.time - rhs.time,
            self.current - rhs.current,
            self.temperature - rhs.temperature,
            self.amount - rhs.amount,
            self.luminosity - rhs.luminosity,
        )
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = [
            ("m", self.length),
            ("kg", self.mass),
            ("s", self.time),
            ("A", self.current),
            ("K", self.temperature),
            ("mol", self.amount),
            ("cd", self.luminosity),
        ]
        .iter()
        .filter(|(_, exp)| *exp != 0)
        .map(|(symbol, exp)| {
            if *exp == 1 {
                symbol.to_string()
            } else {
                format!("{}^{}", symbol, exp)
            }
        })
        .collect();

        if parts.is_empty() {
            write!(f, "1")
        } else {
            write!(f, "{}", parts.join("*"))
        }
    }
}
