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
//! Oscillation period from circular frequency: **T = 2π/ω**

use crate::algebra::expr::{num, sym, Equation, Symbol};
use crate::errors::PhysicsError;
use crate::laws::{Law, SymbolSpec};
use crate::units::dimension::FREQUENCY;
use crate::units::quantity::Quantity;
use crate::units::validator::Argument;
use std::f64::consts::PI;
use std::sync::OnceLock;

/// Circular frequency of the oscillation (rad/s)
pub const CIRCULAR_FREQUENCY: Symbol = "circular_frequency";

/// Period of one full oscillation (the output)
pub const PERIOD: Symbol = "period";

/// Get the law definition
pub fn law() -> &'static Law {
    static LAW: OnceLock<Law> = OnceLock::new();
    LAW.get_or_init(|| {
        Law::new(
            "period_from_circular_frequency",
            Equation::new(sym(PERIOD), num(2.0) * num(PI) / sym(CIRCULAR_FREQUENCY)),
            PERIOD,
            vec![SymbolSpec::new(CIRCULAR_FREQUENCY, FREQUENCY)],
            vec![],
        )
    })
}

/// Calculate the period for a circular frequency
pub fn calculate_period(circular_frequency: Argument) -> Result<Quantity, PhysicsError> {
    law().evaluate(&[(CIRCULAR_FREQUENCY, circular_frequency)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::convert::convert_to;
    use crate::units::dimension::TIME;
    use crate::units::si::{METER, RADIAN_PER_SECOND, SECOND};
    use approx::assert_relative_eq;

    #[test]
    fn test_basic_period() {
        let result = calculate_period(RADIAN_PER_SECOND.quantity(6.28).into()).unwrap();
        assert!(result.dimension().equivalent(TIME));
        let seconds = convert_to(result, SECOND).unwrap();
        assert_relative_eq!(seconds, 1.0, max_relative = 0.01);
    }

    #[test]
    fn test_bad_frequency() {
        let err = calculate_period(METER.quantity(1.0).into()).unwrap_err();
        assert!(matches!(err, PhysicsError::DimensionMismatch { .. }));

        let err = calculate_period(100.0.into()).unwrap_err();
        assert!(matches!(err, PhysicsError::InvalidArgumentKind { .. }));
    }
}
