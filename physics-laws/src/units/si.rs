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
//! Process-wide SI dimension and unit registry
//!
//! The registry is built once, on first access, and is read-only for the
//! rest of the process: registration rejects duplicates, lookups are by
//! name, and there is no teardown. The unit constants in this module are
//! the working vocabulary of the law catalog; the registry adds by-name
//! lookup on top for callers that receive unit names as data.

use crate::errors::RegistryError;
use crate::units::dimension::{
    Dimension, ACCELERATION, AMOUNT_OF_SUBSTANCE, CURRENT, DIMENSIONLESS, ENERGY, FORCE,
    FREQUENCY, LENGTH, LUMINOUS_INTENSITY, MASS, MOMENTUM, POWER, SPECIFIC_HEAT_CAPACITY,
    TEMPERATURE, TIME, VELOCITY,
};
use crate::units::unit::Unit;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Meter, the SI base unit of length
pub const METER: Unit = Unit::new("meter", "m", LENGTH, 1.0);

/// Kilometer: 1000 meters
pub const KILOMETER: Unit = Unit::new("kilometer", "km", LENGTH, 1000.0);

/// Kilogram, the SI base unit of mass
pub const KILOGRAM: Unit = Unit::new("kilogram", "kg", MASS, 1.0);

/// Gram: 1/1000 kilogram
pub const GRAM: Unit = Unit::new("gram", "g", MASS, 1e-3);

/// Second, the SI base unit of time
pub const SECOND: Unit = Unit::new("second", "s", TIME, 1.0);

/// Minute: 60 seconds
pub const MINUTE: Unit = Unit::new("minute", "min", TIME, 60.0);

/// Ampere, the SI base unit of electric current
pub const AMPERE: Unit = Unit::new("ampere", "A", CURRENT, 1.0);

/// Kelvin, the SI base unit of thermodynamic temperature
pub const KELVIN: Unit = Unit::new("kelvin", "K", TEMPERATURE, 1.0);

/// Mole, the SI base unit of amount of substance
pub const MOLE: Unit = Unit::new("mole", "mol", AMOUNT_OF_SUBSTANCE, 1.0);

/// Candela, the SI base unit of luminous intensity
pub const CANDELA: Unit = Unit::new("candela", "cd", LUMINOUS_INTENSITY, 1.0);

/// Radian: the SI unit of plane angle, dimensionless by construction
pub const RADIAN: Unit = Unit::new("radian", "rad", DIMENSIONLESS, 1.0);

/// Joule: the SI unit of energy (kg·m²/s²)
pub const JOULE: Unit = Unit::new("joule", "J", ENERGY, 1.0);

/// Newton: the SI unit of force (kg·m/s²)
pub const NEWTON: Unit = Unit::new("newton", "N", FORCE, 1.0);

/// Watt: the SI unit of power (kg·m²/s³)
pub const WATT: Unit = Unit::new("watt", "W", POWER, 1.0);

/// Meter per second: the SI unit of velocity
pub const METER_PER_SECOND: Unit = Unit::new("meter per second", "m/s", VELOCITY, 1.0);

/// Meter per second squared: the SI unit of acceleration
pub const METER_PER_SECOND_SQUARED: Unit =
    Unit::new("meter per second squared", "m/s^2", ACCELERATION, 1.0);

/// Kilogram meter per second: the SI unit of momentum
pub const KILOGRAM_METER_PER_SECOND: Unit =
    Unit::new("kilogram meter per second", "kg*m/s", MOMENTUM, 1.0);

/// Radian per second: the SI unit of circular frequency
pub const RADIAN_PER_SECOND: Unit = Unit::new("radian per second", "rad/s", FREQUENCY, 1.0);

/// Joule per kilogram kelvin: the SI unit of specific heat capacity
pub const JOULE_PER_KILOGRAM_KELVIN: Unit = Unit::new(
    "joule per kilogram kelvin",
    "J/(kg*K)",
    SPECIFIC_HEAT_CAPACITY,
    1.0,
);

/// Name-indexed registry of dimensions and units
///
/// Lookups return copies (both types are `Copy`); registration rejects
/// duplicates and invalid scale factors.
pub struct UnitRegistry {
    units: HashMap<&'static str, Unit>,
    dimensions: HashMap<&'static str, Dimension>,
}

impl UnitRegistry {
    fn new() -> Self {
        UnitRegistry {
            units: HashMap::new(),
            dimensions: HashMap::new(),
        }
    }

    /// Register a unit by its name
    ///
    /// # Panics
    ///
    /// Panics if the unit's scale factor is non-finite or zero; a broken
    /// scale is a programming error in the catalog, not runtime data.
    pub fn register_unit(&mut self, unit: Unit) -> Result<(), RegistryError> {
        assert!(unit.is_valid(), "Unit scale must be finite and non-zero");
        if self.units.contains_key(unit.name()) {
            return Err(RegistryError::DuplicateUnit(unit.name().to_string()));
        }
        self.units.insert(unit.name(), unit);
        Ok(())
    }

    /// Register a dimension under a name
    pub fn register_dimension(
        &mut self,
        name: &'static str,
        dimension: Dimension,
    ) -> Result<(), RegistryError> {
        if self.dimensions.contains_key(name) {
            return Err(RegistryError::DuplicateDimension(name.to_string()));
        }
        self.dimensions.insert(name, dimension);
        Ok(())
    }

    /// Look up a unit by name
    pub fn unit(&self, name: &str) -> Result<Unit, RegistryError> {
        self.units
            .get(name)
            .copied()
            .ok_or_else(|| RegistryError::UnknownUnit(name.to_string()))
    }

    /// Look up a dimension by name
    pub fn dimension(&self, name: &str) -> Result<Dimension, RegistryError> {
        self.dimensions
            .get(name)
            .copied()
            .ok_or_else(|| RegistryError::UnknownDimension(name.to_string()))
    }

    /// Get the number of registered units
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    /// Get the number of registered dimensions
    pub fn dimension_count(&self) -> usize {
        self.dimensions.len()
    }

    /// Get the registered unit names, sorted
    pub fn unit_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.units.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

/// Get the process-wide SI registry
///
/// Built on first access, read-only afterwards. All unit constants in this
/// module are registered, plus the named base and derived dimensions.
pub fn si() -> &'static UnitRegistry {
    static REGISTRY: OnceLock<UnitRegistry> = OnceLock::new();
    REGISTRY.get_or_init(|| {
        let mut registry = UnitRegistry::new();

        let units = [
            METER,
            KILOMETER,
            KILOGRAM,
            GRAM,
            SECOND,
            MINUTE,
            AMPERE,
            KELVIN,
            MOLE,
            CANDELA,
            RADIAN,
            JOULE,
            NEWTON,
            WATT,
            METER_PER_SECOND,
            METER_PER_SECOND_SQUARED,
            KILOGRAM_METER_PER_SECOND,
            RADIAN_PER_SECOND,
            JOULE_PER_KILOGRAM_KELVIN,
        ];
        for unit in units {
            // The built-in table has no duplicates; a failure here is a
            // catalog bug caught by the registry tests.
            let _ = registry.register_unit(unit);
        }

        let dimensions: [(&'static str, Dimension); 15] = [
            ("dimensionless", DIMENSIONLESS),
            ("length", LENGTH),
            ("mass", MASS),
            ("time", TIME),
            ("current", CURRENT),
            ("temperature", TEMPERATURE),
            ("amount of substance", AMOUNT_OF_SUBSTANCE),
            ("luminous intensity", LUMINOUS_INTENSITY),
            ("velocity", VELOCITY),
            ("acceleration", ACCELERATION),
            ("force", FORCE),
            ("energy", ENERGY),
            ("power", POWER),
            ("momentum", MOMENTUM),
            ("frequency", FREQUENCY),
        ];
        for (name, dimension) in dimensions {
            let _ = registry.register_dimension(name, dimension);
        }

        log::debug!(
            "SI registry initialized with {} units and {} dimensions",
            registry.unit_count(),
            registry.dimension_count()
        );

        registry
    })
}
