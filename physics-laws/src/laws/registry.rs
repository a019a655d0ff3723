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
//! Name-indexed catalog of the built-in laws
//!
//! The registry is the declarative face of the catalog: every law module
//! contributes its definition once, lookups are by name, and duplicates
//! are rejected. Like the SI registry it is built on first access and
//! read-only for the rest of the process.

use crate::errors::RegistryError;
use crate::laws::Law;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Registry of law definitions indexed by name
pub struct LawRegistry {
    laws: HashMap<&'static str, &'static Law>,
}

impl LawRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        LawRegistry {
            laws: HashMap::new(),
        }
    }

    /// Register a law
    ///
    /// Returns an error if a law with the same name is already present.
    pub fn register(&mut self, law: &'static Law) -> Result<(), RegistryError> {
        if self.laws.contains_key(law.name()) {
            return Err(RegistryError::DuplicateLaw(law.name().to_string()));
        }
        self.laws.insert(law.name(), law);
        Ok(())
    }

    /// Look up a law by name
    pub fn get(&self, name: &str) -> Result<&'static Law, RegistryError> {
        self.laws
            .get(name)
            .copied()
            .ok_or_else(|| RegistryError::UnknownLaw(name.to_string()))
    }

    /// Get the number of registered laws
    pub fn law_count(&self) -> usize {
        self.laws.len()
    }

    /// Get the registered law names, sorted
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.laws.keys().copied().collect();
        names.sort_unstable();
        names
    }
}

impl Default for LawRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the process-wide catalog of built-in laws
///
/// Built on first access; the circulation definition is not listed because
/// it evaluates a line integral over expression-valued fields rather than
/// a scalar closed form.
pub fn catalog() -> &'static LawRegistry {
    static CATALOG: OnceLock<LawRegistry> = OnceLock::new();
    CATALOG.get_or_init(|| {
        let mut registry = LawRegistry::new();

        let laws = [
            crate::laws::definitions::amount_energy_from_mass_and_temperature::law(),
            crate::laws::definitions::period_from_circular_frequency::law(),
            crate::laws::dynamics::momentum_after_collision_equals_to_momentum_before::law(),
            crate::laws::dynamics::acceleration_from_force_and_mass::law(),
            crate::laws::dynamics::kinetic_energy_from_mass_and_velocity::law(),
            crate::laws::electricity::sum_of_all_currents_through_an_electrical_node_is_zero::law(),
            crate::laws::gravity::free_fall_acceleration_from_height::law(),
            crate::laws::gravity::gravity_force_from_radial_distance::law(),
        ];
        for law in laws {
            // The built-in catalog has unique names; a failure here is a
            // catalog bug caught by the registry tests.
            let _ = registry.register(law);
        }

        log::debug!("law catalog initialized with {} laws", registry.law_count());

        registry
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_contains_every_builtin_law() {
        let registry = catalog();
        assert_eq!(registry.law_count(), 8);

        let names = registry.names();
        assert!(names.contains(&"amount_energy_from_mass_and_temperature"));
        assert!(names.contains(&"period_from_circular_frequency"));
        assert!(names.contains(&"momentum_after_collision_equals_to_momentum_before"));
        assert!(names.contains(&"acceleration_from_force_and_mass"));
        assert!(names.contains(&"kinetic_energy_from_mass_and_velocity"));
        assert!(names.contains(&"sum_of_all_currents_through_an_electrical_node_is_zero"));
        assert!(names.contains(&"free_fall_acceleration_from_height"));
        assert!(names.contains(&"gravity_force_from_radial_distance"));
    }

    #[test]
    fn test_lookup_by_name() {
        let registry = catalog();
        let law = registry.get("free_fall_acceleration_from_height").unwrap();
        assert_eq!(law.name(), "free_fall_acceleration_from_height");
    }

    #[test]
    fn test_unknown_law_is_an_error() {
        let registry = catalog();
        let result = registry.get("perpetual_motion");
        assert!(matches!(result, Err(RegistryError::UnknownLaw(name)) if name == "perpetual_motion"));
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let mut registry = LawRegistry::new();
        let law = catalog().get("period_from_circular_frequency").unwrap();
        registry.register(law).unwrap();
        assert_eq!(
            registry.register(law),
            Err(RegistryError::DuplicateLaw(
                "period_from_circular_frequency".to_string()
            ))
        );
    }

    #[test]
    fn test_names_are_sorted() {
        let names = catalog().names();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }
}
