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
//! Basic example walking through the law catalog
//!
//! This example shows how quantities are built from units, fed to a law,
//! and converted back into plain numbers, and what happens when an input
//! has the wrong dimension.

use physics_laws::laws::definitions::amount_energy_from_mass_and_temperature as amount_energy;
use physics_laws::laws::electricity::sum_of_all_currents_through_an_electrical_node_is_zero as kirchhoff_law;
use physics_laws::units::convert_to_significant;
use physics_laws::units::si::{
    AMPERE, JOULE, JOULE_PER_KILOGRAM_KELVIN, KELVIN, KILOGRAM, METER,
};
use physics_laws::Argument;

fn main() {
    env_logger::init();

    println!("Physics Laws - Quickstart");
    println!("=========================\n");

    // Heating half a kilogram of water by 100 kelvin.
    let energy = amount_energy::calculate_amount_energy(
        JOULE_PER_KILOGRAM_KELVIN.quantity(4200.0).into(),
        KILOGRAM.quantity(0.5).into(),
        KELVIN.quantity(373.0).into(),
        KELVIN.quantity(273.0).into(),
    )
    .expect("inputs carry the dimensions the law requires");

    println!("Law: {}", amount_energy::law().equation());
    println!(
        "Heating 0.5 kg of water from 273 K to 373 K takes {} J\n",
        convert_to_significant(energy, JOULE, 7).expect("result is an energy")
    );

    // Balancing currents through a node.
    let currents: Vec<Argument> = vec![
        AMPERE.quantity(3.0).into(),
        AMPERE.quantity(-5.0).into(),
    ];
    let outgoing = kirchhoff_law::calculate_current_from_array(&currents)
        .expect("all inputs are currents");
    println!("Law: {}", kirchhoff_law::law().equation());
    println!("Currents [3 A, -5 A] balance against {}\n", outgoing);

    // Feeding a length where a current belongs fails loudly.
    let err = kirchhoff_law::calculate_current(METER.quantity(1.0).into())
        .expect_err("a meter is not a current");
    println!("Wrong dimension is rejected: {}", err);

    // ... and a bare number fails with the other error kind.
    let err = kirchhoff_law::calculate_current(100.0.into())
        .expect_err("a bare number is not a quantity");
    println!("Bare number is rejected:    {}", err);
}
