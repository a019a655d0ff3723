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
//! Integration tests checking every law against known numeric results

use approx::assert_relative_eq;
use physics_laws::algebra::expr::{num, sym};
use physics_laws::laws::definitions::amount_energy_from_mass_and_temperature as amount_energy;
use physics_laws::laws::definitions::circulation_is_integral_along_curve as circulation;
use physics_laws::laws::definitions::period_from_circular_frequency as period;
use physics_laws::laws::dynamics::acceleration_from_force_and_mass as newton_second_law;
use physics_laws::laws::dynamics::kinetic_energy_from_mass_and_velocity as kinetic_energy;
use physics_laws::laws::dynamics::momentum_after_collision_equals_to_momentum_before as momentum_law;
use physics_laws::laws::electricity::sum_of_all_currents_through_an_electrical_node_is_zero as kirchhoff_law;
use physics_laws::laws::gravity::free_fall_acceleration_from_height as free_fall;
use physics_laws::laws::gravity::gravity_force_from_radial_distance as gravity_force;
use physics_laws::units::convert_to;
use physics_laws::units::dimension::{ACCELERATION, CURRENT, ENERGY, FORCE, MOMENTUM, TIME};
use physics_laws::units::si::{
    AMPERE, JOULE, JOULE_PER_KILOGRAM_KELVIN, KELVIN, KILOGRAM, KILOGRAM_METER_PER_SECOND, METER,
    METER_PER_SECOND, METER_PER_SECOND_SQUARED, NEWTON, RADIAN_PER_SECOND, SECOND,
};
use physics_laws::Argument;
use std::f64::consts::PI;

#[test]
fn test_heating_half_a_kilogram_of_water() {
    // How much energy does it take to heat 0.5 kg of water by 100 K?
    // Specific heat capacity of water is 4200 J/(kg*K), losses ignored.
    let result = amount_energy::calculate_amount_energy(
        JOULE_PER_KILOGRAM_KELVIN.quantity(4200.0).into(),
        KILOGRAM.quantity(0.5).into(),
        KELVIN.quantity(373.0).into(),
        KELVIN.quantity(273.0).into(),
    )
    .unwrap();

    assert!(result.dimension().equivalent(ENERGY));
    assert_relative_eq!(
        convert_to(result, JOULE).unwrap(),
        210000.0,
        max_relative = 0.0005
    );
}

#[test]
fn test_free_fall_acceleration_at_earth_surface() {
    // G - universal gravity constant  6.672e-11 N*m^2/kg^2
    // M - Earth mass constant         5.976e+24 kg
    // R - Earth radius constant       6.371e+6 m
    let result = free_fall::calculate_acceleration(
        METER.quantity(0.0).into(),
        KILOGRAM.quantity(5.976e24).into(),
        METER.quantity(6.371e6).into(),
    )
    .unwrap();

    assert!(result.dimension().equivalent(ACCELERATION));
    assert_relative_eq!(
        convert_to(result, METER_PER_SECOND_SQUARED).unwrap(),
        9.82316,
        max_relative = 0.005
    );
}

#[test]
fn test_node_current_balance() {
    let result = kirchhoff_law::calculate_current(AMPERE.quantity(3.0).into()).unwrap();
    assert!(result.dimension().equivalent(CURRENT));
    assert_relative_eq!(convert_to(result, AMPERE).unwrap(), -3.0, max_relative = 0.01);

    let currents: Vec<Argument> = vec![
        AMPERE.quantity(3.0).into(),
        AMPERE.quantity(-5.0).into(),
    ];
    let result = kirchhoff_law::calculate_current_from_array(&currents).unwrap();
    assert!(result.dimension().equivalent(CURRENT));
    assert_relative_eq!(convert_to(result, AMPERE).unwrap(), 2.0, max_relative = 0.01);
}

#[test]
fn test_node_with_no_currents_balances_at_exactly_zero() {
    let result = kirchhoff_law::calculate_current_from_array(&[]).unwrap();
    assert!(result.dimension().is_dimensionless());
    assert_eq!(result.magnitude(), 0.0);
}

#[test]
fn test_momentum_is_conserved() {
    let result = momentum_law::calculate_momentum_after(
        KILOGRAM_METER_PER_SECOND.quantity(5.0).into(),
    )
    .unwrap();

    assert!(result.dimension().equivalent(MOMENTUM));
    assert_relative_eq!(
        convert_to(result, KILOGRAM_METER_PER_SECOND).unwrap(),
        5.0,
        max_relative = 0.01
    );
}

#[test]
fn test_period_of_a_one_hertz_oscillation() {
    let result = period::calculate_period(RADIAN_PER_SECOND.quantity(6.28).into()).unwrap();
    assert!(result.dimension().equivalent(TIME));
    assert_relative_eq!(convert_to(result, SECOND).unwrap(), 1.0, max_relative = 0.01);
}

#[test]
fn test_circulation_of_rotational_field_along_circle() {
    // Field (y, -x) along the circle x^2 + y^2 = 9, one full turn.
    let field = [
        sym(circulation::COORD_Y),
        -sym(circulation::COORD_X),
        num(0.0),
    ];
    let curve = [
        num(3.0) * sym(circulation::PARAMETER).cos(),
        num(3.0) * sym(circulation::PARAMETER).sin(),
        num(0.0),
    ];
    let result = circulation::calculate_circulation(&field, &curve, 0.0, 2.0 * PI).unwrap();
    assert_relative_eq!(result, -18.0 * PI, max_relative = 0.001);
}

#[test]
fn test_acceleration_from_force_and_mass() {
    let result = newton_second_law::calculate_acceleration(
        NEWTON.quantity(3.0).into(),
        KILOGRAM.quantity(1.5).into(),
    )
    .unwrap();
    assert!(result.dimension().equivalent(ACCELERATION));
    assert_relative_eq!(
        convert_to(result, METER_PER_SECOND_SQUARED).unwrap(),
        2.0,
        max_relative = 1e-12
    );
}

#[test]
fn test_kinetic_energy_of_a_moving_body() {
    let result = kinetic_energy::calculate_kinetic_energy(
        KILOGRAM.quantity(2.0).into(),
        METER_PER_SECOND.quantity(3.0).into(),
    )
    .unwrap();
    assert!(result.dimension().equivalent(ENERGY));
    assert_relative_eq!(convert_to(result, JOULE).unwrap(), 9.0, max_relative = 1e-12);
}

#[test]
fn test_gravitational_attraction_between_two_masses() {
    let result = gravity_force::calculate_force(
        KILOGRAM.quantity(1000.0).into(),
        KILOGRAM.quantity(1000.0).into(),
        METER.quantity(1.0).into(),
    )
    .unwrap();
    assert!(result.dimension().equivalent(FORCE));
    assert_relative_eq!(
        convert_to(result, NEWTON).unwrap(),
        6.672e-5,
        max_relative = 1e-6
    );
}

#[test]
fn test_every_law_is_reachable_through_the_catalog() {
    let registry = physics_laws::catalog();
    let law = registry.get("acceleration_from_force_and_mass").unwrap();
    let result = law
        .evaluate(&[
            ("force", NEWTON.quantity(3.0).into()),
            ("mass", KILOGRAM.quantity(1.5).into()),
        ])
        .unwrap();
    assert_relative_eq!(
        convert_to(result, METER_PER_SECOND_SQUARED).unwrap(),
        2.0,
        max_relative = 1e-12
    );
}
