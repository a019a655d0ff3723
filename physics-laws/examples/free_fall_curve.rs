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
//! Free-fall acceleration as a function of height
//!
//! Evaluates the free-fall law across a range of altitudes above the
//! Earth's surface and prints the curve as a table.

use physics_laws::laws::gravity::free_fall_acceleration_from_height as free_fall;
use physics_laws::units::convert_to_significant;
use physics_laws::units::si::{KILOGRAM, METER, METER_PER_SECOND_SQUARED};

const EARTH_MASS: f64 = 5.976e24;
const EARTH_RADIUS: f64 = 6.371e6;

fn main() {
    env_logger::init();

    println!("Free fall acceleration(height)");
    println!("==============================\n");
    println!("Formula is:\n  {}\n", free_fall::law().equation());
    println!("Solved for {}:\n  {}\n", free_fall::law().output(), free_fall::law().solved());

    println!("{:>10}  {:>12}", "height, m", "g, m/s^2");
    for step in 0..=10 {
        let height = step as f64 * 1000.0;
        let acceleration = free_fall::calculate_acceleration(
            METER.quantity(height).into(),
            KILOGRAM.quantity(EARTH_MASS).into(),
            METER.quantity(EARTH_RADIUS).into(),
        )
        .expect("all inputs carry the dimensions the law requires");

        let value = convert_to_significant(acceleration, METER_PER_SECOND_SQUARED, 6)
            .expect("result is an acceleration");
        println!("{:>10}  {:>12}", height, value);
    }
}
