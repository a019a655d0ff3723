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
//! Benchmarks for law evaluation and the units layer
//!
//! These benchmarks measure:
//! - Per-call cost of the generic evaluator (validation + substitution)
//! - Aggregate validation over growing current arrays
//! - The numeric line integral behind the circulation definition

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use physics_laws::algebra::expr::{num, sym};
use physics_laws::laws::definitions::circulation_is_integral_along_curve as circulation;
use physics_laws::laws::electricity::sum_of_all_currents_through_an_electrical_node_is_zero as kirchhoff_law;
use physics_laws::laws::gravity::free_fall_acceleration_from_height as free_fall;
use physics_laws::units::si::{AMPERE, KILOGRAM, METER};
use physics_laws::Argument;
use std::f64::consts::PI;

fn bench_law_evaluation(c: &mut Criterion) {
    c.bench_function("free_fall_acceleration", |b| {
        let height: Argument = METER.quantity(0.0).into();
        let mass: Argument = KILOGRAM.quantity(5.976e24).into();
        let radius: Argument = METER.quantity(6.371e6).into();
        b.iter(|| {
            free_fall::calculate_acceleration(
                black_box(height),
                black_box(mass),
                black_box(radius),
            )
        });
    });
}

fn bench_aggregate_currents(c: &mut Criterion) {
    let mut group = c.benchmark_group("current_sum");
    for count in [2usize, 16, 128, 1024] {
        let currents: Vec<Argument> = (0..count)
            .map(|i| AMPERE.quantity(if i % 2 == 0 { 3.0 } else { -5.0 }).into())
            .collect();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &currents, |b, input| {
            b.iter(|| kirchhoff_law::calculate_current_from_array(black_box(input)));
        });
    }
    group.finish();
}

fn bench_circulation(c: &mut Criterion) {
    c.bench_function("circulation_full_circle", |b| {
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
        b.iter(|| {
            circulation::calculate_circulation(
                black_box(&field),
                black_box(&curve),
                0.0,
                2.0 * PI,
            )
        });
    });
}

criterion_group!(
    benches,
    bench_law_evaluation,
    bench_aggregate_currents,
    bench_circulation
);
criterion_main!(benches);
