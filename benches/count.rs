use criterion::{black_box, criterion_group, criterion_main, Criterion};

use chemformula::{count_atoms, parse_formula};

const WATER: &str = "H2O";
const SULFATE: &str = "Al2(SO4)3";
const HEMIHYDRATE: &str = "CaSO4(H2O)0.5";
const STRUCTURAL: &str = "C(NH2)H2C(CH3)HCH3";
const NESTED: &str = "((CH3)2CHC(OH)2)3(C6H5(NO2)2)2";

fn bench_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_atoms");

    group.bench_function("water", |b| {
        b.iter(|| black_box(count_atoms(black_box(WATER))))
    });
    group.bench_function("sulfate", |b| {
        b.iter(|| black_box(count_atoms(black_box(SULFATE))))
    });
    group.bench_function("hemihydrate", |b| {
        b.iter(|| black_box(count_atoms(black_box(HEMIHYDRATE))))
    });
    group.bench_function("structural", |b| {
        b.iter(|| black_box(count_atoms(black_box(STRUCTURAL))))
    });
    group.bench_function("nested", |b| {
        b.iter(|| black_box(count_atoms(black_box(NESTED))))
    });

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_formula");

    group.bench_function("water", |b| {
        b.iter(|| black_box(parse_formula(black_box(WATER)).unwrap()))
    });
    group.bench_function("sulfate", |b| {
        b.iter(|| black_box(parse_formula(black_box(SULFATE)).unwrap()))
    });
    group.bench_function("nested", |b| {
        b.iter(|| black_box(parse_formula(black_box(NESTED)).unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_count, bench_parse);
criterion_main!(benches);
