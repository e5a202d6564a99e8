/*
MIT License with FEFF10 Attribution

Copyright (c) 2025 Ameyanagi

Based on or developed using Distribution: FEFF10.0
Copyright (c) 2020 FEFF Project, University of Washington and SLAC National Accelerator Laboratory.
All rights reserved.
*/

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use madelung_rs::input::{parse_structure, ParserConfig};
use madelung_rs::potential::{EvaluatorConfig, MadelungEvaluator};

/// Rock-salt supercell of n×n×n ions with alternating charges
fn rock_salt_document(n: usize) -> String {
    let a = 2.82;
    let mut na = Vec::new();
    let mut cl = Vec::new();
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                let row = format!("{} {} {}", i as f64 * a, j as f64 * a, k as f64 * a);
                if (i + j + k) % 2 == 0 {
                    na.push(row);
                } else {
                    cl.push(row);
                }
            }
        }
    }
    let edge = n as f64 * a;
    format!(
        "rock salt {n}x{n}x{n}\n1.0\n{edge} 0 0\n0 {edge} 0\n0 0 {edge}\nNa Cl\n{} {}\nCartesian\n{}\n{}\n",
        na.len(),
        cl.len(),
        na.join("\n"),
        cl.join("\n"),
    )
}

fn madelung_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Madelung");
    let document = rock_salt_document(10);
    let structure = parse_structure(&document, &ParserConfig::default()).unwrap();

    group.bench_function("parse_1000_atoms", |b| {
        b.iter(|| black_box(parse_structure(black_box(&document), &ParserConfig::default())))
    });

    let single = MadelungEvaluator::default();
    group.bench_function("reference_atom_1000_atoms", |b| {
        b.iter(|| black_box(single.evaluate(black_box(&structure), 0)))
    });

    let all = MadelungEvaluator::new(EvaluatorConfig {
        all_atoms: true,
        ..Default::default()
    });
    group.bench_function("all_atoms_1000_atoms", |b| {
        b.iter(|| black_box(all.run(black_box(&structure))))
    });

    group.finish();
}

criterion_group!(benches, madelung_benchmark);
criterion_main!(benches);
