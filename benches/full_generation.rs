//! Performance measurement for complete dungeon generation at varying sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use dungen::{DungeonConfig, generate};
use std::hint::black_box;

/// Measures full generation time as the grid extent grows
fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for extent in &[16, 32, 64] {
        let config = DungeonConfig {
            width: *extent,
            height: *extent,
            seed: 12345,
            ..DungeonConfig::default()
        };

        group.bench_with_input(
            BenchmarkId::from_parameter(extent),
            &config,
            |b, config| {
                b.iter(|| {
                    let Ok(grid) = generate(config) else {
                        return;
                    };
                    black_box(grid.tile_count());
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
