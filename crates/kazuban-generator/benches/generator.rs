//! Benchmarks for puzzle generation.
//!
//! Measures the complete generation pipeline (solution fill plus clue
//! removal) over three fixed seeds per difficulty, so runs stay
//! reproducible while still covering several backtracking shapes.
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _};

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use kazuban_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};

const SEEDS: [&str; 3] = [
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "00112233445566778899aabbccddeeff00112233445566778899aabbccddeeff",
];

fn bench_generate(c: &mut Criterion) {
    for difficulty in [Difficulty::Easy, Difficulty::Expert] {
        let generator = PuzzleGenerator::new(difficulty);
        for (i, seed) in SEEDS.into_iter().enumerate() {
            let seed = PuzzleSeed::from_str(seed).unwrap();
            c.bench_with_input(
                BenchmarkId::new(format!("generate_{difficulty}"), format!("seed_{i}")),
                &seed,
                |b, seed| {
                    b.iter_batched(
                        || hint::black_box(*seed),
                        |seed| generator.generate_with_seed(seed),
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
