//! Example demonstrating Sudoku puzzle generation.
//!
//! Generates one puzzle and prints its seed, problem, and solution:
//!
//! ```sh
//! cargo run --example generate_puzzle
//! ```
//!
//! Pick a difficulty and a reproducible seed:
//!
//! ```sh
//! cargo run --example generate_puzzle -- --difficulty expert \
//!     --seed 1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef
//! ```
//!
//! Sample many puzzles and keep the one with the fewest filled cells in its
//! emptiest row (a crude spread check across a batch):
//!
//! ```sh
//! cargo run --example generate_puzzle -- --count 1000
//! ```

use clap::Parser;
use kazuban_core::{DigitGrid, Position};
use kazuban_generator::{Difficulty, GeneratedPuzzle, PuzzleGenerator, PuzzleSeed};
use rayon::prelude::*;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Difficulty tier (easy, medium, hard, expert).
    #[arg(long, value_name = "TIER", default_value = "easy")]
    difficulty: Difficulty,

    /// Seed as 64 hex characters; random if omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<PuzzleSeed>,

    /// Number of puzzles to sample; the sparsest-row puzzle is printed.
    #[arg(long, value_name = "COUNT", default_value_t = 1)]
    count: usize,
}

fn main() {
    let args = Args::parse();
    let generator = PuzzleGenerator::new(args.difficulty);

    if let Some(seed) = args.seed {
        print_puzzle(&generator.generate_with_seed(seed));
        return;
    }

    let picked = (0..args.count.max(1))
        .into_par_iter()
        .map(|_| generator.generate())
        .min_by_key(|puzzle| sparsest_row_fill(&puzzle.problem));

    if let Some(puzzle) = picked {
        print_puzzle(&puzzle);
    }
}

fn sparsest_row_fill(problem: &DigitGrid) -> usize {
    (0..9)
        .map(|y| {
            Position::ROWS[y]
                .into_iter()
                .filter(|&pos| problem.get(pos).is_some())
                .count()
        })
        .min()
        .unwrap_or(0)
}

fn print_puzzle(puzzle: &GeneratedPuzzle) {
    println!("Difficulty:");
    println!("  {}", puzzle.difficulty);
    println!();
    println!("Seed:");
    println!("  {}", puzzle.seed);
    println!();
    println!("Problem:");
    println!("  {}", puzzle.problem);
    println!();
    println!("Solution:");
    println!("  {}", puzzle.solution);
}
