// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Estimates the hand categories frequencies over random 7 cards hands.
//
// Run with:
//
// ```bash
// $ cargo r --release --example category_freq -- --samples 1000000
// ...
// Total hands      1000000
// Elapsed:         1.214s
// Hands/sec:       823723
//
// High Card:       17.41%
// One Pair:        43.82%
// ...
// ```
use clap::{Parser, value_parser};
use rand::{SeedableRng, rngs::StdRng};
use std::time::Instant;

use showdown_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The number of random hands to evaluate.
    #[clap(long, short, default_value_t = 100_000, value_parser = value_parser!(u64).range(1..))]
    samples: u64,
    /// Seed for reproducible samples.
    #[clap(long)]
    seed: Option<u64>,
}

fn main() {
    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let now = Instant::now();
    let mut counts = [0usize; HandCategory::COUNT];

    Deck::default().sample(&mut rng, cli.samples as usize, 7, |hand| {
        let category = Hand::identify(&hand[..2], &hand[2..]).category();
        counts[category as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in HandCategory::categories() {
        let label = format!("{category}:");
        let freq = counts[category as usize] as f64 / total as f64 * 100.0;
        println!("{label:<17}{freq:.2}%");
    }
}
