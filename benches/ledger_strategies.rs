//! Benchmark suite comparing the processing strategies
//!
//! ```bash
//! cargo bench
//! ```
//!
//! Fixtures in benches/fixtures/ mix registrations with confirm, complete
//! and cancel commands spread over many transactions:
//! - `benchmark_small.csv` - 40 transactions
//! - `benchmark_medium.csv` - 400 transactions
//! - `benchmark_large.csv` - 20,000 transactions

use pix_transactions::cli::{OutputFormat, StrategyType};
use pix_transactions::strategy::{create_strategy, BatchConfig};
use std::path::Path;

fn main() {
    divan::main();
}

const FIXTURES: &[&str] = &["small", "medium", "large"];

fn fixture_path(size: &str) -> String {
    format!("benches/fixtures/benchmark_{}.csv", size)
}

#[divan::bench(args = FIXTURES)]
fn sync_strategy(size: &str) {
    let strategy = create_strategy(StrategyType::Sync, None, OutputFormat::Csv);
    let mut output = Vec::new();

    strategy
        .process(Path::new(&fixture_path(size)), &mut output)
        .expect("Processing failed");
}

#[divan::bench(args = FIXTURES)]
fn async_strategy(size: &str) {
    let strategy = create_strategy(
        StrategyType::Async,
        Some(BatchConfig::default()),
        OutputFormat::Csv,
    );
    let mut output = Vec::new();

    strategy
        .process(Path::new(&fixture_path(size)), &mut output)
        .expect("Processing failed");
}

/// Smaller batches trade parallelism for more batch round-trips
#[divan::bench(args = [10, 100, 1000, 5000])]
fn async_batch_size_large(batch_size: usize) {
    let strategy = create_strategy(
        StrategyType::Async,
        Some(BatchConfig::new(batch_size, num_cpus::get())),
        OutputFormat::Csv,
    );
    let mut output = Vec::new();

    strategy
        .process(Path::new(&fixture_path("large")), &mut output)
        .expect("Processing failed");
}

#[divan::bench]
fn sync_strategy_json_medium() {
    let strategy = create_strategy(StrategyType::Sync, None, OutputFormat::Json);
    let mut output = Vec::new();

    strategy
        .process(Path::new(&fixture_path("medium")), &mut output)
        .expect("Processing failed");
}
