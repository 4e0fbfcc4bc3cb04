//! Pix ledger CLI
//!
//! Applies a CSV file of transaction commands and writes the final state of
//! every transaction to stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- commands.csv > transactions.csv
//! cargo run -- --strategy sync commands.csv > transactions.csv
//! cargo run -- --format json --log-level info commands.csv > transactions.jsonl
//! cargo run -- --strategy async --batch-size 2000 --max-concurrent 8 commands.csv
//! ```
//!
//! Logs go to stderr (`--log-level`, `PIX_LEDGER_LOG` or `RUST_LOG`).
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (missing arguments, file not found, output not writable, etc.)

use pix_transactions::{cli, logging, strategy};
use std::process;
use tracing::error;

fn main() {
    let args = cli::parse_args();

    if let Err(e) = logging::init_logging(&args.log_level, args.log_format) {
        eprintln!("Failed to initialize logging: {}", e);
    }

    let strategy = {
        let config = if matches!(args.strategy, cli::StrategyType::Async) {
            Some(args.to_batch_config())
        } else {
            None
        };
        strategy::create_strategy(args.strategy, config, args.format)
    };

    let mut output = std::io::stdout().lock();
    if let Err(e) = strategy.process(&args.input_file, &mut output) {
        error!("{}", e);
        // The log filter may hide the line above
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
