//! End-to-end integration tests
//!
//! Each fixture under tests/fixtures/<name>/ holds an input.csv of commands
//! and the expected.csv the ledger must produce. Every fixture runs once with
//! the synchronous strategy and once with the async strategy, so both are
//! held to byte-identical output.

#[cfg(test)]
mod tests {
    use pix_transactions::cli::{OutputFormat, StrategyType};
    use pix_transactions::strategy::{create_strategy, BatchConfig};
    use rstest::rstest;
    use std::fs;
    use std::io::Write;
    use std::path::Path;
    use tempfile::NamedTempFile;
    use uuid::Uuid;

    fn run_strategy(
        input_path: &Path,
        strategy_type: StrategyType,
        config: Option<BatchConfig>,
        format: OutputFormat,
    ) -> String {
        let strategy = create_strategy(strategy_type, config, format);
        let mut temp_output = NamedTempFile::new().expect("Failed to create temp file");

        strategy
            .process(input_path, &mut temp_output)
            .unwrap_or_else(|e| panic!("Failed to process commands: {}", e));
        temp_output.flush().expect("Failed to flush temp file");

        fs::read_to_string(temp_output.path())
            .unwrap_or_else(|e| panic!("Failed to read temp output file: {}", e))
    }

    /// Process tests/fixtures/{fixture_name}/input.csv and compare with expected.csv
    fn run_test_fixture(fixture_name: &str, strategy_type: StrategyType, config: Option<BatchConfig>) {
        let fixture_dir = format!("tests/fixtures/{}", fixture_name);
        let input_path = format!("{}/input.csv", fixture_dir);
        let expected_path = format!("{}/expected.csv", fixture_dir);

        assert!(
            Path::new(&input_path).exists(),
            "Input file not found: {}",
            input_path
        );

        let actual_output = run_strategy(
            Path::new(&input_path),
            strategy_type,
            config,
            OutputFormat::Csv,
        );
        let expected_output = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read expected file {}: {}", expected_path, e));

        assert_eq!(
            actual_output, expected_output,
            "\n\nOutput mismatch for fixture: {} (strategy: {:?})\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            fixture_name, strategy_type, actual_output, expected_output
        );
    }

    #[rstest]
    #[case("happy_path")]
    #[case("confirm_then_complete")]
    #[case("cancellations")]
    #[case("invalid_registrations")]
    #[case("invalid_transitions")]
    #[case("unknown_references")]
    #[case("malformed_data")]
    #[case("case_and_whitespace")]
    #[case("commas_in_descriptions")]
    #[case("sub_centavo_amounts")]
    fn test_fixtures(
        #[case] fixture: &str,
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        run_test_fixture(fixture, strategy, None);
    }

    /// Tiny batches force every lifecycle across several batches
    #[rstest]
    #[case("confirm_then_complete")]
    #[case("invalid_transitions")]
    #[case("unknown_references")]
    fn test_fixtures_with_small_batches(#[case] fixture: &str) {
        run_test_fixture(fixture, StrategyType::Async, Some(BatchConfig::new(1, 2)));
    }

    #[rstest]
    fn test_json_output_matches_csv_fixture(
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let output = run_strategy(
            Path::new("tests/fixtures/cancellations/input.csv"),
            strategy,
            None,
            OutputFormat::Json,
        );

        let lines: Vec<serde_json::Value> = output
            .lines()
            .map(|line| serde_json::from_str(line).expect("invalid JSON line"))
            .collect();

        assert_eq!(lines.len(), 4);
        for (expected_tx, line) in (1..).zip(&lines) {
            assert_eq!(line["tx"], expected_tx);
            assert_eq!(line["status"], "error");

            let id = line["id"].as_str().expect("id must be a string");
            assert_eq!(Uuid::parse_str(id).unwrap().get_version_num(), 4);
            assert!(line["created_at"].is_string());
            assert!(line["updated_at"].is_string());
            assert!(line.get("account_from").is_none());
            assert!(line.get("pix_key_to").is_none());
        }

        assert_eq!(lines[0]["cancel_description"], "insufficient funds");
        assert_eq!(lines[1]["amount"], 60.0);
    }

    #[rstest]
    fn test_missing_input_is_fatal(
        #[values(StrategyType::Sync, StrategyType::Async)] strategy: StrategyType,
    ) {
        let strategy = create_strategy(strategy, None, OutputFormat::Csv);
        let mut output = Vec::new();

        let result = strategy.process(Path::new("tests/fixtures/does_not_exist.csv"), &mut output);
        assert!(result.is_err());
    }
}
