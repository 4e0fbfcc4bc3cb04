//! Asynchronous CSV reader with batch interface
//!
//! Streams command records with csv-async and hands them out in batches for
//! the async strategy.
//!
//! ```text
//! CSV Reader → AsyncReader → Batches of CommandRecords
//!                  ↓
//!           csv_format module
//!           (CsvRecord, convert_csv_record)
//! ```

use crate::io::csv_format::{convert_csv_record, CsvRecord};
use crate::types::{CommandRecord, LedgerError};
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;
use tracing::warn;

/// Asynchronous CSV reader over command records
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
    /// Malformed rows dropped so far
    skipped: usize,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    /// Create a new AsyncReader over any async byte source
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self {
            csv_reader,
            skipped: 0,
        }
    }

    /// Number of malformed rows skipped since the reader was created
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    /// Read up to `batch_size` command records
    ///
    /// Malformed rows are logged, counted in `skipped()` and dropped.
    /// Returns an empty vector once the input is exhausted.
    pub async fn read_batch(&mut self, batch_size: usize) -> Vec<CommandRecord> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut records = self.csv_reader.deserialize::<CsvRecord>();

        while batch.len() < batch_size {
            match records.next().await {
                Some(Ok(csv_record)) => {
                    let tx = csv_record.tx;
                    match convert_csv_record(csv_record) {
                        Ok(record) => batch.push(record),
                        Err(e) => {
                            self.skipped += 1;
                            warn!(tx, "skipping record: {}", e);
                        }
                    }
                }
                Some(Err(e)) => {
                    self.skipped += 1;
                    let line = e.position().map(|pos| pos.line());
                    let error = LedgerError::ParseError {
                        line,
                        message: e.to_string(),
                    };
                    warn!("skipping record: {}", error);
                }
                None => break,
            }
        }

        batch
    }
}
