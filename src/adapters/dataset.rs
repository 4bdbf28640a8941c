//! # Dataset Files
//!
//! Plain text files of random 8-digit numbers, one per line. These are
//! the inputs the algorithms are measured against. The standard suite
//! uses 10k, 100k and 1M element files.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use rand::Rng;
use tracing::info;

/// Smallest 8-digit value in a dataset
pub const MIN_VALUE: u32 = 10_000_000;

/// One past the largest 8-digit value
pub const MAX_VALUE_EXCLUSIVE: u32 = 100_000_000;

/// Standard dataset sizes of the benchmark suite
pub const STANDARD_SIZES: [usize; 3] = [10_000, 100_000, 1_000_000];

/// Errors from dataset file handling
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// Underlying file I/O failed
    #[error("dataset I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A line was not a number
    #[error("dataset line {line}: invalid number {value:?}")]
    Parse {
        /// 1-based line number
        line: usize,
        /// The offending text
        value: String,
    },
}

/// Write `count` random 8-digit numbers to `path`, one per line
pub fn generate(path: &Path, count: usize) -> Result<(), DatasetError> {
    let mut rng = rand::thread_rng();
    let mut writer = BufWriter::new(File::create(path)?);

    for _ in 0..count {
        let value: u32 = rng.gen_range(MIN_VALUE..MAX_VALUE_EXCLUSIVE);
        writeln!(writer, "{value}")?;
    }
    writer.flush()?;

    info!(count, path = %path.display(), "dataset written");
    Ok(())
}

/// Load a dataset file back into memory
pub fn load(path: &Path) -> Result<Vec<u32>, DatasetError> {
    let reader = BufReader::new(File::open(path)?);
    let mut values = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value = trimmed.parse::<u32>().map_err(|_| DatasetError::Parse {
            line: index + 1,
            value: trimmed.to_string(),
        })?;
        values.push(value);
    }

    Ok(values)
}
