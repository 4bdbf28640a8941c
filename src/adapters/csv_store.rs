//! # CSV Store Adapter
//!
//! Result persistence as a headerless CSV file of
//! `algorithm,size,seconds` rows.
//!
//! Two rules inherited from the file format:
//! - rows with fewer than three columns are silently skipped on load
//! - upserting an existing (algorithm, size) replaces that row in
//!   place; other rows keep their order

use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, WriterBuilder};
use tracing::debug;

use crate::core::sample::Sample;
use crate::ports::{Store, StoreError, StoreResult};

/// CSV-file-backed store
pub struct CsvStore {
    /// Path of the results file; created on first upsert
    path: PathBuf,
}

impl CsvStore {
    /// Create a store over the given results file.
    ///
    /// The file does not need to exist yet; loading a missing file
    /// yields no samples.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the underlying results file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse_row(record: &csv::StringRecord) -> StoreResult<Sample> {
        let algorithm = record[0].trim().to_string();

        let size = record[1]
            .trim()
            .parse::<usize>()
            .map_err(|_| StoreError::Parse {
                field: "size",
                value: record[1].to_string(),
            })?;

        let seconds = record[2]
            .trim()
            .parse::<f64>()
            .map_err(|_| StoreError::Parse {
                field: "seconds",
                value: record[2].to_string(),
            })?;

        Ok(Sample::new(algorithm, size, seconds))
    }
}

impl Store for CsvStore {
    fn load(&self) -> StoreResult<Vec<Sample>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)?;

        let mut samples = Vec::new();
        for record in reader.records() {
            let record = record?;
            if record.len() < 3 {
                // Malformed row, skip it
                continue;
            }
            samples.push(Self::parse_row(&record)?);
        }

        debug!(count = samples.len(), path = %self.path.display(), "loaded samples");
        Ok(samples)
    }

    fn get(&self, algorithm: &str, size: usize) -> StoreResult<Option<Sample>> {
        Ok(self
            .load()?
            .into_iter()
            .find(|s| s.algorithm == algorithm && s.size == size))
    }

    fn upsert(&mut self, sample: &Sample) -> StoreResult<()> {
        let mut samples = self.load()?;

        match samples
            .iter_mut()
            .find(|s| s.algorithm == sample.algorithm && s.size == sample.size)
        {
            Some(existing) => *existing = sample.clone(),
            None => samples.push(sample.clone()),
        }

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(&self.path)?;

        for s in &samples {
            writer.write_record([
                s.algorithm.as_str(),
                s.size.to_string().as_str(),
                format!("{:.6}", s.seconds).as_str(),
            ])?;
        }
        writer.flush()?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn store_in(dir: &tempfile::TempDir) -> CsvStore {
        CsvStore::new(dir.path().join("results.csv"))
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_load_skips_short_rows() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        fs::write(
            store.path(),
            "Quick Sort,10000,0.012345\nbroken row\nMerge Sort,10000,0.023456\njust,two\n",
        )
        .unwrap();

        let samples = store.load().unwrap();
        assert_eq!(samples.len(), 2);
        assert_eq!(samples[0].algorithm, "Quick Sort");
        assert_eq!(samples[1].algorithm, "Merge Sort");
    }

    #[test]
    fn test_load_rejects_non_numeric_time() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        fs::write(store.path(), "Quick Sort,10000,fast\n").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, StoreError::Parse { field: "seconds", .. }));
    }

    #[test]
    fn test_load_rejects_non_numeric_size() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        fs::write(store.path(), "Quick Sort,big,0.5\n").unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, StoreError::Parse { field: "size", .. }));
    }

    #[test]
    fn test_upsert_appends_then_replaces_in_place() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        store.upsert(&Sample::new("Bubble Sort", 10_000, 1.0)).unwrap();
        store.upsert(&Sample::new("Quick Sort", 10_000, 0.01)).unwrap();
        store.upsert(&Sample::new("Bubble Sort", 100_000, 100.0)).unwrap();

        // Re-measure bubble at 10k: replaces row 0, order unchanged
        store.upsert(&Sample::new("Bubble Sort", 10_000, 1.5)).unwrap();

        let samples = store.load().unwrap();
        assert_eq!(samples.len(), 3);
        assert_eq!(samples[0], Sample::new("Bubble Sort", 10_000, 1.5));
        assert_eq!(samples[1].algorithm, "Quick Sort");
        assert_eq!(samples[2].size, 100_000);
    }

    #[test]
    fn test_upsert_writes_six_decimals() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        store.upsert(&Sample::new("Radix Sort", 10_000, 0.5)).unwrap();

        let text = fs::read_to_string(store.path()).unwrap();
        assert_eq!(text.trim(), "Radix Sort,10000,0.500000");
    }

    #[test]
    fn test_get_by_key() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = store_in(&dir);

        store.upsert(&Sample::new("Merge Sort", 10_000, 0.02)).unwrap();

        let hit = store.get("Merge Sort", 10_000).unwrap();
        assert_eq!(hit.unwrap().seconds, 0.02);

        assert!(store.get("Merge Sort", 100_000).unwrap().is_none());
        assert!(store.get("Quick Sort", 10_000).unwrap().is_none());
    }
}
