use anyhow::{Context, Result};
use ecotally_schemas::input::CalculationRequest;
use ecotally_schemas::result::CalculationResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Only the most recent entries are kept, matching the bounded
/// recent-history cache the client side maintains.
pub const HISTORY_CAP: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub timestamp: String,
    pub diet: String,
    pub country: String,
    pub transport_kg: f64,
    pub diet_kg: f64,
    pub electricity_kg: f64,
    pub total_kg: f64,
    pub national_average_kg: f64,
}

impl HistoryEntry {
    pub fn new(request: &CalculationRequest, result: &CalculationResult) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            diet: request.diet.to_string(),
            country: request.country.to_string(),
            transport_kg: result.results.transport,
            diet_kg: result.results.diet,
            electricity_kg: result.results.electricity,
            total_kg: result.results.total,
            national_average_kg: result.national_average,
        }
    }
}

/// Appends an entry, dropping the oldest rows beyond [`HISTORY_CAP`].
/// The file is rewritten whole; history is a small bounded cache, not a log.
pub fn append(path: &Path, entry: HistoryEntry) -> Result<()> {
    let mut entries = read(path)?;
    entries.push(entry);
    if entries.len() > HISTORY_CAP {
        let excess = entries.len() - HISTORY_CAP;
        entries.drain(..excess);
    }

    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to open history file {}", path.display()))?;
    for entry in &entries {
        writer.serialize(entry)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn read(path: &Path) -> Result<Vec<HistoryEntry>> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to read history file {}", path.display()))?;
    let mut entries = Vec::new();
    for record in reader.deserialize() {
        entries.push(record.with_context(|| {
            format!("Failed to parse history record in {}", path.display())
        })?);
    }
    Ok(entries)
}

#[cfg(test)]
mod test {
    use super::*;

    fn entry(total_kg: f64) -> HistoryEntry {
        HistoryEntry {
            timestamp: "2026-01-01T00:00:00+00:00".to_string(),
            diet: "omnivore".to_string(),
            country: "USA".to_string(),
            transport_kg: 0.0,
            diet_kg: 2500.0,
            electricity_kg: 0.0,
            total_kg,
            national_average_kg: 16000.0,
        }
    }

    fn scratch_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("ecotally-history-{}-{}", std::process::id(), name))
    }

    #[test]
    fn append_then_read_round_trips() {
        let path = scratch_path("roundtrip.csv");
        append(&path, entry(2500.0)).unwrap();
        append(&path, entry(3000.0)).unwrap();

        let entries = read(&path).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].total_kg, 2500.0);
        assert_eq!(entries[1].total_kg, 3000.0);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn history_keeps_only_the_most_recent_entries() {
        let path = scratch_path("cap.csv");
        for i in 0..8 {
            append(&path, entry(i as f64)).unwrap();
        }

        let entries = read(&path).unwrap();
        assert_eq!(entries.len(), HISTORY_CAP);
        assert_eq!(entries[0].total_kg, 3.0);
        assert_eq!(entries[HISTORY_CAP - 1].total_kg, 7.0);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_history_file_reads_as_empty() {
        let entries = read(&scratch_path("missing.csv")).unwrap();
        assert!(entries.is_empty());
    }
}
