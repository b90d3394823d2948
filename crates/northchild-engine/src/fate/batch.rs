use super::domain::{AnimalPoints, Augments};
use super::{evaluate, tables::FATES, FateReading};
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug)]
pub enum BatchImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for BatchImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BatchImportError::Io(err) => write!(f, "failed to read build sheet: {}", err),
            BatchImportError::Csv(err) => write!(f, "invalid build sheet data: {}", err),
        }
    }
}

impl std::error::Error for BatchImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BatchImportError::Io(err) => Some(err),
            BatchImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for BatchImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for BatchImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// One evaluated row of a build sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchEntry {
    pub label: String,
    pub points: AnimalPoints,
    pub augments: Augments,
    pub reading: FateReading,
}

/// Evaluates every build in a CSV sheet. Columns are `label`, the eight
/// animals, `highflame` and `gravesong`; any of them may be omitted.
pub struct BatchImporter;

impl BatchImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<BatchEntry>, BatchImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<BatchEntry>, BatchImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: csv::StringRecord = csv_reader
            .headers()?
            .iter()
            .map(|header| header.trim_start_matches('\u{feff}').to_ascii_lowercase())
            .collect();
        csv_reader.set_headers(headers);

        let mut entries = Vec::new();
        for (index, row) in csv_reader.deserialize::<BuildRow>().enumerate() {
            let row = row?;
            let entry = row.into_entry(index + 1);
            debug!(
                label = %entry.label,
                valid = entry.reading.is_valid,
                winner = entry.reading.winner.id,
                "build evaluated"
            );
            entries.push(entry);
        }

        info!(builds = entries.len(), "build sheet evaluated");
        Ok(entries)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct BuildRow {
    label: Option<String>,
    wolf: Option<i32>,
    orca: Option<i32>,
    serpent: Option<i32>,
    raven: Option<i32>,
    owl: Option<i32>,
    eagle: Option<i32>,
    elk: Option<i32>,
    bear: Option<i32>,
    highflame: Option<u8>,
    gravesong: Option<u8>,
}

impl BuildRow {
    fn into_entry(self, row_number: usize) -> BatchEntry {
        let points = AnimalPoints {
            wolf: self.wolf.unwrap_or(0),
            orca: self.orca.unwrap_or(0),
            serpent: self.serpent.unwrap_or(0),
            raven: self.raven.unwrap_or(0),
            owl: self.owl.unwrap_or(0),
            eagle: self.eagle.unwrap_or(0),
            elk: self.elk.unwrap_or(0),
            bear: self.bear.unwrap_or(0),
        };
        let augments = Augments::new(self.highflame.unwrap_or(0), self.gravesong.unwrap_or(0));
        let label = self
            .label
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| format!("row-{row_number}"));

        BatchEntry {
            label,
            points,
            augments,
            reading: evaluate(&points, augments, &FATES),
        }
    }
}
