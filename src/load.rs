use anyhow::{Context, Result};
use csv::ReaderBuilder;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

use crate::error::DataError;
use crate::model::{NameRecord, PopulationRecord};

/// Check that every column in `required` appears in the file header.
/// Fails before any row is deserialized so the error names the real problem
/// instead of a generic serde mismatch.
fn require_columns(
    headers: &csv::StringRecord,
    required: &[&'static str],
    file: &str,
) -> Result<(), DataError> {
    for col in required {
        if !headers.iter().any(|h| h == *col) {
            return Err(DataError::MissingColumn {
                file: file.to_string(),
                column: col,
                found: headers.iter().map(str::to_string).collect(),
            });
        }
    }
    Ok(())
}

/// Load the state name file. All four columns are read as opaque strings.
pub fn load_names(path: &Path) -> Result<Vec<NameRecord>> {
    let file = path.display().to_string();
    let mut rdr = ReaderBuilder::new()
        .from_path(path)
        .with_context(|| format!("opening name file {}", file))?;

    let headers = rdr
        .headers()
        .map_err(|e| DataError::Csv {
            file: file.clone(),
            source: e,
        })?
        .clone();
    require_columns(&headers, &["Region", "Division", "State", "Name"], &file)?;

    let mut rows = Vec::new();
    for result in rdr.deserialize::<NameRecord>() {
        let row = result.map_err(|e| DataError::Csv {
            file: file.clone(),
            source: e,
        })?;
        rows.push(row);
    }

    info!("loaded {} name rows from {}", rows.len(), file);
    Ok(rows)
}

/// Raw shape of the population file: both columns come in as strings, and
/// `pop` is converted separately so a bad value can be reported with its row.
#[derive(Debug, Deserialize)]
struct RawPopRow {
    #[serde(rename = "STATEFP")]
    statefp: String,
    pop: String,
}

/// Load the population file, converting `pop` to a float per row.
pub fn load_populations(path: &Path) -> Result<Vec<PopulationRecord>> {
    let file = path.display().to_string();
    let mut rdr = ReaderBuilder::new()
        .from_path(path)
        .with_context(|| format!("opening population file {}", file))?;

    let headers = rdr
        .headers()
        .map_err(|e| DataError::Csv {
            file: file.clone(),
            source: e,
        })?
        .clone();
    require_columns(&headers, &["STATEFP", "pop"], &file)?;

    let mut rows = Vec::new();
    for (i, result) in rdr.deserialize::<RawPopRow>().enumerate() {
        let raw = result.map_err(|e| DataError::Csv {
            file: file.clone(),
            source: e,
        })?;
        let pop: f64 = raw.pop.trim().parse().map_err(|_| DataError::BadNumber {
            file: file.clone(),
            // +2: one for the header line, one for 1-based numbering
            row: i + 2,
            column: "pop",
            value: raw.pop.clone(),
        })?;
        rows.push(PopulationRecord {
            statefp: raw.statefp,
            pop,
        });
    }

    info!("loaded {} population rows from {}", rows.len(), file);
    Ok(rows)
}
