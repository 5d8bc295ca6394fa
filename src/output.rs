use anyhow::{Context, Result};
use std::path::Path;
use tracing::info;

use crate::model::MergedRecord;
use crate::ops::sort_by_str;

/// Write the merged record set to `path`, sorted by STATEFP, with Division as
/// an explicit first column. Callers must have finished every fallible
/// computation first: nothing here can fail for data reasons, so a bad input
/// never leaves a partial output file behind.
pub fn write_merged(rows: Vec<MergedRecord>, path: &Path) -> Result<()> {
    let sorted = sort_by_str(rows, |r| &r.statefp, true);

    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("creating output file {}", path.display()))?;
    for row in &sorted {
        wtr.serialize(row)
            .with_context(|| format!("writing row for state {}", row.statefp))?;
    }
    wtr.flush().context("flushing output file")?;

    info!("wrote {} rows to {}", sorted.len(), path.display());
    Ok(())
}
