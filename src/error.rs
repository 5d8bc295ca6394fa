use thiserror::Error;

/// Data errors that abort the pipeline. Rows dropped by the inner join are
/// intentional and logged, not errors; everything here is fatal.
#[derive(Debug, Error)]
pub enum DataError {
    /// An input file is missing a column the pipeline needs.
    #[error("{file}: missing required column `{column}` (found: {found:?})")]
    MissingColumn {
        file: String,
        column: &'static str,
        found: Vec<String>,
    },

    /// A field that must be numeric failed to convert.
    #[error("{file} row {row}: cannot parse `{column}` value `{value}` as a number")]
    BadNumber {
        file: String,
        row: usize,
        column: &'static str,
        value: String,
    },

    /// A malformed CSV record (wrong field count, bad quoting, etc).
    #[error("{file}: malformed CSV: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },

    /// A record's division has no entry in the computed group totals.
    /// Must never be papered over with a NaN percent.
    #[error("state {statefp} has division `{division}` but no total was computed for it")]
    MissingGroupTotal { division: String, statefp: String },
}
