use serde::{Deserialize, Serialize};

/// One row of the state name file. Region, Division and State are FIPS-style
/// codes and stay strings end to end so "08" never becomes 8.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NameRecord {
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "Division")]
    pub division: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Name")]
    pub name: String,
}

/// One row of the population file after the `pop` column has been converted
/// from string to float.
#[derive(Debug, Clone, PartialEq)]
pub struct PopulationRecord {
    pub statefp: String,
    pub pop: f64,
}

/// Result of inner-joining names onto populations. Both key columns are kept,
/// matching how a merge keeps `State` and `STATEFP` side by side.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedRecord {
    pub region: String,
    pub division: String,
    pub state: String,
    pub name: String,
    pub statefp: String,
    pub pop: f64,
}

/// A joined record annotated with its population share of its division.
/// `percent` is unrounded; rounding happens only when displayed or written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MergedRecord {
    #[serde(rename = "Division")]
    pub division: String,
    #[serde(rename = "Region")]
    pub region: String,
    #[serde(rename = "State")]
    pub state: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "STATEFP")]
    pub statefp: String,
    pub pop: f64,
    #[serde(serialize_with = "round3")]
    pub percent: f64,
}

/// Serialize `percent` rounded to 3 decimal places. Presentation only; the
/// in-memory value stays exact so check sums don't accumulate rounding drift.
fn round3<S: serde::Serializer>(v: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64((v * 1000.0).round() / 1000.0)
}
