use std::collections::BTreeMap;

use crate::error::DataError;
use crate::model::{JoinedRecord, MergedRecord};

/// Sum population per Census division. BTreeMap so reports come out in
/// division-code order without a separate sort.
pub fn division_totals(rows: &[JoinedRecord]) -> BTreeMap<String, f64> {
    let mut totals = BTreeMap::new();
    for r in rows {
        *totals.entry(r.division.clone()).or_insert(0.0) += r.pop;
    }
    totals
}

/// Annotate each row with its percentage share of its division total. The
/// totals lookup is explicit per row; a division absent from `totals` is a
/// data error, never a silent NaN.
pub fn attach_percent(
    rows: Vec<JoinedRecord>,
    totals: &BTreeMap<String, f64>,
) -> Result<Vec<MergedRecord>, DataError> {
    rows.into_iter()
        .map(|r| {
            let total = totals
                .get(&r.division)
                .ok_or_else(|| DataError::MissingGroupTotal {
                    division: r.division.clone(),
                    statefp: r.statefp.clone(),
                })?;
            Ok(MergedRecord {
                percent: 100.0 * r.pop / total,
                division: r.division,
                region: r.region,
                state: r.state,
                name: r.name,
                statefp: r.statefp,
                pop: r.pop,
            })
        })
        .collect()
}
