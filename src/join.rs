use std::collections::HashMap;
use tracing::{debug, info};

use crate::model::{JoinedRecord, NameRecord, PopulationRecord};

/// Inner join of names onto populations on `State == STATEFP`, exact string
/// equality. Rows without a partner on the other side are dropped and logged:
/// the name file carries Census-region aggregate rows with no population, and
/// the population file carries territories (Puerto Rico) with no name row.
/// Output preserves the order of the name rows.
pub fn inner_join(names: &[NameRecord], pops: &[PopulationRecord]) -> Vec<JoinedRecord> {
    let by_fips: HashMap<&str, &PopulationRecord> =
        pops.iter().map(|p| (p.statefp.as_str(), p)).collect();

    let mut joined = Vec::with_capacity(names.len());
    for n in names {
        match by_fips.get(n.state.as_str()) {
            Some(p) => joined.push(JoinedRecord {
                region: n.region.clone(),
                division: n.division.clone(),
                state: n.state.clone(),
                name: n.name.clone(),
                statefp: p.statefp.clone(),
                pop: p.pop,
            }),
            None => debug!("dropping name row {} ({}): no population", n.state, n.name),
        }
    }

    // Right-side rows that never matched, for traceability.
    let matched: std::collections::HashSet<&str> =
        joined.iter().map(|j| j.statefp.as_str()).collect();
    for p in pops {
        if !matched.contains(p.statefp.as_str()) {
            debug!("dropping population row {}: no name", p.statefp);
        }
    }

    info!(
        "inner join: {} name rows x {} population rows -> {} merged rows",
        names.len(),
        pops.len(),
        joined.len()
    );
    joined
}
