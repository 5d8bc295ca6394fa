use crate::model::MergedRecord;

/// Stable sort by a string field. Ties keep their original relative order.
pub fn sort_by_str<F>(mut rows: Vec<MergedRecord>, key: F, ascending: bool) -> Vec<MergedRecord>
where
    F: Fn(&MergedRecord) -> &str,
{
    rows.sort_by(|a, b| {
        let ord = key(a).cmp(key(b));
        if ascending {
            ord
        } else {
            ord.reverse()
        }
    });
    rows
}

/// Stable sort by a float field, using total ordering so a stray NaN cannot
/// scramble the result.
pub fn sort_by_f64<F>(mut rows: Vec<MergedRecord>, key: F, ascending: bool) -> Vec<MergedRecord>
where
    F: Fn(&MergedRecord) -> f64,
{
    rows.sort_by(|a, b| {
        let ord = key(a).total_cmp(&key(b));
        if ascending {
            ord
        } else {
            ord.reverse()
        }
    });
    rows
}

/// Rows belonging to one division, in their current order.
pub fn select_division<'a>(rows: &'a [MergedRecord], division: &str) -> Vec<&'a MergedRecord> {
    rows.iter().filter(|r| r.division == division).collect()
}

/// The `n` rows with the smallest value of `key`, ascending.
pub fn smallest_n<F>(rows: &[MergedRecord], key: F, n: usize) -> Vec<MergedRecord>
where
    F: Fn(&MergedRecord) -> f64,
{
    let sorted = sort_by_f64(rows.to_vec(), key, true);
    sorted.into_iter().take(n).collect()
}
