use std::collections::BTreeMap;
use std::fmt::Write;

use crate::model::MergedRecord;
use crate::ops::{select_division, smallest_n, sort_by_str};

/// Display settings for the printed reports. Passed explicitly wherever
/// formatting happens; there is no ambient display state.
#[derive(Debug, Clone, Copy)]
pub struct ReportConfig {
    /// Decimal places used when formatting `percent`.
    pub percent_decimals: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { percent_decimals: 3 }
    }
}

fn header() -> String {
    format!(
        "{:<4} {:<4} {:<6} {:<22} {:>12} {:>9}",
        "Div", "Reg", "FIPS", "Name", "pop", "percent"
    )
}

fn format_row(r: &MergedRecord, cfg: ReportConfig) -> String {
    format!(
        "{:<4} {:<4} {:<6} {:<22} {:>12.0} {:>9.prec$}",
        r.division,
        r.region,
        r.statefp,
        r.name,
        r.pop,
        r.percent,
        prec = cfg.percent_decimals
    )
}

fn format_table<'a, I>(rows: I, cfg: ReportConfig) -> String
where
    I: IntoIterator<Item = &'a MergedRecord>,
{
    let mut out = header();
    for r in rows {
        out.push('\n');
        out.push_str(&format_row(r, cfg));
    }
    out
}

/// The first `n` rows, in their current order.
pub fn head(rows: &[MergedRecord], n: usize, cfg: ReportConfig) -> String {
    format_table(rows.iter().take(n), cfg)
}

/// All rows of one division, displayed by Name descending.
pub fn division_detail(rows: &[MergedRecord], division: &str, cfg: ReportConfig) -> String {
    let members: Vec<MergedRecord> = select_division(rows, division)
        .into_iter()
        .cloned()
        .collect();
    let sorted = sort_by_str(members, |r| &r.name, false);
    format_table(sorted.iter(), cfg)
}

/// One line per division: code and total population.
pub fn totals_report(totals: &BTreeMap<String, f64>) -> String {
    let mut out = String::from("Division  pop");
    for (division, total) in totals {
        write!(out, "\n{:<9} {:.0}", division, total).unwrap();
    }
    out
}

/// Spot check for one division: its rows plus the sum of their percent
/// shares. The sum is taken over unrounded values so rounding cannot mask a
/// real computation error; it should come out at 100 for valid data.
pub fn spot_check(rows: &[MergedRecord], division: &str, cfg: ReportConfig) -> String {
    let members = select_division(rows, division);
    let check: f64 = members.iter().map(|r| r.percent).sum();
    let mut out = format_table(members.into_iter(), cfg);
    write!(out, "\n\nCheck: {}", check).unwrap();
    out
}

/// The `n` states with the smallest shares of their divisions, ascending.
pub fn smallest_report(rows: &[MergedRecord], n: usize, cfg: ReportConfig) -> String {
    let small = smallest_n(rows, |r| r.percent, n);
    format_table(small.iter(), cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(division: &str, statefp: &str, name: &str, pop: f64, percent: f64) -> MergedRecord {
        MergedRecord {
            region: "4".into(),
            division: division.into(),
            state: statefp.into(),
            name: name.into(),
            statefp: statefp.into(),
            pop,
            percent,
        }
    }

    #[test]
    fn head_takes_first_rows_in_order() {
        let rows = vec![
            row("8", "04", "Arizona", 7.0, 60.0),
            row("8", "08", "Colorado", 5.0, 40.0),
        ];
        let out = head(&rows, 1, ReportConfig::default());
        assert!(out.contains("Arizona"));
        assert!(!out.contains("Colorado"));
    }

    #[test]
    fn spot_check_sums_unrounded_percents() {
        // Three values that each round to 33.333 but sum to exactly 100.
        let third = 100.0 / 3.0;
        let rows = vec![
            row("3", "17", "Illinois", 1.0, third),
            row("3", "18", "Indiana", 1.0, third),
            row("3", "39", "Ohio", 1.0, third),
        ];
        let out = spot_check(&rows, "3", ReportConfig::default());
        assert!(out.contains("Check: 100"), "{out}");
    }

    #[test]
    fn division_detail_orders_by_name_descending() {
        let rows = vec![
            row("8", "04", "Arizona", 7.0, 60.0),
            row("8", "56", "Wyoming", 1.0, 10.0),
            row("3", "17", "Illinois", 9.0, 100.0),
        ];
        let out = division_detail(&rows, "8", ReportConfig::default());
        assert!(!out.contains("Illinois"));
        let wyoming = out.find("Wyoming").unwrap();
        let arizona = out.find("Arizona").unwrap();
        assert!(wyoming < arizona);
    }

    #[test]
    fn percent_is_rounded_only_for_display() {
        let rows = vec![row("8", "04", "Arizona", 7_000_000.0, 100.0 * 7.0 / 12.0)];
        let out = head(&rows, 5, ReportConfig::default());
        assert!(out.contains("58.333"), "{out}");
        assert!(!out.contains("58.3333"), "{out}");
    }
}
