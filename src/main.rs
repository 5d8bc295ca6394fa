use anyhow::Result;
use statemerge::{
    agg::{attach_percent, division_totals},
    join::inner_join,
    load::{load_names, load_populations},
    output::write_merged,
    report::{self, ReportConfig},
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    // ─── 2) resolve paths ────────────────────────────────────────────
    let mut args = std::env::args().skip(1);
    let name_path = PathBuf::from(args.next().unwrap_or_else(|| "data/state_name.csv".into()));
    let pop_path = PathBuf::from(args.next().unwrap_or_else(|| "data/state_pop.csv".into()));
    let out_path = PathBuf::from(args.next().unwrap_or_else(|| "demo-merged.csv".into()));
    let cfg = ReportConfig::default();

    // ─── 3) load both input files ────────────────────────────────────
    let names = load_names(&name_path)?;
    let pops = load_populations(&pop_path)?;

    // ─── 4) inner join on State == STATEFP ───────────────────────────
    // Keeps states and DC only: region aggregate rows have no population,
    // and Puerto Rico has no name row.
    let joined = inner_join(&names, &pops);

    // ─── 5) aggregate population by division, attach percent ────────
    let totals = division_totals(&joined);
    let merged = attach_percent(joined, &totals)?;

    // ─── 6) reports ──────────────────────────────────────────────────
    println!("\n{}\n", report::head(&merged, 5, cfg));
    println!("{}\n", report::division_detail(&merged, "8", cfg));
    println!("{}\n", report::totals_report(&totals));
    println!("{}\n", report::spot_check(&merged, "3", cfg));
    println!("{}\n", report::smallest_report(&merged, 4, cfg));

    // ─── 7) sort by STATEFP and write the output file ────────────────
    write_merged(merged, &out_path)?;

    info!("done");
    Ok(())
}
