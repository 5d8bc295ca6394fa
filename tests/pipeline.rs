//! End-to-end run of the load → join → group → percent → write pipeline
//! against small on-disk fixtures.

use anyhow::Result;
use statemerge::{
    agg::{attach_percent, division_totals},
    join::inner_join,
    load::{load_names, load_populations},
    output::write_merged,
};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

const NAMES: &str = "\
Region,Division,State,Name
4,8,04,Arizona
4,8,08,Colorado
4,8,49,Utah
2,3,17,Illinois
2,3,39,Ohio
4,0,64,West Region
";

const POPS: &str = "\
STATEFP,pop
04,7151502
08,5773714
49,3271616
17,12812508
39,11799448
72,3285874
";

fn write_fixtures(dir: &std::path::Path) -> Result<(PathBuf, PathBuf)> {
    let names = dir.join("state_name.csv");
    let pops = dir.join("state_pop.csv");
    fs::write(&names, NAMES)?;
    fs::write(&pops, POPS)?;
    Ok((names, pops))
}

#[test]
fn full_pipeline_produces_merged_csv() -> Result<()> {
    let dir = tempdir()?;
    let (name_path, pop_path) = write_fixtures(dir.path())?;
    let out_path = dir.path().join("demo-merged.csv");

    let names = load_names(&name_path)?;
    let pops = load_populations(&pop_path)?;

    // 6 name rows, 6 population rows, 5 matching key pairs.
    let joined = inner_join(&names, &pops);
    assert_eq!(joined.len(), 5);
    assert!(!joined.iter().any(|j| j.statefp == "64" || j.statefp == "72"));

    let totals = division_totals(&joined);
    assert_eq!(totals["8"], 7151502.0 + 5773714.0 + 3271616.0);

    let merged = attach_percent(joined, &totals)?;
    for division in ["3", "8"] {
        let sum: f64 = merged
            .iter()
            .filter(|m| m.division == division)
            .map(|m| m.percent)
            .sum();
        assert!((sum - 100.0).abs() < 1e-6, "division {division}: {sum}");
    }

    write_merged(merged, &out_path)?;
    let content = fs::read_to_string(&out_path)?;
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "Division,Region,State,Name,STATEFP,pop,percent");
    assert_eq!(lines.len(), 6);

    // Sorted by STATEFP with leading zeros intact.
    let fips: Vec<&str> = lines[1..]
        .iter()
        .map(|l| l.split(',').nth(4).unwrap())
        .collect();
    assert_eq!(fips, ["04", "08", "17", "39", "49"]);
    Ok(())
}

#[test]
fn bad_input_fails_before_any_output_is_written() -> Result<()> {
    let dir = tempdir()?;
    let pop_path = dir.path().join("state_pop.csv");
    let out_path = dir.path().join("demo-merged.csv");
    fs::write(&pop_path, "STATEFP,pop\n04,not-a-number\n")?;

    assert!(load_populations(&pop_path).is_err());
    // The pipeline never reached the writer, so no partial file exists.
    assert!(!out_path.exists());
    Ok(())
}

#[test]
fn repo_sample_data_round_trips() -> Result<()> {
    // The checked-in data files: 50 states + DC join, regions and PR drop.
    let names = load_names(std::path::Path::new("data/state_name.csv"))?;
    let pops = load_populations(std::path::Path::new("data/state_pop.csv"))?;
    let joined = inner_join(&names, &pops);
    assert_eq!(joined.len(), 51);

    let totals = division_totals(&joined);
    // Nine Census divisions.
    assert_eq!(totals.len(), 9);

    let merged = attach_percent(joined, &totals)?;
    for (division, _) in &totals {
        let sum: f64 = merged
            .iter()
            .filter(|m| &m.division == division)
            .map(|m| m.percent)
            .sum();
        assert!((sum - 100.0).abs() < 1e-6, "division {division}: {sum}");
    }
    Ok(())
}
