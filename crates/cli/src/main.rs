use anyhow::{Context, Result};
use bipersistence::{format, Filtration, PointCloud, Presentation};
use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

mod provenance;
mod report;
mod settings;

use report::Report;
use settings::Settings;

#[derive(Parser)]
#[command(name = "bipersistence")]
#[command(about = "Gröbner basis of the Rips/density boundary image over GF(2)")]
#[command(
    after_help = "Environment: BIPERSISTENCE_MAX_POINTS (0 = all), BIPERSISTENCE_MAX_BASIS, \
                  BIPERSISTENCE_MAX_PAIRS, BIPERSISTENCE_DEGREE (1 or 2), \
                  BIPERSISTENCE_JSON (report path), RUST_LOG"
)]
struct Cmd {
    /// Points file: coordinates then a density, whitespace separated, one point per line
    input: PathBuf,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cmd = Cmd::parse();
    let settings = Settings::from_env()?;
    let out = run(&cmd.input, &settings)?;
    print!("{out}");
    Ok(())
}

/// Compute the presentation for `input` and return the text meant for stdout.
fn run(input: &Path, settings: &Settings) -> Result<String> {
    let cloud = PointCloud::from_path(input)
        .with_context(|| format!("reading points from {}", input.display()))?;
    tracing::info!(points = cloud.len(), dim = cloud.dim(), "points loaded");

    let filt = Filtration::new(&cloud, settings.filtration())
        .with_context(|| format!("scaling the filtration of {}", input.display()))?;
    let pres = Presentation::compute(&filt, settings.rows, settings.saturation())
        .with_context(|| format!("computing the Gröbner basis of Im d{}", settings.degree()))?;

    if let Some(path) = &settings.json {
        let report = Report::new(input, filt.n_points(), settings, &pres);
        let sidecar = report.write(path, settings)?;
        tracing::info!(report = %path.display(), provenance = %sidecar.display(), "report written");
    }

    Ok(format!(
        "Reduced Gröbner basis of Im d{}:\n{}\nGAP: {}\n",
        settings.degree(),
        format::diagnostic(&pres.reduced),
        format::gap_matrix(&pres.reduced, pres.n_rows)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use bipersistence::SimplexKind;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    const TRIANGLE: &str = "0 0 0.9\n1 0 0.5\n0 1 0.1\n";

    #[test]
    fn cli_requires_the_input_path() {
        assert!(Cmd::try_parse_from(["bipersistence"]).is_err());
        let cmd = Cmd::try_parse_from(["bipersistence", "pts.txt"]).unwrap();
        assert_eq!(cmd.input, PathBuf::from("pts.txt"));
    }

    #[test]
    fn triangle_run_prints_two_generators_and_writes_report() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("triangle.txt");
        fs::write(&input, TRIANGLE).unwrap();
        let json = dir.path().join("out").join("triangle.json");
        let settings = Settings {
            json: Some(json.clone()),
            ..Settings::default()
        };

        let out = run(&input, &settings).unwrap();
        assert!(out.starts_with("Reduced Gröbner basis of Im d1:\n"));
        assert!(out.contains("Length: 2"));
        assert!(out.contains("GAP: HomalgMatrix(\""));

        let report: Value = serde_json::from_slice(&fs::read(&json).unwrap()).unwrap();
        assert_eq!(report["points"], 3);
        assert_eq!(report["n_rows"], 3);
        assert_eq!(report["boundary_columns"], 3);
        assert_eq!(report["groebner_size"], 4);
        assert_eq!(report["reduced"].as_array().unwrap().len(), 2);
        assert_eq!(report["stats"]["generators_added"], 1);
        assert!(dir
            .path()
            .join("out")
            .join("triangle.provenance.json")
            .exists());
    }

    #[test]
    fn edge_rows_present_the_triangle_boundary() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("triangle.txt");
        fs::write(&input, TRIANGLE).unwrap();
        let settings = Settings {
            rows: SimplexKind::Edge,
            ..Settings::default()
        };
        let out = run(&input, &settings).unwrap();
        assert!(out.starts_with("Reduced Gröbner basis of Im d2:\n"));
        assert!(out.contains("Length: 1"));
    }

    #[test]
    fn unreadable_input_is_reported_with_its_path() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.txt");
        let err = run(&missing, &Settings::default()).unwrap_err();
        assert!(format!("{err:#}").contains("nope.txt"));
    }

    #[test]
    fn coordinates_beyond_the_exponent_range_abort() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("far.txt");
        fs::write(&input, "0 0 0.9\n1e11 0 0.5\n0 2e11 0.1\n").unwrap();
        let err = run(&input, &Settings::default()).unwrap_err();
        assert!(format!("{err:#}").contains("does not fit an exponent"));
    }

    #[test]
    fn malformed_line_aborts_without_output() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("bad.txt");
        fs::write(&input, "0 0 0.9\n1 zero 0.5\n").unwrap();
        assert!(run(&input, &Settings::default()).is_err());
    }
}
