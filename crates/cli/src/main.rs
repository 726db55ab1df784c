//! Geofence CLI - analyze geofence GeoJSON exports

mod report;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing::{debug, info, Level};
use tracing_subscriber::FmtSubscriber;

use geofence_algorithms::overlap::{detect_overlaps, OverlapParams};
use geofence_algorithms::statistics::statistics;
use geofence_core::io::read_geojson;
use geofence_core::{GeofenceArea, DEFAULT_MAP_FILE};

use report::MapStatus;

// ─── CLI structure ──────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "geofence")]
#[command(version, about = "Analyze geofence areas exported as GeoJSON", long_about = None)]
struct Cli {
    /// GeoJSON file exported by the geofencing app
    input: PathBuf,

    /// Output HTML file for the interactive map
    #[arg(short, long, default_value = DEFAULT_MAP_FILE)]
    output: PathBuf,

    /// Do not generate the interactive map
    #[arg(long)]
    no_map: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

// ─── Helpers ────────────────────────────────────────────────────────────

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        eprintln!("Warning: a global tracing subscriber is already installed");
    }
}

fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        pb.set_style(style);
    }
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

fn read_areas(path: &Path) -> Result<Vec<GeofenceArea>> {
    let pb = spinner("Reading GeoJSON...");
    let result = read_geojson(path);
    pb.finish_and_clear();
    let areas = result.with_context(|| format!("Failed to read {}", path.display()))?;
    info!("Input: {} areas", areas.len());
    Ok(areas)
}

#[cfg(feature = "map")]
fn generate_map(cli: &Cli, areas: &[GeofenceArea]) -> Result<MapStatus> {
    use geofence_map::{write_map, MapOptions, MapOutcome};

    if cli.no_map {
        return Ok(MapStatus::Skipped);
    }
    let options = MapOptions {
        output: cli.output.clone(),
        ..Default::default()
    };
    let pb = spinner("Writing map...");
    let result = write_map(areas, &options);
    pb.finish_and_clear();
    let status = match result.context("Failed to write map")? {
        MapOutcome::Written(path) => MapStatus::Written(path),
        MapOutcome::Empty => MapStatus::Empty,
    };
    Ok(status)
}

#[cfg(not(feature = "map"))]
fn generate_map(cli: &Cli, _areas: &[GeofenceArea]) -> Result<MapStatus> {
    if cli.no_map {
        return Ok(MapStatus::Skipped);
    }
    tracing::warn!("Built without the `map` feature; skipping {}", cli.output.display());
    Ok(MapStatus::Unavailable)
}

// ─── Main ───────────────────────────────────────────────────────────────

fn run(cli: &Cli) -> Result<()> {
    let areas = read_areas(&cli.input)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    report::write_header(&mut out, &cli.input)?;

    let stats = statistics(&areas);
    report::write_statistics(&mut out, &areas, &stats)?;

    let start = Instant::now();
    let overlaps = detect_overlaps(&areas, &OverlapParams::default());
    debug!("Overlap check time: {:.2?}", start.elapsed());
    report::write_overlaps(&mut out, &overlaps)?;
    out.flush()?;

    let map = generate_map(cli, &areas)?;
    report::write_map_status(&mut out, &map)?;
    report::write_footer(&mut out)?;
    out.flush()?;

    Ok(())
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    setup_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["geofence", "areas.geojson"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("areas.geojson"));
        assert_eq!(cli.output, PathBuf::from("relatorio_geofence.html"));
        assert!(!cli.no_map);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_missing_input_is_error() {
        let err = Cli::try_parse_from(["geofence"]).err().unwrap();
        assert!(err.use_stderr());
    }

    #[test]
    fn test_missing_file_fails() {
        let cli = Cli::try_parse_from(["geofence", "/no/such/areas.geojson", "--no-map"]).unwrap();
        let err = run(&cli).unwrap_err();
        assert!(format!("{:#}", err).contains("File not found"));
    }

    #[test]
    fn test_malformed_json_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"{\"features\": [").unwrap();
        let args: [&std::ffi::OsStr; 3] = ["geofence".as_ref(), file.path().as_os_str(), "--no-map".as_ref()];
        let cli = Cli::try_parse_from(args).unwrap();
        let err = run(&cli).unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid JSON"));
    }

    #[cfg(not(feature = "map"))]
    #[test]
    fn test_map_unavailable_without_feature() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("map.html");
        let args: [&std::ffi::OsStr; 4] = [
            "geofence".as_ref(),
            "unused.geojson".as_ref(),
            "--output".as_ref(),
            output.as_os_str(),
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        assert_eq!(generate_map(&cli, &[]).unwrap(), MapStatus::Unavailable);

        let fixture = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../tests/fixtures/geofence_areas.geojson");
        let args: [&std::ffi::OsStr; 4] = [
            "geofence".as_ref(),
            fixture.as_os_str(),
            "--output".as_ref(),
            output.as_os_str(),
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        run(&cli).unwrap();
        assert!(!output.exists());
    }

    #[cfg(feature = "map")]
    #[test]
    fn test_run_writes_map() {
        let fixture = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../../tests/fixtures/geofence_areas.geojson");
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("map.html");
        let args: [&std::ffi::OsStr; 4] = [
            "geofence".as_ref(),
            fixture.as_os_str(),
            "--output".as_ref(),
            output.as_os_str(),
        ];
        let cli = Cli::try_parse_from(args).unwrap();
        run(&cli).unwrap();
        let html = std::fs::read_to_string(&output).unwrap();
        assert!(html.contains("Warehouse"));
    }
}
