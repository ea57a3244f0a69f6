use clap::Parser;
use peakseek::elevation::{DEFAULT_BASE_URL, DEFAULT_DATASET};
use peakseek::{
    HighPointsReport, HttpElevationSource, LatLon, PeakSearcher, ReportEntry, SearchConfig,
    TrackerMode,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

const EXAMPLE_JSON: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/config.example.json"));

#[derive(Parser, Debug)]
#[command(author, version, about = "Find high points around a coordinate")]
struct Cli {
    /// Path to the JSON configuration file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Center latitude (overrides the config).
    #[arg(long, allow_hyphen_values = true)]
    lat: Option<f64>,
    /// Center longitude (overrides the config).
    #[arg(long, allow_hyphen_values = true)]
    lon: Option<f64>,
    /// Seed for candidate sampling (overrides the config).
    #[arg(long)]
    seed: Option<u64>,
    /// Print an example config and exit.
    #[arg(long)]
    print_example: bool,
    /// Enable tracing output.
    #[arg(long)]
    trace: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "snake_case")]
enum TrackerConfig {
    Greedy,
    Strict,
}

impl From<TrackerConfig> for TrackerMode {
    fn from(value: TrackerConfig) -> Self {
        match value {
            TrackerConfig::Greedy => TrackerMode::Greedy,
            TrackerConfig::Strict => TrackerMode::Strict,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CenterJson {
    lat: f64,
    lon: f64,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct ServiceJson {
    base_url: String,
    dataset: String,
    timeout_secs: Option<u64>,
}

impl Default for ServiceJson {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            dataset: DEFAULT_DATASET.to_owned(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct SearchConfigJson {
    samples: usize,
    radius_deg: f64,
    step_deg: f64,
    keep: usize,
    tracker: TrackerConfig,
    parallel: bool,
    seed: Option<u64>,
}

impl Default for SearchConfigJson {
    fn default() -> Self {
        let cfg = SearchConfig::default();
        Self {
            samples: cfg.samples,
            radius_deg: cfg.radius_deg,
            step_deg: cfg.step_deg,
            keep: cfg.keep,
            tracker: TrackerConfig::Greedy,
            parallel: cfg.parallel,
            seed: cfg.seed,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Config {
    center: CenterJson,
    service: ServiceJson,
    search: SearchConfigJson,
    output_path: Option<String>,
}

#[derive(Debug, Serialize)]
struct PointRecord {
    lat: f64,
    lng: f64,
    elevation: i64,
}

impl From<ReportEntry> for PointRecord {
    fn from(value: ReportEntry) -> Self {
        Self {
            lat: value.lat,
            lng: value.lng,
            elevation: value.elevation_ft,
        }
    }
}

#[derive(Debug, Serialize)]
struct PointsRecord {
    one: PointRecord,
    two: PointRecord,
    three: PointRecord,
    four: PointRecord,
    five: PointRecord,
    six: PointRecord,
    seven: PointRecord,
    eight: PointRecord,
    nine: PointRecord,
    ten: PointRecord,
}

#[derive(Debug, Serialize)]
struct Output {
    points: PointsRecord,
}

impl From<&HighPointsReport> for Output {
    fn from(report: &HighPointsReport) -> Self {
        let entries = *report.entries();
        let [one, two, three, four, five, six, seven, eight, nine, ten] =
            entries.map(PointRecord::from);
        Self {
            points: PointsRecord {
                one,
                two,
                three,
                four,
                five,
                six,
                seven,
                eight,
                nine,
                ten,
            },
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env().add_directive("peakseek=info".parse()?))
            .with_target(false)
            .init();
    }

    if cli.print_example {
        println!("{EXAMPLE_JSON}");
        return Ok(());
    }

    let mut config: Config = match &cli.config {
        Some(path) => serde_json::from_str(&fs::read_to_string(path)?)?,
        None => Config::default(),
    };
    if let Some(lat) = cli.lat {
        config.center.lat = lat;
    }
    if let Some(lon) = cli.lon {
        config.center.lon = lon;
    }
    if cli.seed.is_some() {
        config.search.seed = cli.seed;
    }
    if cli.config.is_none() && (cli.lat.is_none() || cli.lon.is_none()) {
        return Err("either --config or both --lat and --lon must be given".into());
    }

    let source = HttpElevationSource::with_endpoint(
        &config.service.base_url,
        &config.service.dataset,
        config.service.timeout_secs.map(Duration::from_secs),
    )?;
    let searcher = PeakSearcher::new(source).with_config(SearchConfig {
        samples: config.search.samples,
        radius_deg: config.search.radius_deg,
        step_deg: config.search.step_deg,
        keep: config.search.keep,
        tracker: config.search.tracker.into(),
        parallel: config.search.parallel,
        seed: config.search.seed,
    });

    let center = LatLon::new(config.center.lat, config.center.lon);
    tracing::info!(lat = center.lat, lon = center.lon, "searching for high points");
    let report = searcher.search_report(center)?;
    let json = serde_json::to_string_pretty(&Output::from(&report))?;

    match config.output_path {
        Some(path) => fs::write(path, json)?,
        None => println!("{json}"),
    }

    Ok(())
}
