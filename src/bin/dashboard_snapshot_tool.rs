use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indexmap::IndexMap;
use survey_facets::api::{Dashboard, DashboardConfig};
use survey_facets::core::{CellValue, ColumnId, Dataset, Selection};
use survey_facets::telemetry;

const USAGE: &str = "usage: dashboard_snapshot_tool --dataset <records.json> --config <dashboard.json> [--columns <columns.json>] [--selection <selection.json>] --output <frame.json>";

#[derive(Debug)]
struct CliArgs {
    dataset: PathBuf,
    config: PathBuf,
    columns: Option<PathBuf>,
    selection: Option<PathBuf>,
    output: PathBuf,
}

fn main() {
    let _ = telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let records: Vec<IndexMap<String, CellValue>> = read_json(&args.dataset)?;
    let dataset = match &args.columns {
        Some(path) => {
            let columns: Vec<ColumnId> = read_json(path)?;
            Dataset::from_records_with_columns(columns, records)
        }
        None => Dataset::from_records(records),
    }
    .map_err(|err| err.to_string())?;

    let raw_config = read_to_string(&args.config)?;
    let config = DashboardConfig::from_json_str(&raw_config).map_err(|err| err.to_string())?;

    let selection = match &args.selection {
        Some(path) => read_json::<Selection>(path)?,
        None => Selection::new(),
    };

    let dashboard = Dashboard::new(Arc::new(dataset), config).map_err(|err| err.to_string())?;
    let frame = dashboard
        .compute(&selection)
        .map_err(|err| err.to_string())?;
    let payload = frame
        .to_json_contract_v1_pretty()
        .map_err(|err| err.to_string())?;

    fs::write(&args.output, payload)
        .map_err(|err| format!("failed to write `{}`: {err}", args.output.display()))
}

fn read_to_string(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|err| format!("failed to read `{}`: {err}", path.display()))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let raw = read_to_string(path)?;
    serde_json::from_str(&raw)
        .map_err(|err| format!("invalid json in `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);

    let mut dataset = None::<PathBuf>;
    let mut config = None::<PathBuf>;
    let mut columns = None::<PathBuf>;
    let mut selection = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        let mut value = || {
            args.next()
                .map(PathBuf::from)
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match flag.as_str() {
            "--dataset" => dataset = Some(value()?),
            "--config" => config = Some(value()?),
            "--columns" => columns = Some(value()?),
            "--selection" => selection = Some(value()?),
            "--output" => output = Some(value()?),
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`\n{USAGE}")),
        }
    }

    Ok(CliArgs {
        dataset: dataset.ok_or_else(|| "missing --dataset".to_owned())?,
        config: config.ok_or_else(|| "missing --config".to_owned())?,
        columns,
        selection,
        output: output.ok_or_else(|| "missing --output".to_owned())?,
    })
}
