pub mod cli;
pub mod compare;
pub mod error;
pub mod keyboards;
pub mod manifest;
pub mod report;
pub mod table;

use std::{
    env,
    io::{self, Write},
    path::Path,
    sync::OnceLock,
};

use anyhow::{Context, Result};
use clap::Parser;
use log::{LevelFilter, debug, info};

use crate::{
    cli::{CheckArgs, CheckConfig},
    error::{CheckError, InputKind},
    manifest::Manifest,
};

pub const COMPLETION_MESSAGE: &str = "All done processing";

static LOGGER: OnceLock<()> = OnceLock::new();

/// Quiet runs only log warnings so stderr stays readable next to the
/// "doesn't contain" diagnostics. `RUST_LOG` overrides either default.
fn init_logging(config: &CheckConfig) {
    let default_level = if config.verbose {
        LevelFilter::Info
    } else {
        LevelFilter::Warn
    };
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("kmp_version_check", default_level);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    let args = match CheckArgs::try_parse() {
        Ok(args) => args,
        // --help and --version render to stdout and are not failures.
        Err(err) if !err.use_stderr() => {
            err.print().context("Writing help text")?;
            return Ok(());
        }
        Err(err) => return Err(CheckError::Usage(usage_message(&err)).into()),
    };
    let config = CheckConfig::from(&args);
    init_logging(&config);
    debug!("Run configuration: {config:?}");
    execute(&args, config)
}

/// Runs one check: validate inputs, load both sources, compare, report.
pub fn execute(args: &CheckArgs, config: CheckConfig) -> Result<()> {
    if config.verbose {
        echo_parameters(args).context("Writing parameters")?;
    }
    let (csv_path, json_path) = resolve_inputs(args)?;

    let table = keyboards::load_keyboards(csv_path)?;
    let manifest = Manifest::load(json_path)?;
    if let Some(name) = manifest.package_name() {
        info!(
            "Package '{name}' version {}",
            manifest.package_version().unwrap_or("<unset>")
        );
    }

    let report = compare::compare_versions(&table, &manifest.keyboards);

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    let written = if config.table {
        report::write_table(&report, &mut out, &mut err)
    } else {
        report::write_tsv(&report, &mut out, &mut err)
    };
    written.context("Writing version report")?;
    writeln!(out, "{COMPLETION_MESSAGE}").context("Writing version report")?;
    out.flush().context("Writing version report")?;

    if config.strict && !report.is_clean() {
        return Err(CheckError::Findings {
            count: report.findings.len(),
        }
        .into());
    }
    Ok(())
}

fn echo_parameters(args: &CheckArgs) -> io::Result<()> {
    let mut out = io::stdout().lock();
    writeln!(out, "Parameters:")?;
    if let Some(csv) = &args.csv {
        writeln!(out, "keyboards.csv path: \"{}\"", csv.display())?;
    }
    if let Some(json) = &args.json {
        writeln!(out, "JSON file: \"{}\"", json.display())?;
    }
    writeln!(out)
}

/// Clap's rendered error without its leading `error: `, which `main` adds back.
fn usage_message(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    rendered
        .trim_start_matches("error: ")
        .trim_end()
        .to_string()
}

/// Checks that every supplied path exists before anything is read, then
/// requires both inputs.
fn resolve_inputs(args: &CheckArgs) -> Result<(&Path, &Path), CheckError> {
    if let Some(path) = &args.csv
        && !path.exists()
    {
        return Err(CheckError::FileNotFound {
            kind: InputKind::KeyboardsCsv,
            path: path.clone(),
        });
    }
    if let Some(path) = &args.json
        && !path.exists()
    {
        return Err(CheckError::FileNotFound {
            kind: InputKind::KmpJson,
            path: path.clone(),
        });
    }
    match (args.csv.as_deref(), args.json.as_deref()) {
        (Some(csv), Some(json)) => Ok((csv, json)),
        (None, None) => Err(CheckError::Usage(
            "Need to pass another parameters <-c> <-j>".into(),
        )),
        (Some(_), None) => Err(CheckError::Usage(
            "Need to pass kmp.json path with <-j>".into(),
        )),
        (None, Some(_)) => Err(CheckError::Usage(
            "Need to pass keyboards.csv path with <-c>".into(),
        )),
    }
}
