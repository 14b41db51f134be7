//! Console rendering of a [`VersionReport`].
//!
//! Mismatch rows are data and go to `out`; "doesn't contain" diagnostics go to
//! `err`. Both follow manifest order. Rows must stay on stdout so that
//! redirecting stdout captures the report and nothing else.

use std::io::{self, Write};

use crate::{
    compare::{Finding, VersionReport},
    table,
};

pub const REPORT_HEADER: [&str; 3] = ["id", "keyboard.csv", "kmp.json"];

pub fn missing_message(id: &str) -> String {
    format!("keyboards.csv doesn't contain {id}")
}

/// Writes the tab-separated header followed by one row per mismatch.
pub fn write_tsv<O, E>(report: &VersionReport, out: &mut O, err: &mut E) -> io::Result<()>
where
    O: Write,
    E: Write,
{
    writeln!(out, "{}", REPORT_HEADER.join("\t"))?;
    for finding in &report.findings {
        match finding {
            Finding::Mismatch {
                id,
                csv_version,
                manifest_version,
            } => writeln!(
                out,
                "{id}\t{}\t{}",
                csv_version.as_deref().unwrap_or_default(),
                manifest_version.as_deref().unwrap_or_default()
            )?,
            Finding::Missing { id } => writeln!(err, "{}", missing_message(id))?,
        }
    }
    Ok(())
}

/// Writes mismatches as an aligned table; missing keyboards are listed on `err`.
pub fn write_table<O, E>(report: &VersionReport, out: &mut O, err: &mut E) -> io::Result<()>
where
    O: Write,
    E: Write,
{
    let mut rows = Vec::new();
    for finding in &report.findings {
        match finding {
            Finding::Mismatch {
                id,
                csv_version,
                manifest_version,
            } => rows.push(vec![
                id.clone(),
                csv_version.clone().unwrap_or_default(),
                manifest_version.clone().unwrap_or_default(),
            ]),
            Finding::Missing { id } => writeln!(err, "{}", missing_message(id))?,
        }
    }
    write!(out, "{}", table::render_table(&REPORT_HEADER, &rows))
}
