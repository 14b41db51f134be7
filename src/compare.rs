//! Cross-checks manifest keyboards against the keyboards.csv table.
//!
//! Versions are compared as exact strings: `1.0` and `1.0.0`, or `1.0` and
//! ` 1.0`, are different versions.

use log::info;

use crate::{keyboards::KeyboardTable, manifest::ManifestKeyboard};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// The keyboard is in both sources with differing versions.
    Mismatch {
        id: String,
        csv_version: Option<String>,
        manifest_version: Option<String>,
    },
    /// The manifest names a keyboard that keyboards.csv does not list.
    Missing { id: String },
}

impl Finding {
    pub fn id(&self) -> &str {
        match self {
            Finding::Mismatch { id, .. } | Finding::Missing { id } => id,
        }
    }
}

/// Findings in manifest order. Matching keyboards produce nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionReport {
    pub checked: usize,
    pub findings: Vec<Finding>,
}

impl VersionReport {
    pub fn mismatches(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|finding| matches!(finding, Finding::Mismatch { .. }))
    }

    pub fn missing(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|finding| matches!(finding, Finding::Missing { .. }))
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

pub fn compare_versions(table: &KeyboardTable, keyboards: &[ManifestKeyboard]) -> VersionReport {
    let mut report = VersionReport {
        checked: keyboards.len(),
        findings: Vec::new(),
    };
    for keyboard in keyboards {
        match table.get(&keyboard.id) {
            None => report.findings.push(Finding::Missing {
                id: keyboard.id.clone(),
            }),
            Some(record) if record.version != keyboard.version => {
                report.findings.push(Finding::Mismatch {
                    id: keyboard.id.clone(),
                    csv_version: record.version.clone(),
                    manifest_version: keyboard.version.clone(),
                });
            }
            Some(_) => {}
        }
    }
    info!(
        "Checked {} keyboard(s): {} version mismatch(es), {} missing from keyboards.csv",
        report.checked,
        report.mismatches().count(),
        report.missing().count()
    );
    report
}
