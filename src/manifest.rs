use std::{fs, path::Path, str::FromStr};

use log::info;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{CheckError, InputKind};

/// A keyboard declared by a package's kmp.json.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ManifestKeyboard {
    pub id: String,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PackageInfo {
    #[serde(default)]
    pub name: Option<InfoField>,
    #[serde(default)]
    pub version: Option<InfoField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct InfoField {
    pub description: String,
}

/// The parts of kmp.json the version check reads. Anything else in the
/// document is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    pub info: Option<PackageInfo>,
    pub keyboards: Vec<ManifestKeyboard>,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self, CheckError> {
        info!("Loading package manifest from {path:?}");
        let raw = fs::read_to_string(path).map_err(|source| CheckError::Io {
            kind: InputKind::KmpJson,
            path: path.to_path_buf(),
            source,
        })?;
        let manifest: Manifest = raw.parse()?;
        info!(
            "Manifest {:?} declares {} keyboard(s)",
            path,
            manifest.keyboards.len()
        );
        Ok(manifest)
    }

    pub fn package_name(&self) -> Option<&str> {
        self.info
            .as_ref()
            .and_then(|info| info.name.as_ref())
            .map(|field| field.description.as_str())
    }

    pub fn package_version(&self) -> Option<&str> {
        self.info
            .as_ref()
            .and_then(|info| info.version.as_ref())
            .map(|field| field.description.as_str())
    }
}

impl FromStr for Manifest {
    type Err = CheckError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let mut document: Value = serde_json::from_str(raw).map_err(CheckError::ManifestParse)?;
        let object = document
            .as_object_mut()
            .ok_or_else(|| CheckError::ManifestSchema("document is not an object".into()))?;

        let keyboards = match object.remove("keyboards") {
            Some(Value::Array(entries)) => entries
                .into_iter()
                .enumerate()
                .map(|(idx, entry)| {
                    serde_json::from_value::<ManifestKeyboard>(entry).map_err(|err| {
                        CheckError::ManifestSchema(format!("keyboards[{idx}]: {err}"))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?,
            Some(_) => {
                return Err(CheckError::ManifestSchema(
                    "'keyboards' is not an array".into(),
                ));
            }
            None => {
                return Err(CheckError::ManifestSchema(
                    "missing 'keyboards' array".into(),
                ));
            }
        };

        // Package info is informational only; a malformed block is dropped.
        let info = object
            .remove("info")
            .and_then(|value| serde_json::from_value::<PackageInfo>(value).ok());

        Ok(Manifest { info, keyboards })
    }
}
