#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::{TempDir, tempdir};

pub const SAMPLE_CSV: &str = "\
Shortname,ID,Name,Region,Web_9_0_Keyboard,Version,LanguageID,LanguageName
Shortname1,kbd1,Name1,US,0,1.0,en,English
";

/// Builds a kmp.json document declaring the given `(id, version)` keyboards.
pub fn manifest_json(keyboards: &[(&str, &str)]) -> String {
    let entries = keyboards
        .iter()
        .map(|(id, version)| serde_json::json!({ "id": id, "version": version }))
        .collect::<Vec<_>>();
    serde_json::json!({ "keyboards": entries }).to_string()
}

/// Scratch directory helper that cleans up files automatically on drop.
pub struct TestWorkspace {
    temp_dir: TempDir,
}

impl TestWorkspace {
    /// Creates a fresh scratch directory for the current test case.
    pub fn new() -> Self {
        Self {
            temp_dir: tempdir().expect("temp dir"),
        }
    }

    /// Returns the root path for all files owned by this workspace.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Writes `contents` into a file under the workspace and returns the path.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        let mut file = File::create(&path).expect("create temp file");
        file.write_all(contents.as_bytes())
            .expect("write temp file contents");
        path
    }
}
