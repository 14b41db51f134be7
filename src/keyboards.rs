//! Reader for the `keyboards.csv` export.
//!
//! The export has a header line followed by rows with eight fixed columns:
//!
//! | position | field |
//! |----------|-------|
//! | 0 | shortname |
//! | 1 | keyboard id (table key) |
//! | 2 | name |
//! | 3 | region |
//! | 4 | web keyboard flag |
//! | 5 | version |
//! | 6 | language id |
//! | 7 | language name |
//!
//! Fields are split on literal commas. Quoted fields are **not** supported: a
//! comma inside a value shifts every later column of that row. The first line is
//! discarded without looking at it.

use std::{collections::HashMap, fs, path::Path};

use log::{debug, info, warn};

use crate::error::{CheckError, InputKind, ParseError};

const SHORTNAME_COL: usize = 0;
const ID_COL: usize = 1;
const NAME_COL: usize = 2;
const REGION_COL: usize = 3;
const WEB_KEYBOARD_COL: usize = 4;
const VERSION_COL: usize = 5;
const LANGUAGE_ID_COL: usize = 6;
const LANGUAGE_NAME_COL: usize = 7;

/// One data row of keyboards.csv. A `None` field means the row was too short to
/// reach that column; an empty cell is `Some("")`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardRecord {
    pub shortname: Option<String>,
    pub name: Option<String>,
    pub region: Option<String>,
    pub web_keyboard_flag: Option<String>,
    pub version: Option<String>,
    pub language_id: Option<String>,
    pub language_name: Option<String>,
}

impl KeyboardRecord {
    fn from_fields(fields: &csv::StringRecord) -> Self {
        let field = |idx: usize| fields.get(idx).map(str::to_string);
        Self {
            shortname: field(SHORTNAME_COL),
            name: field(NAME_COL),
            region: field(REGION_COL),
            web_keyboard_flag: field(WEB_KEYBOARD_COL),
            version: field(VERSION_COL),
            language_id: field(LANGUAGE_ID_COL),
            language_name: field(LANGUAGE_NAME_COL),
        }
    }
}

/// Keyboard rows keyed by keyboard id. Built once, then only read.
#[derive(Debug, Clone, Default)]
pub struct KeyboardTable {
    records: HashMap<String, KeyboardRecord>,
}

impl KeyboardTable {
    pub fn get(&self, id: &str) -> Option<&KeyboardRecord> {
        self.records.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.records.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn insert(&mut self, id: String, record: KeyboardRecord) {
        if let Some(previous) = self.records.insert(id.clone(), record) {
            debug!(
                "Duplicate keyboard id '{id}' replaces earlier row (version {:?})",
                previous.version
            );
        }
    }
}

/// Parses the raw text of keyboards.csv into a [`KeyboardTable`].
///
/// Rows without a keyboard id are skipped. When an id appears more than once
/// the last row wins.
pub fn parse_keyboards(text: &str) -> Result<KeyboardTable, ParseError> {
    let body = match text.split_once('\n') {
        Some((_header, rest)) => rest,
        None => "",
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b',')
        .quoting(false)
        .flexible(true)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_reader(body.as_bytes());

    let mut table = KeyboardTable::default();
    let mut record = csv::StringRecord::new();
    loop {
        // Positions are relative to `body`; the header occupies line 1 of the file.
        let line = reader.position().line() + 1;
        let more = reader
            .read_record(&mut record)
            .map_err(|source| ParseError::Csv { line, source })?;
        if !more {
            break;
        }
        let line = record.position().map_or(line, |pos| pos.line() + 1);
        strip_carriage_return(&mut record);
        if record.len() == 1 && record[0].is_empty() {
            continue;
        }
        match record.get(ID_COL) {
            Some(id) if !id.is_empty() => {
                table.insert(id.to_string(), KeyboardRecord::from_fields(&record));
            }
            _ => warn!("Skipping keyboards.csv line {line}: no keyboard id"),
        }
    }
    Ok(table)
}

/// Records end only at `\n`; a `\r` elsewhere stays inside its field. The one
/// left over from a `\r\n` ending is removed from the last field.
fn strip_carriage_return(record: &mut csv::StringRecord) {
    if record.iter().last().is_some_and(|field| field.ends_with('\r')) {
        let mut fields = record.iter().map(str::to_string).collect::<Vec<_>>();
        if let Some(last) = fields.last_mut() {
            last.pop();
        }
        *record = csv::StringRecord::from(fields);
    }
}

/// Reads and parses keyboards.csv from disk.
pub fn load_keyboards(path: &Path) -> Result<KeyboardTable, CheckError> {
    info!("Loading keyboards from {path:?}");
    let text = fs::read_to_string(path).map_err(|source| CheckError::Io {
        kind: InputKind::KeyboardsCsv,
        path: path.to_path_buf(),
        source,
    })?;
    let table = parse_keyboards(&text)?;
    info!("Loaded {} keyboard(s) from {path:?}", table.len());
    Ok(table)
}
