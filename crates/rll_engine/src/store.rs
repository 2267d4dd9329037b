//! Flat-file store of named level records.
//!
//! The backing file is a sequence of blocks: a header line `"; " + name`
//! followed by one or more non-empty data lines, conventionally separated
//! by a blank line. Data lines are joined with the row separator on load,
//! so encoded strings that were hand-wrapped across physical lines load
//! fine. Loading is deliberately tolerant; strictness lives in the codec.
//!
//! The file is treated as exclusively owned by one running instance. There
//! is no locking and no partial-write recovery: a crash in the middle of a
//! rewrite can corrupt the store.

use std::{
    fs::{self, OpenOptions},
    io::Write,
    path::{Path, PathBuf},
};

use lazy_static::lazy_static;
use regex::Regex;

use crate::{RllError, codec};

lazy_static! {
    static ref LEVEL_NAME: Regex = Regex::new(r"^Level (\d+)$").unwrap();
}

/// One named, encoded level. Names are unique within a store at any
/// instant but are not stable identifiers: deleting a record renumbers
/// everything after it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelRecord {
    pub name: String,
    pub encoded: String,
}

/// Ordered list of level records backed one-to-one by a flat text file.
pub struct LevelStore {
    path: PathBuf,
    records: Vec<LevelRecord>,
}

impl LevelStore {
    /// Loads the store from `path`.
    ///
    /// An unreadable or missing file is not fatal: the store starts empty,
    /// keeps operating in memory and logs a warning. Stray lines outside
    /// any header accumulate into the current record and never hard-fail.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let mut store = LevelStore { path, records: Vec::new() };
        match fs::read_to_string(&store.path) {
            Ok(text) => store.parse(&text),
            Err(err) => log::warn!("cannot read level file {}: {err}", store.path.display()),
        }
        store
    }

    fn parse(&mut self, text: &str) {
        let mut name: Option<String> = None;
        let mut data: Vec<&str> = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            if let Some(header) = line.strip_prefix("; ") {
                self.flush_record(name.take(), &mut data);
                name = Some(header.trim().to_string());
            } else if !line.is_empty() {
                data.push(line);
            }
        }
        self.flush_record(name, &mut data);
    }

    // Stray lines seen before the first header stay in the accumulator and
    // end up in the first record's data.
    fn flush_record(&mut self, name: Option<String>, data: &mut Vec<&str>) {
        if let Some(name) = name {
            self.records.push(LevelRecord {
                name,
                encoded: data.join(codec::ROW_SEPARATOR_STR),
            });
            data.clear();
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[LevelRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&LevelRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn check_index(&self, index: usize) -> crate::Result<()> {
        if index >= self.records.len() {
            return Err(RllError::RecordOutOfRange {
                index,
                count: self.records.len(),
            });
        }
        Ok(())
    }

    /// Updates an existing record's data in place and rewrites the whole
    /// file from the in-memory list.
    pub fn update(&mut self, index: usize, encoded: String) -> crate::Result<()> {
        self.check_index(index)?;
        self.records[index].encoded = encoded;
        self.rewrite()
    }

    /// Appends a new record and its file block without rewriting the rest.
    ///
    /// The name is `"Level " + n` where `n` is one past the highest numeric
    /// suffix among existing `"Level <digits>"` names, never `count + 1`,
    /// so a deleted slot's number is not reused as a duplicate while a
    /// higher number exists.
    pub fn add(&mut self, encoded: String) -> crate::Result<&LevelRecord> {
        let name = self.next_level_name();
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        write!(file, "\n; {name}\n{encoded}\n")?;
        self.records.push(LevelRecord { name, encoded });
        Ok(&self.records[self.records.len() - 1])
    }

    fn next_level_name(&self) -> String {
        let highest = self
            .records
            .iter()
            .filter_map(|record| LEVEL_NAME.captures(&record.name))
            .filter_map(|captures| captures[1].parse::<usize>().ok())
            .max()
            .unwrap_or(0);
        format!("Level {}", highest + 1)
    }

    /// Removes a record, renames every remaining record sequentially to
    /// `"Level 1"`, `"Level 2"`, … in list order and rewrites the file.
    /// Destructive to custom names.
    pub fn delete(&mut self, index: usize) -> crate::Result<()> {
        self.check_index(index)?;
        self.records.remove(index);
        for (i, record) in self.records.iter_mut().enumerate() {
            record.name = format!("Level {}", i + 1);
        }
        self.rewrite()
    }

    fn rewrite(&self) -> crate::Result<()> {
        let mut text = String::new();
        for record in &self.records {
            text.push_str("; ");
            text.push_str(&record.name);
            text.push('\n');
            text.push_str(&record.encoded);
            text.push_str("\n\n");
        }
        fs::write(&self.path, text)?;
        Ok(())
    }

    /// Writes one record's encoded string to a standalone file: a single
    /// level's data with no header, usable as an export/import unit.
    pub fn export_level(&self, index: usize, path: impl AsRef<Path>) -> crate::Result<()> {
        self.check_index(index)?;
        fs::write(path, format!("{}\n", self.records[index].encoded))?;
        Ok(())
    }

    /// Reads a standalone encoded level, validates that it decodes and
    /// appends it as a new record. Wrapped physical lines are joined the
    /// same way the store file is.
    pub fn import_level(&mut self, path: impl AsRef<Path>) -> crate::Result<&LevelRecord> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| RllError::open_file(path, err.to_string()))?;
        let encoded = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(codec::ROW_SEPARATOR_STR);
        codec::decode(&encoded)?;
        self.add(encoded)
    }
}
