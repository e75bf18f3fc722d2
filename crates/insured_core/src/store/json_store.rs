//! JSON file roster store.
//!
//! # Responsibility
//! - Encode/decode the roster document `{"database": [person, ...]}`.
//! - Replace the storage file atomically on save.
//!
//! # Invariants
//! - Record order in the file is registry insertion order.
//! - Decoded rosters have positive, unique ids.
//! - Save writes a sibling temp file and renames it over the target, so a
//!   failed save leaves the previous file intact.

use super::{CodecError, CodecResult, RosterStore};
use crate::model::person::Person;
use log::{error, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tempfile::NamedTempFile;

#[derive(Serialize)]
struct RosterDocumentRef<'a> {
    database: &'a [Person],
}

#[derive(Deserialize)]
struct RosterDocument {
    database: Vec<Person>,
}

/// Roster store backed by one pretty-printed JSON file.
#[derive(Debug, Clone)]
pub struct JsonRosterStore {
    path: PathBuf,
}

impl JsonRosterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_atomically(&self, persons: &[Person]) -> CodecResult<()> {
        let mut temp = NamedTempFile::new_in(parent_dir(&self.path))
            .map_err(|err| CodecError::io(&self.path, err))?;

        {
            let mut writer = BufWriter::new(temp.as_file_mut());
            encode_roster(&mut writer, persons, &self.path)?;
            writer
                .flush()
                .map_err(|err| CodecError::io(&self.path, err))?;
        }
        temp.as_file()
            .sync_all()
            .map_err(|err| CodecError::io(&self.path, err))?;

        temp.persist(&self.path)
            .map_err(|err| CodecError::io(&self.path, err.error))?;
        Ok(())
    }
}

impl RosterStore for JsonRosterStore {
    fn load(&self) -> CodecResult<Vec<Person>> {
        let started_at = Instant::now();
        info!("event=roster_load module=store status=start");

        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                info!(
                    "event=roster_load module=store status=ok source=absent records=0 duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                return Ok(Vec::new());
            }
            Err(err) => {
                let err = CodecError::io(&self.path, err);
                error!(
                    "event=roster_load module=store status=error duration_ms={} error_code={} error={}",
                    started_at.elapsed().as_millis(),
                    err.code(),
                    err
                );
                return Err(err);
            }
        };

        match decode_roster(BufReader::new(file), &self.path) {
            Ok(persons) => {
                info!(
                    "event=roster_load module=store status=ok source=file records={} duration_ms={}",
                    persons.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(persons)
            }
            Err(err) => {
                error!(
                    "event=roster_load module=store status=error duration_ms={} error_code={} error={}",
                    started_at.elapsed().as_millis(),
                    err.code(),
                    err
                );
                Err(err)
            }
        }
    }

    fn save(&self, persons: &[Person]) -> CodecResult<()> {
        let started_at = Instant::now();
        info!(
            "event=roster_save module=store status=start records={}",
            persons.len()
        );

        match self.write_atomically(persons) {
            Ok(()) => {
                info!(
                    "event=roster_save module=store status=ok records={} duration_ms={}",
                    persons.len(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=roster_save module=store status=error duration_ms={} error_code={} error={}",
                    started_at.elapsed().as_millis(),
                    err.code(),
                    err
                );
                Err(err)
            }
        }
    }
}

/// Writes the roster document for `persons` to `writer`.
///
/// `path` only labels errors.
pub fn encode_roster<W: Write>(
    mut writer: W,
    persons: &[Person],
    path: &Path,
) -> CodecResult<()> {
    serde_json::to_writer_pretty(&mut writer, &RosterDocumentRef { database: persons })
        .map_err(|err| CodecError::from_json(path, err))?;
    writer
        .write_all(b"\n")
        .map_err(|err| CodecError::io(path, err))
}

/// Reads a roster document and checks record invariants.
///
/// `path` only labels errors.
pub fn decode_roster<R: Read>(reader: R, path: &Path) -> CodecResult<Vec<Person>> {
    let document: RosterDocument =
        serde_json::from_reader(reader).map_err(|err| CodecError::from_json(path, err))?;

    let mut seen = HashSet::with_capacity(document.database.len());
    for (index, person) in document.database.iter().enumerate() {
        person
            .validate()
            .map_err(|err| CodecError::format(path, format!("record {index}: {err}")))?;
        if !seen.insert(person.id()) {
            return Err(CodecError::format(
                path,
                format!("record {index}: duplicate person id {}", person.id()),
            ));
        }
    }

    Ok(document.database)
}

fn parent_dir(path: &Path) -> &Path {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}
