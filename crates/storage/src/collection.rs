//! JsonCollection: one record kind persisted as one JSON file
//!
//! ## Load
//!
//! 1. Read the whole file (missing/unreadable -> `Error::Io`)
//! 2. Parse JSON (malformed -> `SchemaError::MalformedJson`)
//! 3. Validate against `R::SCHEMA` (-> `SchemaError::Violation`)
//! 4. Map each element to `R`, preserving file order
//!
//! ## Save
//!
//! 1. Render every record to its map form, preserving order
//! 2. Validate the rendered payload against the same schema used on load
//! 3. Pretty-print (2-space indent, UTF-8, trailing newline) and replace the
//!    file atomically (temp file + fsync + rename)
//!
//! Validation happens before anything touches the disk, so a rejected save
//! leaves the previous file byte-identical.

use rackstore_core::schema::{type_name, validate_collection};
use rackstore_core::{Collection, Error, Record, Result, SchemaError};
use serde_json::Value;
use std::fs;
use std::io::Write;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A JSON-array file holding every record of kind `R`
///
/// Stateless: nothing is cached between calls, every `load` reads the file
/// and every `save` rewrites it.
#[derive(Debug)]
pub struct JsonCollection<R> {
    path: PathBuf,
    _record: PhantomData<fn() -> R>,
}

impl<R> Clone for JsonCollection<R> {
    fn clone(&self) -> Self {
        JsonCollection::new(self.path.clone())
    }
}

impl<R> JsonCollection<R> {
    /// Collection backed by the file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonCollection {
            path: path.into(),
            _record: PhantomData,
        }
    }

    /// Backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn source_label(&self) -> String {
        self.path.display().to_string()
    }
}

impl<R: Record> Collection for JsonCollection<R> {
    type Item = R;

    fn load(&self) -> Result<Vec<R>> {
        let source = self.source_label();
        let text = fs::read_to_string(&self.path).map_err(|e| Error::io(&self.path, e))?;
        let payload: Value = serde_json::from_str(&text)
            .map_err(|e| SchemaError::malformed(source.as_str(), e.to_string()))?;
        validate_collection(&payload, R::SCHEMA, &source)?;

        let items = match payload {
            Value::Array(items) => items,
            other => {
                return Err(SchemaError::violation(
                    source,
                    "payload",
                    format!("expected list, got {}", type_name(&other)),
                )
                .into())
            }
        };

        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| parse_item::<R>(item, &source, index))
            .collect::<Result<Vec<R>>>()?;

        debug!(
            target: "rackstore::store",
            path = %source,
            records = records.len(),
            "Loaded collection"
        );
        Ok(records)
    }

    fn save(&self, items: &[R]) -> Result<()> {
        let source = self.source_label();
        let rendered = items
            .iter()
            .map(|item| item.to_map().map(Value::Object))
            .collect::<serde_json::Result<Vec<Value>>>()
            .map_err(|e| Error::Serialization(format!("{}: {}", R::LABEL, e)))?;
        let payload = Value::Array(rendered);
        validate_collection(&payload, R::SCHEMA, &source)?;

        let mut text = serde_json::to_string_pretty(&payload)
            .map_err(|e| Error::Serialization(format!("{}: {}", R::LABEL, e)))?;
        text.push('\n');
        write_atomic(&self.path, text.as_bytes())?;

        debug!(
            target: "rackstore::store",
            path = %source,
            records = items.len(),
            "Saved collection"
        );
        Ok(())
    }
}

fn parse_item<R: Record>(item: Value, source: &str, index: usize) -> Result<R> {
    let location = format!("item {}", index);
    match item {
        Value::Object(map) => R::from_map(map)
            .map_err(|e| SchemaError::violation(source, location, e.to_string()).into()),
        other => Err(SchemaError::violation(
            source,
            location,
            format!("expected object, got {}", type_name(&other)),
        )
        .into()),
    }
}

/// Replace `path` with `bytes`: temp file + fsync + rename
///
/// Missing parent directories are created. The temp file is removed if any
/// step fails, and the target is never left partially written.
pub(crate) fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
        }
    }

    let mut tmp_name = path.as_os_str().to_os_string();
    tmp_name.push(".tmp");
    let tmp_path = PathBuf::from(tmp_name);

    let result = (|| -> std::io::Result<()> {
        let mut file = fs::File::create(&tmp_path)?;
        file.write_all(bytes)?;
        file.sync_all()?;
        Ok(())
    })();
    if let Err(e) = result {
        let _ = fs::remove_file(&tmp_path);
        return Err(Error::io(&tmp_path, e));
    }

    fs::rename(&tmp_path, path).map_err(|e| {
        let _ = fs::remove_file(&tmp_path);
        Error::io(path, e)
    })
}
