use std::fs;
use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use crate::kernel::services::ports::durable::{DurableStore, Result, StoreError};

const SCHEMA_VERSION: u64 = 1;
const SCHEMA_FIELD: &str = "schema";
const ENTRIES_FIELD: &str = "entries";

/// One JSON file per named store:
/// `{ "schema": 1, "entries": { "<key>": <value>, ... } }`.
///
/// Writes go through a temp file + rename so a crashed write never leaves
/// a half-written store behind. Legacy files without a schema field (the
/// bare entry object) are migrated in place on open.
pub struct JsonStore {
    path: PathBuf,
    entries: Map<String, Value>,
}

impl JsonStore {
    pub fn open(dir: &Path, name: &str) -> Result<Self> {
        let path = dir.join(format!("{}.json", name));

        if !path.exists() {
            let store = Self {
                path,
                entries: Map::new(),
            };
            store.write_file()?;
            tracing::info!(path = %store.path.display(), "created durable store");
            return Ok(store);
        }

        let data = fs::read_to_string(&path)?;
        let value: Value = serde_json::from_str(&data)
            .map_err(|e| StoreError::Corrupt(format!("{}: {}", path.display(), e)))?;
        let Value::Object(mut root) = value else {
            return Err(StoreError::Corrupt(format!(
                "{}: not a JSON object",
                path.display()
            )));
        };

        let schema = match root.get(SCHEMA_FIELD) {
            Some(value) => value.as_u64().ok_or_else(|| {
                StoreError::Corrupt(format!("{}: non-numeric schema", path.display()))
            })?,
            // Pre-versioning layout: the whole object is the entry map.
            None => 0,
        };

        if schema > SCHEMA_VERSION {
            return Err(StoreError::UnsupportedSchema(schema as u32));
        }

        if schema == 0 {
            let store = Self {
                path: path.clone(),
                entries: root,
            };
            store.write_file()?;
            tracing::info!(path = %path.display(), "migrated durable store to schema 1");
            return Ok(store);
        }

        let entries = match root.remove(ENTRIES_FIELD) {
            Some(Value::Object(entries)) => entries,
            Some(_) => {
                return Err(StoreError::Corrupt(format!(
                    "{}: entries is not an object",
                    path.display()
                )))
            }
            None => Map::new(),
        };

        Ok(Self { path, entries })
    }

    fn write_file(&self) -> Result<()> {
        let mut root = Map::new();
        root.insert(SCHEMA_FIELD.to_string(), Value::from(SCHEMA_VERSION));
        root.insert(ENTRIES_FIELD.to_string(), Value::Object(self.entries.clone()));
        let data = serde_json::to_string_pretty(&Value::Object(root))
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl DurableStore for JsonStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.get(key).cloned())
    }

    fn put(&mut self, key: &str, value: Value) -> Result<()> {
        self.entries.insert(key.to_string(), value);
        self.write_file()
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/json_store.rs"]
mod tests;
