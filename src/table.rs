//! A single table of the mocked database. Rows are kept in memory and
//! keyed by a string; each row holds the `Fields` extracted from the
//! `FieldValuePairs` it was set with.

use crate::{DbConnector, FieldValuePairs, Fields, Result, TableError};
use std::collections::HashMap;

/// An in-memory table, backed by a `HashMap<String, Fields>`.
#[derive(Clone, Debug)]
pub struct Table {
    table_name: String,
    rows: HashMap<String, Fields>,
}

impl Table {
    /// Constructs a new, empty table called `table_name`. The database
    /// handle is accepted for parity with the real client only.
    pub fn new(_db: &DbConnector, table_name: impl Into<String>) -> Table {
        let table_name = table_name.into();
        log::trace!("New table `{}`", table_name);
        Table {
            table_name,
            rows: HashMap::new(),
        }
    }

    /// The name this table was constructed with.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Stores the fields of `fvs` as the row for `key`. If the row
    /// already exists, its previous fields are overwritten.
    pub fn set(&mut self, key: impl Into<String>, fvs: FieldValuePairs) {
        let key = key.into();
        log::debug!("{}: set `{}` to {:?}", self.table_name, key, fvs.fields());
        self.rows.insert(key, fvs.into_fields());
    }

    /// Returns a copy of the row for `key`, if it is present.
    pub fn get(&self, key: &str) -> Option<Fields> {
        self.rows.get(key).map(Fields::to_owned)
    }

    /// Returns a copy of a single field of the row for `key`. `None` if
    /// either the row or the field is missing.
    pub fn hget(&self, key: &str, field: &str) -> Option<String> {
        self.rows
            .get(key)
            .and_then(|fields| fields.get(field))
            .map(String::to_owned)
    }

    /// Keys of all rows in the table, in sorted order.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.rows.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Removes the row for `key`.
    ///
    /// # Errors
    ///
    /// Returns `TableError::NonExistentKey` if the given key is not
    /// found.
    pub fn del(&mut self, key: &str) -> Result<()> {
        match self.rows.remove(key) {
            Some(_old) => {
                log::debug!("{}: deleted `{}`", self.table_name, key);
                Ok(())
            }
            None => Err(TableError::NonExistentKey(key.to_owned())),
        }
    }
}
