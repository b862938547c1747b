#![deny(missing_docs)]
//! An in-memory stand-in for the state database table client. Rows
//! live in a `HashMap` owned by each `Table`, so every test gets its
//! own isolated store and nothing touches a real database.

pub use db::{DbConnector, STATE_DB};
pub use error::{Result, TableError};
pub use field_value::{FieldValuePairs, Fields};
pub use table::Table;

mod db;
mod error;
mod field_value;
mod table;
