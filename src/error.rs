use thiserror::Error;

/// Convenience alias for `Result<T, TableError>`.
pub type Result<T> = std::result::Result<T, TableError>;

/// All errors that can be encountered by a `Table`.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TableError {
    /// Error on delete with a non-existent key
    #[error("No such key: `{0}`")]
    NonExistentKey(String),
}
