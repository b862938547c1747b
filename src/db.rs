/// Name of the state database.
pub const STATE_DB: &str = "STATE_DB";

/// Handle to a (mocked) database. Tables are constructed with one to
/// match the real client's calling convention, but never read from it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DbConnector {
    name: String,
}

impl DbConnector {
    /// Constructs a handle for the database called `name`.
    pub fn new(name: impl Into<String>) -> DbConnector {
        DbConnector { name: name.into() }
    }

    /// The database name this handle was created with.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for DbConnector {
    fn default() -> Self {
        DbConnector::new(STATE_DB)
    }
}
