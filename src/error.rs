use thiserror::Error;

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("Chunk size must be at least 1 (got {0})")]
    InvalidChunkSize(usize),

    #[error("Table `{0}` has no key column; upsert needs at least one")]
    MissingKey(String),

    #[error("Table `{0}` has no writable columns")]
    NoWritableColumns(String),

    #[error("Key column `{key}` is not in the column list for table `{table}`")]
    UnknownKeyColumn { table: String, key: String },

    #[error("Row has {got} values but the statement binds {expected} columns")]
    ColumnCountMismatch { expected: usize, got: usize },

    #[error("SQLite execution failed: {0}")]
    Sqlite(#[from] rusqlite::Error),
}
