use rusqlite::Connection;

use crate::error::BatchError;
use crate::value::Value;

/// Execution seam between statement assembly and a concrete driver: run one
/// parameterized statement, report how many rows it touched.
///
/// `rusqlite::Connection` (and its transactions) are implemented here.
/// MySQL-family connections — or anything else that accepts SQL text with
/// positional parameters — implement this trait in the caller's crate; the
/// writer never needs to know which driver is underneath.
pub trait Execute {
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<usize, BatchError>;
}

fn run(conn: &Connection, sql: &str, params: &[Value]) -> Result<usize, BatchError> {
    let affected = conn.execute(sql, rusqlite::params_from_iter(params.iter()))?;
    Ok(affected)
}

impl Execute for Connection {
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<usize, BatchError> {
        run(self, sql, params)
    }
}

/// Transactions execute like plain connections; commit/rollback stays with
/// the caller.
impl Execute for rusqlite::Transaction<'_> {
    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<usize, BatchError> {
        run(self, sql, params)
    }
}
