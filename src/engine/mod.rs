mod mysql;
mod sqlite;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};

/// Supported database engines.
///
/// The engine is picked when the writer is configured, and each variant owns
/// its SQL rendering. An unsupported engine is therefore unrepresentable
/// instead of being a runtime dispatch failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    Sqlite,
    Mysql,
}

impl Engine {
    /// Render a multi-row upsert statement for `rows` rows.
    ///
    /// SQLite upserts via `REPLACE INTO`; MySQL via
    /// `INSERT … ON DUPLICATE KEY UPDATE` over the non-key columns.
    pub(crate) fn upsert_sql(
        &self,
        table: &str,
        columns: &[&str],
        keys: &[&str],
        rows: usize,
    ) -> String {
        match self {
            Engine::Sqlite => sqlite::replace_into(table, columns, rows),
            Engine::Mysql => mysql::insert_on_duplicate_key(table, columns, keys, rows),
        }
    }

    /// Render a multi-row plain insert statement for `rows` rows.
    pub(crate) fn insert_sql(&self, table: &str, columns: &[&str], rows: usize) -> String {
        match self {
            Engine::Sqlite => sqlite::insert_into(table, columns, rows),
            Engine::Mysql => mysql::insert_into(table, columns, rows),
        }
    }
}
