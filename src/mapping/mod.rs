use serde::{Deserialize, Serialize};

use crate::value::Value;

/// How a column participates in batched writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnRole {
    /// Ordinary writable column.
    Data,
    /// Part of the primary key; decides which existing row an upsert matches.
    Key,
    /// Produced by the database (defaults, triggers, generated columns);
    /// never written by this crate.
    Computed,
}

/// Static descriptor for one mapped column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnDef {
    pub name: &'static str,
    pub role: ColumnRole,
}

impl ColumnDef {
    pub const fn data(name: &'static str) -> Self {
        Self {
            name,
            role: ColumnRole::Data,
        }
    }

    pub const fn key(name: &'static str) -> Self {
        Self {
            name,
            role: ColumnRole::Key,
        }
    }

    pub const fn computed(name: &'static str) -> Self {
        Self {
            name,
            role: ColumnRole::Computed,
        }
    }

    /// Whether batched writes bind this column. Key columns stay writable so
    /// inserts carry the key; only computed columns are skipped.
    pub fn is_writable(&self) -> bool {
        self.role != ColumnRole::Computed
    }

    pub fn is_key(&self) -> bool {
        self.role == ColumnRole::Key
    }
}

/// Mapping between an entity type and its table.
///
/// This is the explicit counterpart of what an ORM would discover by
/// reflection: the table name, the column list, and which columns are keys
/// or computed. Implement it per entity type (by hand or via a derive in a
/// downstream crate) and the writer can batch-insert and upsert that type.
///
/// # Example
/// ```ignore
/// struct Track {
///     id: i64,
///     title: String,
/// }
///
/// impl Table for Track {
///     fn table() -> &'static str {
///         "tracks"
///     }
///
///     fn columns() -> &'static [ColumnDef] {
///         const COLUMNS: [ColumnDef; 2] = [ColumnDef::key("id"), ColumnDef::data("title")];
///         &COLUMNS
///     }
///
///     fn values(&self) -> Vec<Value> {
///         vec![self.id.into(), self.title.clone().into()]
///     }
/// }
/// ```
pub trait Table {
    /// Table name, used (quoted) verbatim in generated SQL.
    fn table() -> &'static str;

    /// Column descriptors, one per mapped field.
    fn columns() -> &'static [ColumnDef];

    /// Values for this row: one per `columns()` entry, in the same order.
    /// Computed columns still occupy a slot (any value works there; the
    /// writer drops it by position before binding).
    fn values(&self) -> Vec<Value>;
}
