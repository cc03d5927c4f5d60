
use crate::chunker::chunked;
use crate::engine::Engine;
use crate::error::BatchError;
use crate::executor::Execute;
use crate::mapping::Table;
use crate::value::Value;

/// Default rows per generated statement.
///
/// Chunking bounds the bound-parameter count of a single statement; 500 rows
/// keeps even wide tables under SQLite's host-parameter ceiling (32766 since
/// 3.32) while amortizing statement overhead.
pub const DEFAULT_CHUNK_ROWS: usize = 500;

/// Batched writer for one engine.
///
/// Splits the incoming row stream into fixed-size chunks, renders one
/// multi-row statement per chunk, and executes it through an [`Execute`]
/// implementation. Chunks are independent: a failure surfaces immediately,
/// and already-executed chunks stay written — callers wanting atomicity pass
/// a transaction-scoped executor.
pub struct BatchWriter {
    engine: Engine,
    chunk_rows: usize,
}

impl BatchWriter {
    pub fn new(engine: Engine) -> Self {
        Self {
            engine,
            chunk_rows: DEFAULT_CHUNK_ROWS,
        }
    }

    /// Set how many rows each generated statement carries.
    pub fn chunk_rows(mut self, rows: usize) -> Self {
        self.chunk_rows = rows;
        self
    }

    /// Upsert entities: rows whose key is absent are inserted, rows whose
    /// key exists get their non-key columns overwritten.
    ///
    /// Returns the summed affected-row count. Fails before executing
    /// anything if the mapping declares no key column.
    pub fn upsert<X, T, I>(&self, exec: &mut X, entities: I) -> Result<usize, BatchError>
    where
        X: Execute,
        T: Table,
        I: IntoIterator<Item = T>,
    {
        let plan = Plan::of::<T>()?;
        if plan.keys.is_empty() {
            return Err(BatchError::MissingKey(T::table().to_string()));
        }
        self.run_typed::<X, T, I>(exec, entities, &plan, true)
    }

    /// Plain chunked bulk insert of entities.
    pub fn insert<X, T, I>(&self, exec: &mut X, entities: I) -> Result<usize, BatchError>
    where
        X: Execute,
        T: Table,
        I: IntoIterator<Item = T>,
    {
        let plan = Plan::of::<T>()?;
        self.run_typed::<X, T, I>(exec, entities, &plan, false)
    }

    /// Untyped upsert: the caller names the table, its columns, and which of
    /// those columns form the key, and supplies rows of values matching the
    /// column list in order.
    pub fn upsert_rows<X, I>(
        &self,
        exec: &mut X,
        table: &str,
        columns: &[&str],
        keys: &[&str],
        rows: I,
    ) -> Result<usize, BatchError>
    where
        X: Execute,
        I: IntoIterator<Item = Vec<Value>>,
    {
        if columns.is_empty() {
            return Err(BatchError::NoWritableColumns(table.to_string()));
        }
        if keys.is_empty() {
            return Err(BatchError::MissingKey(table.to_string()));
        }
        for key in keys {
            if !columns.contains(key) {
                return Err(BatchError::UnknownKeyColumn {
                    table: table.to_string(),
                    key: key.to_string(),
                });
            }
        }
        self.run_rows(exec, table, columns, Some(keys), rows)
    }

    /// Untyped chunked bulk insert.
    pub fn insert_rows<X, I>(
        &self,
        exec: &mut X,
        table: &str,
        columns: &[&str],
        rows: I,
    ) -> Result<usize, BatchError>
    where
        X: Execute,
        I: IntoIterator<Item = Vec<Value>>,
    {
        if columns.is_empty() {
            return Err(BatchError::NoWritableColumns(table.to_string()));
        }
        self.run_rows(exec, table, columns, None, rows)
    }

    fn run_typed<X, T, I>(
        &self,
        exec: &mut X,
        entities: I,
        plan: &Plan,
        upsert: bool,
    ) -> Result<usize, BatchError>
    where
        X: Execute,
        T: Table,
        I: IntoIterator<Item = T>,
    {
        let declared = T::columns().len();
        let mut affected = 0;

        for chunk in chunked(entities, self.chunk_rows)? {
            let rows = chunk.len();
            let mut params = Vec::with_capacity(rows * plan.columns.len());

            for entity in &chunk {
                let values = entity.values();
                if values.len() != declared {
                    return Err(BatchError::ColumnCountMismatch {
                        expected: declared,
                        got: values.len(),
                    });
                }

                // Keep only the writable slots, preserving column order.
                let mut slots = plan.slots.iter().copied().peekable();
                for (i, value) in values.into_iter().enumerate() {
                    if slots.peek() == Some(&i) {
                        params.push(value);
                        slots.next();
                    }
                }
            }

            let keys = if upsert {
                Some(plan.keys.as_slice())
            } else {
                None
            };
            affected += self.execute_chunk(exec, &plan.table, &plan.columns, keys, rows, &params)?;
        }

        Ok(affected)
    }

    fn run_rows<X, I>(
        &self,
        exec: &mut X,
        table: &str,
        columns: &[&str],
        keys: Option<&[&str]>,
        rows: I,
    ) -> Result<usize, BatchError>
    where
        X: Execute,
        I: IntoIterator<Item = Vec<Value>>,
    {
        let mut affected = 0;

        for chunk in chunked(rows, self.chunk_rows)? {
            let count = chunk.len();
            let mut params = Vec::with_capacity(count * columns.len());

            for row in chunk {
                if row.len() != columns.len() {
                    return Err(BatchError::ColumnCountMismatch {
                        expected: columns.len(),
                        got: row.len(),
                    });
                }
                params.extend(row);
            }

            affected += self.execute_chunk(exec, table, columns, keys, count, &params)?;
        }

        Ok(affected)
    }

    fn execute_chunk<X: Execute>(
        &self,
        exec: &mut X,
        table: &str,
        columns: &[&str],
        keys: Option<&[&str]>,
        rows: usize,
        params: &[Value],
    ) -> Result<usize, BatchError> {
        let sql = match keys {
            Some(keys) => self.engine.upsert_sql(table, columns, keys, rows),
            None => self.engine.insert_sql(table, columns, rows),
        };
        exec.execute(&sql, params)
    }
}

/// Write plan derived from a [`Table`] mapping: the writable column names,
/// the key column names, and which `values()` slots they come from.
struct Plan {
    table: String,
    columns: Vec<&'static str>,
    keys: Vec<&'static str>,
    slots: Vec<usize>,
}

impl Plan {
    fn of<T: Table>() -> Result<Self, BatchError> {
        let mut columns = Vec::new();
        let mut keys = Vec::new();
        let mut slots = Vec::new();

        for (i, column) in T::columns().iter().enumerate() {
            if !column.is_writable() {
                continue;
            }
            columns.push(column.name);
            slots.push(i);
            if column.is_key() {
                keys.push(column.name);
            }
        }

        if columns.is_empty() {
            return Err(BatchError::NoWritableColumns(T::table().to_string()));
        }

        Ok(Self {
            table: T::table().to_string(),
            columns,
            keys,
            slots,
        })
    }
}
