//! SQLite rendering: `REPLACE INTO` upserts, `?N` placeholders, `"ident"` quoting.

pub(super) fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn column_list(columns: &[&str]) -> String {
    columns
        .iter()
        .map(|c| quote_ident(c))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `(?1, ?2), (?3, ?4), …` — one tuple per row, numbered across the whole
/// statement so flattened parameters bind positionally.
fn values_clause(columns: usize, rows: usize) -> String {
    let mut n = 0;
    let mut tuples = Vec::with_capacity(rows);
    for _ in 0..rows {
        let placeholders: Vec<String> = (0..columns)
            .map(|_| {
                n += 1;
                format!("?{}", n)
            })
            .collect();
        tuples.push(format!("({})", placeholders.join(", ")));
    }
    tuples.join(", ")
}

pub(super) fn replace_into(table: &str, columns: &[&str], rows: usize) -> String {
    format!(
        "REPLACE INTO {} ({}) VALUES {}",
        quote_ident(table),
        column_list(columns),
        values_clause(columns.len(), rows)
    )
}

pub(super) fn insert_into(table: &str, columns: &[&str], rows: usize) -> String {
    format!(
        "INSERT INTO {} ({}) VALUES {}",
        quote_ident(table),
        column_list(columns),
        values_clause(columns.len(), rows)
    )
}
