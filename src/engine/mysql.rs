//! MySQL rendering: `INSERT … ON DUPLICATE KEY UPDATE` upserts, bare `?`
//! placeholders, `` `ident` `` quoting.

pub(super) fn quote_ident(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

fn column_list(columns: &[&str]) -> String {
    columns
        .iter()
        .map(|c| quote_ident(c))
        .collect::<Vec<_>>()
        .join(", ")
}

fn values_clause(columns: usize, rows: usize) -> String {
    let tuple = format!("({})", vec!["?"; columns].join(", "));
    vec![tuple; rows].join(", ")
}

pub(super) fn insert_into(table: &str, columns: &[&str], rows: usize) -> String {
    format!(
        "INSERT INTO {} ({}) VALUES {}",
        quote_ident(table),
        column_list(columns),
        values_clause(columns.len(), rows)
    )
}

pub(super) fn insert_on_duplicate_key(
    table: &str,
    columns: &[&str],
    keys: &[&str],
    rows: usize,
) -> String {
    // On key collision only the non-key columns change; assigning a key to
    // itself would be a no-op anyway.
    let mut updates: Vec<String> = columns
        .iter()
        .filter(|c| !keys.contains(c))
        .map(|c| format!("{0} = VALUES({0})", quote_ident(c)))
        .collect();

    if updates.is_empty() {
        // Every column is a key: keep the clause syntactically valid with a
        // self-assignment that changes nothing.
        let first = quote_ident(columns[0]);
        updates.push(format!("{0} = {0}", first));
    }

    format!(
        "{} ON DUPLICATE KEY UPDATE {}",
        insert_into(table, columns, rows),
        updates.join(", ")
    )
}
