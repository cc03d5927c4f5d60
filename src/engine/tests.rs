use super::*;

#[test]
fn test_sqlite_upsert_single_row() {
    let sql = Engine::Sqlite.upsert_sql("tracks", &["id", "title"], &["id"], 1);
    assert_eq!(sql, r#"REPLACE INTO "tracks" ("id", "title") VALUES (?1, ?2)"#);
}

#[test]
fn test_sqlite_upsert_numbers_placeholders_across_rows() {
    let sql = Engine::Sqlite.upsert_sql("tracks", &["id", "title"], &["id"], 3);
    assert_eq!(
        sql,
        r#"REPLACE INTO "tracks" ("id", "title") VALUES (?1, ?2), (?3, ?4), (?5, ?6)"#
    );
}

#[test]
fn test_sqlite_plain_insert() {
    let sql = Engine::Sqlite.insert_sql("tracks", &["id", "title"], 2);
    assert_eq!(
        sql,
        r#"INSERT INTO "tracks" ("id", "title") VALUES (?1, ?2), (?3, ?4)"#
    );
}

#[test]
fn test_sqlite_doubles_embedded_quotes() {
    let sql = Engine::Sqlite.insert_sql(r#"we"ird"#, &[r#"na"me"#], 1);
    assert_eq!(sql, r#"INSERT INTO "we""ird" ("na""me") VALUES (?1)"#);
}

#[test]
fn test_mysql_upsert_updates_non_key_columns() {
    let sql = Engine::Mysql.upsert_sql("tracks", &["id", "title", "plays"], &["id"], 2);
    assert_eq!(
        sql,
        "INSERT INTO `tracks` (`id`, `title`, `plays`) VALUES (?, ?, ?), (?, ?, ?) \
         ON DUPLICATE KEY UPDATE `title` = VALUES(`title`), `plays` = VALUES(`plays`)"
    );
}

#[test]
fn test_mysql_all_key_table_gets_noop_assignment() {
    let sql = Engine::Mysql.upsert_sql("pairs", &["a", "b"], &["a", "b"], 1);
    assert_eq!(
        sql,
        "INSERT INTO `pairs` (`a`, `b`) VALUES (?, ?) ON DUPLICATE KEY UPDATE `a` = `a`"
    );
}

#[test]
fn test_mysql_plain_insert() {
    let sql = Engine::Mysql.insert_sql("tracks", &["id", "title"], 2);
    assert_eq!(
        sql,
        "INSERT INTO `tracks` (`id`, `title`) VALUES (?, ?), (?, ?)"
    );
}

#[test]
fn test_mysql_doubles_embedded_backticks() {
    let sql = Engine::Mysql.insert_sql("we`ird", &["name"], 1);
    assert_eq!(sql, "INSERT INTO `we``ird` (`name`) VALUES (?)");
}
