use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database schema.
/// Idempotent; safe to call on every open.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS books (
            id INTEGER PRIMARY KEY,
            title TEXT NOT NULL,
            author TEXT NOT NULL DEFAULT '未分類作者',
            category TEXT NOT NULL DEFAULT '新書-待借',
            note TEXT NOT NULL DEFAULT '',
            date TEXT NOT NULL DEFAULT '',
            created_at TEXT NOT NULL DEFAULT ''
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS activities (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp TEXT NOT NULL,
            date TEXT NOT NULL,
            time TEXT NOT NULL,
            action TEXT NOT NULL,
            book_id INTEGER NOT NULL,
            book_title TEXT NOT NULL,
            book_author TEXT NOT NULL DEFAULT '',
            book_category TEXT NOT NULL DEFAULT '',
            details TEXT NOT NULL DEFAULT '{}'
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_activities_date ON activities(date)",
        [],
    )?;

    Ok(())
}
