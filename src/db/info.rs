use crate::db::pool::DbPool;
use crate::errors::AppResult;
use rusqlite::OptionalExtension;
use std::fs;

/// Print a short database report for `shelflog db --info`.
pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("• File: {}", db_path);
    println!("• Size: {:.2} MB", file_mb);

    let books: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM books", [], |row| row.get(0))?;
    println!("• Books: {}", books);

    let activities: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM activities", [], |row| row.get(0))?;
    println!("• Activity entries: {}", activities);

    let last_activity: Option<String> = pool
        .conn
        .query_row(
            "SELECT timestamp FROM activities ORDER BY timestamp DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;
    println!(
        "• Last activity: {}",
        last_activity.unwrap_or_else(|| "--".to_string())
    );

    println!();
    Ok(())
}

pub fn vacuum(pool: &mut DbPool) -> AppResult<()> {
    pool.conn.execute("VACUUM", [])?;
    Ok(())
}

pub fn integrity_check(pool: &mut DbPool) -> AppResult<String> {
    let result: String = pool
        .conn
        .query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
    Ok(result)
}
