use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::activity::{ActionKind, Activity, ActivityDetails};
use rusqlite::{Connection, Result, Row, params};

fn map_row(row: &Row) -> Result<Activity> {
    let action_str: String = row.get("action")?;
    let action = ActionKind::from_db_str(&action_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            format!("invalid action kind: {}", action_str).into(),
        )
    })?;

    let details_json: String = row.get("details")?;
    let details: ActivityDetails = serde_json::from_str(&details_json).map_err(|e| {
        rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
    })?;

    Ok(Activity {
        id: row.get("id")?,
        timestamp: row.get("timestamp")?,
        date: row.get("date")?,
        time: row.get("time")?,
        action,
        book_id: row.get("book_id")?,
        book_title: row.get("book_title")?,
        book_author: row.get("book_author")?,
        book_category: row.get("book_category")?,
        details,
    })
}

/// Append one log entry. Entries are immutable once written.
pub fn insert_activity(conn: &Connection, act: &Activity) -> AppResult<()> {
    let details_json =
        serde_json::to_string(&act.details).unwrap_or_else(|_| "{}".to_string());
    conn.execute(
        "INSERT INTO activities
            (timestamp, date, time, action, book_id, book_title, book_author, book_category, details)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            act.timestamp,
            act.date,
            act.time,
            act.action.to_db_str(),
            act.book_id,
            act.book_title,
            act.book_author,
            act.book_category,
            details_json,
        ],
    )?;
    Ok(())
}

/// Entries for one calendar day, newest first.
pub fn load_activities_for_date(pool: &mut DbPool, date: &str) -> AppResult<Vec<Activity>> {
    let mut stmt = pool.conn.prepare(
        "SELECT * FROM activities
         WHERE date = ?1
         ORDER BY timestamp DESC, id DESC",
    )?;
    let rows = stmt.query_map([date], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Bulk clear of the whole log (local-variant maintenance operation).
pub fn clear_activities(pool: &mut DbPool) -> AppResult<usize> {
    let removed = pool.conn.execute("DELETE FROM activities", [])?;
    Ok(removed)
}
