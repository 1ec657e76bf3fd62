use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::book::Book;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<Book> {
    Ok(Book {
        id: row.get("id")?,
        title: row.get("title")?,
        author: row.get("author")?,
        category: row.get("category")?,
        note: row.get("note")?,
        date: row.get("date")?,
        created_at: row.get("created_at")?,
    })
}

pub fn load_books(pool: &mut DbPool) -> AppResult<Vec<Book>> {
    let mut stmt = pool.conn.prepare("SELECT * FROM books ORDER BY id ASC")?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_book(conn: &Connection, id: i64) -> AppResult<Book> {
    let book = conn
        .query_row("SELECT * FROM books WHERE id = ?1", [id], map_row)
        .optional()?;
    book.ok_or(AppError::BookNotFound(id))
}

/// Next free identifier: max(id)+1, the local-variant assignment rule.
pub fn next_book_id(conn: &Connection) -> AppResult<i64> {
    let next: i64 = conn.query_row(
        "SELECT COALESCE(MAX(id), -1) + 1 FROM books",
        [],
        |row| row.get(0),
    )?;
    Ok(next)
}

pub fn insert_book(conn: &Connection, book: &Book) -> AppResult<()> {
    conn.execute(
        "INSERT INTO books (id, title, author, category, note, date, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            book.id,
            book.title,
            book.author,
            book.category,
            book.note,
            book.date,
            book.created_at,
        ],
    )?;
    Ok(())
}

/// Update the five mutable fields; id and created_at are never rewritten.
pub fn update_book(conn: &Connection, book: &Book) -> AppResult<()> {
    let changed = conn.execute(
        "UPDATE books
         SET title = ?1, author = ?2, category = ?3, note = ?4, date = ?5
         WHERE id = ?6",
        params![
            book.title,
            book.author,
            book.category,
            book.note,
            book.date,
            book.id,
        ],
    )?;
    if changed == 0 {
        return Err(AppError::BookNotFound(book.id));
    }
    Ok(())
}

pub fn delete_book(conn: &Connection, id: i64) -> AppResult<()> {
    let changed = conn.execute("DELETE FROM books WHERE id = ?1", [id])?;
    if changed == 0 {
        return Err(AppError::BookNotFound(id));
    }
    Ok(())
}
