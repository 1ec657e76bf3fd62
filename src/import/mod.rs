//! Spreadsheet import with upsert-by-identifier semantics.
//!
//! Reads the first sheet of an `.xlsx`/`.xls` file, resolves each row's
//! external identifier, then merge-updates matching records and inserts
//! the rest. Writes go through SQLite transactions in batches of at most
//! 400 rows; a failing batch surfaces one error and the batches already
//! committed stay applied.

use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::book::{Book, UNCLASSIFIED_AUTHOR};
use crate::models::category::DEFAULT_CATEGORY;
use crate::utils::date;
use calamine::{Data, Reader, open_workbook_auto};
use std::collections::HashSet;
use std::path::Path;

pub const IMPORT_BATCH_SIZE: usize = 400;

#[derive(Debug, Default, Clone, PartialEq)]
pub struct ImportOutcome {
    pub processed: usize,
    pub inserted: usize,
    pub updated: usize,
    pub batches: usize,
}

/// Recognized header names per field (Chinese export headers plus their
/// English aliases).
const ID_COLUMNS: [&str; 2] = ["系統ID", "id"];
const TITLE_COLUMNS: [&str; 2] = ["書名", "title"];
const AUTHOR_COLUMNS: [&str; 2] = ["作者", "author"];
const CATEGORY_COLUMNS: [&str; 2] = ["分類", "category"];
const NOTE_COLUMNS: [&str; 3] = ["借閱人_備註", "借閱人", "note"];
const DATE_COLUMNS: [&str; 2] = ["日期", "date"];

#[derive(Debug, Default)]
struct ColumnMap {
    id: Option<usize>,
    title: Option<usize>,
    author: Option<usize>,
    category: Option<usize>,
    note: Option<usize>,
    date: Option<usize>,
}

fn resolve_columns(header: &[Data]) -> ColumnMap {
    let mut map = ColumnMap::default();
    for (idx, cell) in header.iter().enumerate() {
        let name = cell_text(cell);
        let name = name.trim();
        if map.id.is_none() && ID_COLUMNS.contains(&name) {
            map.id = Some(idx);
        } else if map.title.is_none() && TITLE_COLUMNS.contains(&name) {
            map.title = Some(idx);
        } else if map.author.is_none() && AUTHOR_COLUMNS.contains(&name) {
            map.author = Some(idx);
        } else if map.category.is_none() && CATEGORY_COLUMNS.contains(&name) {
            map.category = Some(idx);
        } else if map.note.is_none() && NOTE_COLUMNS.contains(&name) {
            map.note = Some(idx);
        } else if map.date.is_none() && DATE_COLUMNS.contains(&name) {
            map.date = Some(idx);
        }
    }
    map
}

fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Int(i) => i.to_string(),
        other => other.to_string(),
    }
}

fn field(row: &[Data], idx: Option<usize>) -> String {
    idx.and_then(|i| row.get(i)).map(cell_text).unwrap_or_default()
}

fn row_is_empty(row: &[Data], map: &ColumnMap) -> bool {
    [map.id, map.title, map.author, map.category, map.note, map.date]
        .iter()
        .all(|idx| field(row, *idx).is_empty())
}

/// One parsed spreadsheet row, ready to upsert.
fn row_to_book(row: &[Data], map: &ColumnMap, fallback_id: i64) -> Book {
    let id = match field(row, map.id).parse::<i64>() {
        Ok(n) => n,
        Err(_) => fallback_id,
    };

    let author = field(row, map.author);
    let category = field(row, map.category);
    let mut book_date = field(row, map.date);
    if book_date == "undefined" {
        book_date.clear();
    }

    Book {
        id,
        title: field(row, map.title),
        author: if author.is_empty() {
            UNCLASSIFIED_AUTHOR.to_string()
        } else {
            author
        },
        category: if category.is_empty() {
            DEFAULT_CATEGORY.to_string()
        } else {
            category
        },
        note: field(row, map.note),
        date: book_date,
        created_at: String::new(),
    }
}

pub fn import_spreadsheet(pool: &mut DbPool, path: &Path) -> AppResult<ImportOutcome> {
    let mut workbook =
        open_workbook_auto(path).map_err(|e| AppError::Import(e.to_string()))?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| AppError::Import("workbook has no sheets".to_string()))?
        .map_err(|e| AppError::Import(e.to_string()))?;

    let mut rows = range.rows();
    let header = rows
        .next()
        .ok_or_else(|| AppError::Import("檔案內容為空".to_string()))?;
    let map = resolve_columns(header);

    // Identifiers missing from the sheet fall back to a timestamp-derived
    // value, offset per row so they stay unique within one import.
    let fallback_base = date::now_millis();
    let parsed: Vec<Book> = rows
        .filter(|row| !row_is_empty(row, &map))
        .enumerate()
        .map(|(i, row)| row_to_book(row, &map, fallback_base + i as i64))
        .collect();

    if parsed.is_empty() {
        return Err(AppError::Import("檔案內容為空".to_string()));
    }

    let mut existing: HashSet<i64> = HashSet::new();
    {
        let mut stmt = pool.conn.prepare("SELECT id FROM books")?;
        let ids = stmt.query_map([], |row| row.get::<_, i64>(0))?;
        for id in ids {
            existing.insert(id?);
        }
    }

    let mut outcome = ImportOutcome::default();

    for chunk in parsed.chunks(IMPORT_BATCH_SIZE) {
        let tx = pool.conn.transaction()?;
        for book in chunk {
            if existing.contains(&book.id) {
                queries::update_book(&tx, book)?;
                outcome.updated += 1;
            } else {
                queries::insert_book(&tx, book)?;
                existing.insert(book.id);
                outcome.inserted += 1;
            }
            outcome.processed += 1;
        }
        tx.commit()?;
        outcome.batches += 1;
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_aliases_resolve_in_both_languages() {
        let header = vec![
            Data::String("系統ID".to_string()),
            Data::String("title".to_string()),
            Data::String("作者".to_string()),
            Data::String("note".to_string()),
        ];
        let map = resolve_columns(&header);
        assert_eq!(map.id, Some(0));
        assert_eq!(map.title, Some(1));
        assert_eq!(map.author, Some(2));
        assert_eq!(map.note, Some(3));
        assert_eq!(map.date, None);
    }

    #[test]
    fn numeric_id_cells_parse_from_floats() {
        let header = vec![
            Data::String("id".to_string()),
            Data::String("title".to_string()),
        ];
        let map = resolve_columns(&header);
        let row = vec![Data::Float(42.0), Data::String("書".to_string())];
        let book = row_to_book(&row, &map, 999);
        assert_eq!(book.id, 42);
        assert_eq!(book.title, "書");
        // blanks fall back to the sentinels
        assert_eq!(book.author, UNCLASSIFIED_AUTHOR);
        assert_eq!(book.category, DEFAULT_CATEGORY);
    }

    #[test]
    fn missing_id_uses_fallback() {
        let header = vec![Data::String("書名".to_string())];
        let map = resolve_columns(&header);
        let row = vec![Data::String("書".to_string())];
        let book = row_to_book(&row, &map, 1234567);
        assert_eq!(book.id, 1234567);
    }

    #[test]
    fn undefined_date_is_cleared() {
        let header = vec![
            Data::String("書名".to_string()),
            Data::String("日期".to_string()),
        ];
        let map = resolve_columns(&header);
        let row = vec![
            Data::String("書".to_string()),
            Data::String("undefined".to_string()),
        ];
        assert_eq!(row_to_book(&row, &map, 0).date, "");
    }
}
