//! Record store adapter: the one owner of persisted catalog state.

mod sqlite;

pub use sqlite::SqliteStore;

use crate::errors::AppResult;
use crate::models::book::{Book, BookDraft};

/// Contract of the catalog's backing store. Mutating operations succeed or
/// fail atomically per record; every successful mutation additionally
/// appends one activity entry as a best-effort secondary write whose
/// failure never rolls back the primary operation.
pub trait RecordStore {
    /// Full current record set.
    fn list(&mut self) -> AppResult<Vec<Book>>;

    /// Single record lookup.
    fn get(&mut self, id: i64) -> AppResult<Book>;

    /// Create a record; the store assigns the identifier and creation
    /// timestamp.
    fn create(&mut self, draft: BookDraft) -> AppResult<Book>;

    /// Replace the five mutable fields of an existing record.
    fn update(&mut self, id: i64, draft: BookDraft) -> AppResult<Book>;

    /// Quick category change; a no-op when the category is unchanged.
    fn set_category(&mut self, id: i64, category: &str) -> AppResult<Book>;

    /// Remove a record, returning its last-known snapshot.
    fn delete(&mut self, id: i64) -> AppResult<Book>;
}
