use crate::core::diff;
use crate::db::activity::insert_activity;
use crate::db::pool::DbPool;
use crate::db::{initialize, queries};
use crate::errors::AppResult;
use crate::models::activity::Activity;
use crate::models::book::{Book, BookDraft};
use crate::store::RecordStore;
use crate::ui::messages::warning;
use crate::utils::date;

/// SQLite-backed record store.
pub struct SqliteStore {
    pub pool: DbPool,
}

impl SqliteStore {
    /// Open (and if necessary create) the catalog database at `path`.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        initialize::init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    /// Secondary write: failures are reported, never propagated, and the
    /// primary mutation stands.
    fn log_activity(&mut self, activity: &Activity) {
        if let Err(e) = insert_activity(&self.pool.conn, activity) {
            warning(format!("Activity log write failed: {}", e));
        }
    }
}

impl RecordStore for SqliteStore {
    fn list(&mut self) -> AppResult<Vec<Book>> {
        queries::load_books(&mut self.pool)
    }

    fn get(&mut self, id: i64) -> AppResult<Book> {
        queries::get_book(&self.pool.conn, id)
    }

    fn create(&mut self, draft: BookDraft) -> AppResult<Book> {
        let draft = draft.normalized();
        let (created_at, _, _) = date::now_parts();
        let book = Book {
            id: queries::next_book_id(&self.pool.conn)?,
            title: draft.title,
            author: draft.author,
            category: draft.category,
            note: draft.note,
            date: draft.date,
            created_at,
        };
        queries::insert_book(&self.pool.conn, &book)?;
        self.log_activity(&diff::activity_for_add(&book));
        Ok(book)
    }

    fn update(&mut self, id: i64, draft: BookDraft) -> AppResult<Book> {
        let old = queries::get_book(&self.pool.conn, id)?;
        let new = old.with_draft(&draft.normalized());
        queries::update_book(&self.pool.conn, &new)?;
        self.log_activity(&diff::activity_for_edit(&old, &new));
        Ok(new)
    }

    fn set_category(&mut self, id: i64, category: &str) -> AppResult<Book> {
        let old = queries::get_book(&self.pool.conn, id)?;
        if old.category == category {
            return Ok(old);
        }
        let mut draft = BookDraft::from_book(&old);
        draft.category = category.to_string();
        let new = old.with_draft(&draft);
        queries::update_book(&self.pool.conn, &new)?;
        self.log_activity(&diff::activity_for_edit(&old, &new));
        Ok(new)
    }

    fn delete(&mut self, id: i64) -> AppResult<Book> {
        let book = queries::get_book(&self.pool.conn, id)?;
        queries::delete_book(&self.pool.conn, id)?;
        self.log_activity(&diff::activity_for_delete(&book));
        Ok(book)
    }
}
