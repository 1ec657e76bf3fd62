use crate::errors::{AppError, AppResult};
use crate::models::category;
use crate::utils::date;
use serde::{Deserialize, Serialize};

/// Sentinel author for records without a classified author.
pub const UNCLASSIFIED_AUTHOR: &str = "未分類作者";

/// One catalog entry.
///
/// `id` is the externally stable numeric identifier (unique within the
/// collection, survives export/import). `category` stays a plain string:
/// the CLI validates membership on add/edit, but imported rows may carry
/// unknown values and are kept as-is (display falls back to a default
/// color).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    #[serde(default = "default_author")]
    pub author: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub date: String, // "YYYY-MM-DD" or empty
    #[serde(default)]
    pub created_at: String, // store-assigned, empty for imported rows
}

fn default_author() -> String {
    UNCLASSIFIED_AUTHOR.to_string()
}

fn default_category() -> String {
    category::DEFAULT_CATEGORY.to_string()
}

/// The five mutable fields, as carried by create/update calls.
#[derive(Debug, Clone, Default)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub category: String,
    pub note: String,
    pub date: String,
}

impl BookDraft {
    /// Fill blank author/category with their sentinels.
    pub fn normalized(mut self) -> Self {
        if self.author.trim().is_empty() {
            self.author = UNCLASSIFIED_AUTHOR.to_string();
        }
        if self.category.trim().is_empty() {
            self.category = category::DEFAULT_CATEGORY.to_string();
        }
        self
    }

    /// CLI-side input checks: non-blank title, known category (blank is
    /// allowed and later normalized), well-formed date.
    pub fn validate(&self) -> AppResult<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::EmptyTitle);
        }
        if !self.category.trim().is_empty() && !category::is_valid(&self.category) {
            return Err(AppError::InvalidCategory(self.category.clone()));
        }
        if !date::is_valid_book_date(&self.date) {
            return Err(AppError::InvalidDate(self.date.clone()));
        }
        Ok(())
    }

    /// Start from an existing record, for partial edits.
    pub fn from_book(book: &Book) -> Self {
        Self {
            title: book.title.clone(),
            author: book.author.clone(),
            category: book.category.clone(),
            note: book.note.clone(),
            date: book.date.clone(),
        }
    }
}

impl Book {
    /// The record as it would look after applying `draft` (id and
    /// created_at are never touched by an update).
    pub fn with_draft(&self, draft: &BookDraft) -> Self {
        Self {
            id: self.id,
            title: draft.title.clone(),
            author: draft.author.clone(),
            category: draft.category.clone(),
            note: draft.note.clone(),
            date: draft.date.clone(),
            created_at: self.created_at.clone(),
        }
    }
}
