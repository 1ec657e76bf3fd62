use crate::models::book::Book;
use crate::utils::date;
use serde::{Deserialize, Serialize};

/// Kind of a logged catalog operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Add,
    Edit,
    Delete,
    CategoryChange,
}

impl ActionKind {
    pub fn to_db_str(self) -> &'static str {
        match self {
            ActionKind::Add => "add",
            ActionKind::Edit => "edit",
            ActionKind::Delete => "delete",
            ActionKind::CategoryChange => "category_change",
        }
    }

    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "add" => Some(ActionKind::Add),
            "edit" => Some(ActionKind::Edit),
            "delete" => Some(ActionKind::Delete),
            "category_change" => Some(ActionKind::CategoryChange),
            _ => None,
        }
    }
}

/// One changed field of an edit: old vs new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: String,
    pub old: String,
    pub new: String,
}

/// Action-specific payload. `changes` is set for edits, the category pair
/// for category changes; both empty for add/delete.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changes: Option<Vec<FieldChange>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_category: Option<String>,
}

/// Immutable log entry, created after each successful mutating operation.
/// Timestamped at logging time and keyed to the calendar day for the
/// same-day activity view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    #[serde(default)]
    pub id: i64,
    pub timestamp: String, // "YYYY-MM-DD HH:MM:SS"
    pub date: String,
    pub time: String,
    pub action: ActionKind,
    pub book_id: i64,
    pub book_title: String,
    pub book_author: String,
    pub book_category: String,
    #[serde(default)]
    pub details: ActivityDetails,
}

impl Activity {
    /// Entry for `book` with the given action and payload, stamped now.
    pub fn record(action: ActionKind, book: &Book, details: ActivityDetails) -> Self {
        let (timestamp, day, time) = date::now_parts();
        Self {
            id: 0,
            timestamp,
            date: day,
            time,
            action,
            book_id: book.id,
            book_title: book.title.clone(),
            book_author: book.author.clone(),
            book_category: book.category.clone(),
            details,
        }
    }
}
