//! Unified application error type.
//! All modules (db, store, core, cli, import/export) return AppError to keep
//! error handling consistent across the crate.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Book not found: {0}")]
    BookNotFound(i64),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Invalid date format (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),

    #[error("Unknown category: {0}")]
    InvalidCategory(String),

    #[error("Unknown theme (expected light, dark or black): {0}")]
    InvalidTheme(String),

    #[error("Title must not be empty")]
    EmptyTitle,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Import/export errors
    // ---------------------------
    #[error("Import error: {0}")]
    Import(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Collation
    // ---------------------------
    #[error("Collator unavailable: {0}")]
    Collation(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
