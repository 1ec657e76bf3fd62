use crate::errors::{AppError, AppResult};
use crate::export::notify_export_success;
use crate::models::book::Book;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// JSON export: the full record set, pretty-printed, the same shape the
/// local-variant backend persists.
pub fn export_json(books: &[Book], path: &Path) -> AppResult<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, books).map_err(|e| AppError::Export(e.to_string()))?;

    notify_export_success("JSON", path);
    Ok(())
}
