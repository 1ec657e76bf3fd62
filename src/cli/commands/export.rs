use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportFormat, default_export_path, export_json, export_xlsx};
use crate::store::{RecordStore, SqliteStore};
use std::path::PathBuf;

/// Export the full catalog in the requested format.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { format, file } = cmd {
        let mut store = SqliteStore::open(&cfg.database)?;
        let books = store.list()?;

        let path = match file {
            Some(file) => PathBuf::from(file),
            None => default_export_path(format),
        };

        match format {
            ExportFormat::Xlsx => export_xlsx(&books, &path)?,
            ExportFormat::Json => export_json(&books, &path)?,
        }
    }
    Ok(())
}
