use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::import::import_spreadsheet;
use crate::store::SqliteStore;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Import books from a spreadsheet, merging by id.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let path = Path::new(file);
        if !path.exists() {
            return Err(AppError::Import(format!("file not found: {}", file)));
        }

        info(format!("Importing from {}", file));
        let mut store = SqliteStore::open(&cfg.database)?;
        let outcome = import_spreadsheet(&mut store.pool, path)?;

        success(format!(
            "Imported {} rows ({} new, {} updated, {} batches)",
            outcome.processed, outcome.inserted, outcome.updated, outcome.batches
        ));
    }
    Ok(())
}
