use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::{RecordStore, SqliteStore};
use crate::ui::messages::success;

/// Delete a book by id.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let mut store = SqliteStore::open(&cfg.database)?;
        let book = store.delete(*id)?;
        success(format!("Deleted #{} 《{}》", book.id, book.title));
    }
    Ok(())
}
