use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::category;
use crate::store::{RecordStore, SqliteStore};
use crate::ui::messages::{info, success};

/// Quick category change, logged as its own action kind.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::SetCategory { id, category } = cmd {
        if !category::is_valid(category) {
            return Err(AppError::InvalidCategory(category.clone()));
        }

        let mut store = SqliteStore::open(&cfg.database)?;
        let before = store.get(*id)?;
        if before.category == *category {
            info(format!("#{} is already in [{}]", id, category));
            return Ok(());
        }

        let book = store.set_category(*id, category)?;
        success(format!(
            "Moved #{} 《{}》 from [{}] to [{}]",
            book.id, book.title, before.category, book.category
        ));
    }
    Ok(())
}
