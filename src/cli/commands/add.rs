use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::book::BookDraft;
use crate::store::{RecordStore, SqliteStore};
use crate::ui::messages::success;

/// Add a book to the catalog.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        title,
        author,
        category,
        date,
        note,
    } = cmd
    {
        let draft = BookDraft {
            title: title.clone(),
            author: author.clone().unwrap_or_default(),
            category: category
                .clone()
                .unwrap_or_else(|| cfg.default_category.clone()),
            note: note.clone().unwrap_or_default(),
            date: date.clone().unwrap_or_default(),
        };
        draft.validate()?;

        let mut store = SqliteStore::open(&cfg.database)?;
        let book = store.create(draft)?;

        success(format!(
            "Added #{} 《{}》 ({}) [{}]",
            book.id, book.title, book.author, book.category
        ));
    }
    Ok(())
}
