use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::book::BookDraft;
use crate::store::{RecordStore, SqliteStore};
use crate::ui::messages::success;

/// Edit an existing book. Flags not given keep their current value.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        title,
        author,
        category,
        date,
        note,
    } = cmd
    {
        let mut store = SqliteStore::open(&cfg.database)?;
        let current = store.get(*id)?;

        let mut draft = BookDraft::from_book(&current);
        if let Some(title) = title {
            draft.title = title.clone();
        }
        if let Some(author) = author {
            draft.author = author.clone();
        }
        if let Some(category) = category {
            draft.category = category.clone();
        }
        if let Some(date) = date {
            draft.date = date.clone();
        }
        if let Some(note) = note {
            draft.note = note.clone();
        }
        draft.validate()?;

        let book = store.update(*id, draft)?;
        success(format!("Updated #{} 《{}》", book.id, book.title));
    }
    Ok(())
}
