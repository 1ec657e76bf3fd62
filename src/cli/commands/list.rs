use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pipeline::run_query;
use crate::core::session::{SessionAction, SessionState};
use crate::errors::{AppError, AppResult};
use crate::models::borrower::{NoteBadge, classify_note};
use crate::models::category::{self, ALL_CATEGORY};
use crate::store::{RecordStore, SqliteStore};
use crate::ui::messages::info;
use crate::utils::table::{Column, Table};

/// List books through the filter/sort/paginate pipeline.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        search,
        category,
        sort,
        page,
    } = cmd
    {
        if let Some(cat) = category
            && cat != ALL_CATEGORY
            && !category::is_valid(cat)
        {
            return Err(AppError::InvalidCategory(cat.clone()));
        }

        // Fold the flags through the session transition table; --page comes
        // last so the filter resets do not clobber it.
        let mut state = SessionState::default();
        if let Some(term) = search {
            state = state.apply(SessionAction::SetSearch(term.clone()));
        }
        if let Some(cat) = category {
            state = state.apply(SessionAction::SetCategory(cat.clone()));
        }
        if let Some(sort) = sort {
            state = state.apply(SessionAction::SetSort(*sort));
        }
        if let Some(page) = page {
            state = state.apply(SessionAction::SetPage(*page));
        }

        let mut store = SqliteStore::open(&cfg.database)?;
        let books = store.list()?;
        let result = run_query(&books, &state.query())?;

        if result.matched == 0 {
            info("No matching books.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column {
                header: "ID".into(),
                min_width: 4,
            },
            Column {
                header: "分類".into(),
                min_width: 6,
            },
            Column {
                header: "書名".into(),
                min_width: 12,
            },
            Column {
                header: "作者".into(),
                min_width: 8,
            },
            Column {
                header: "借閱人_備註".into(),
                min_width: 8,
            },
            Column {
                header: "日期".into(),
                min_width: 10,
            },
        ]);
        for book in &result.books {
            table.add_row(vec![
                book.id.to_string(),
                book.category.clone(),
                book.title.clone(),
                book.author.clone(),
                note_display(&book.note),
                book.date.clone(),
            ]);
        }
        print!("{}", table.render());
        println!(
            "Page {}/{} ({} records)",
            result.page, result.total_pages, result.matched
        );
    }
    Ok(())
}

/// Known borrowers show their badge label; placeholder notes show nothing.
fn note_display(note: &str) -> String {
    match classify_note(note) {
        NoteBadge::Known(style) => style.label.to_string(),
        NoteBadge::Empty => String::new(),
        _ => note.to_string(),
    }
}
