use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::stats::count_actions;
use crate::db::activity::{clear_activities, load_activities_for_date};
use crate::errors::AppResult;
use crate::models::activity::{ActionKind, Activity};
use crate::store::SqliteStore;
use crate::ui::messages::{header, info, success};
use crate::utils::date;

/// Show (or clear) the current day's activity log.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Activity { clear } = cmd {
        let mut store = SqliteStore::open(&cfg.database)?;

        if *clear {
            let removed = clear_activities(&mut store.pool)?;
            success(format!("Cleared {} activity entries", removed));
            return Ok(());
        }

        let today = date::today_str();
        let activities = load_activities_for_date(&mut store.pool, &today)?;
        if activities.is_empty() {
            info(format!("No activity recorded on {}", today));
            return Ok(());
        }

        let counts = count_actions(&activities);
        header(format!("Activity on {}", today));
        println!(
            "{} entries ({} added, {} edited, {} deleted, {} moved)",
            counts.total, counts.adds, counts.edits, counts.deletes, counts.category_changes
        );
        println!();

        for act in &activities {
            print_entry(act);
        }
    }
    Ok(())
}

fn print_entry(act: &Activity) {
    println!(
        "{}  {:<9} #{} 《{}》 ({}) [{}]",
        act.time,
        label(act.action),
        act.book_id,
        act.book_title,
        act.book_author,
        act.book_category
    );
    match act.action {
        ActionKind::Edit => {
            if let Some(changes) = &act.details.changes {
                for change in changes {
                    println!(
                        "           {}: '{}' -> '{}'",
                        change.field, change.old, change.new
                    );
                }
            }
        }
        ActionKind::CategoryChange => {
            if let (Some(old), Some(new)) =
                (&act.details.old_category, &act.details.new_category)
            {
                println!("           [{}] -> [{}]", old, new);
            }
        }
        _ => {}
    }
}

fn label(action: ActionKind) -> &'static str {
    match action {
        ActionKind::Add => "added",
        ActionKind::Edit => "edited",
        ActionKind::Delete => "deleted",
        ActionKind::CategoryChange => "moved",
    }
}
