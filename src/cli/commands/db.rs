use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::info::{integrity_check, print_db_info, vacuum};
use crate::errors::AppResult;
use crate::store::SqliteStore;
use crate::ui::messages::success;

/// Database maintenance: info, integrity check, vacuum.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        check,
        vacuum: run_vacuum,
        info,
    } = cmd
    {
        let mut store = SqliteStore::open(&cfg.database)?;

        if *check {
            let verdict = integrity_check(&mut store.pool)?;
            success(format!("Integrity check: {}", verdict));
        }

        if *run_vacuum {
            vacuum(&mut store.pool)?;
            success("Database vacuumed");
        }

        // Default to the info view when no flag is given.
        if *info || (!*check && !*run_vacuum) {
            print_db_info(&mut store.pool, &cfg.database)?;
        }
    }
    Ok(())
}
