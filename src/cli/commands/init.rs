use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::SqliteStore;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database (prod or test mode)
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    info(format!("Config file : {}", Config::config_file().display()));
    info(format!("Database    : {}", &db_path));

    // Opening the store creates the tables.
    SqliteStore::open(&db_path)?;

    success(format!("Database initialized at {}", &db_path));
    Ok(())
}
