use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::fs;

/// View or change the configuration file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        theme,
    } = cmd
    {
        if let Some(theme) = theme {
            // Re-load from disk so a --db override never gets persisted.
            let mut stored = Config::load();
            stored.set_theme(theme)?;
            stored.save()?;
            success(format!("Theme set to '{}'", theme));
            return Ok(());
        }

        if *print_config {
            let path = Config::config_file();
            match fs::read_to_string(&path) {
                Ok(content) => print!("{}", content),
                Err(_) => info(format!("No config file at {}", path.display())),
            }
            return Ok(());
        }

        info(format!("Database         : {}", cfg.database));
        info(format!("Theme            : {}", cfg.theme));
        info(format!("Default category : {}", cfg.default_category));
    }
    Ok(())
}
