use crate::errors::{AppError, AppResult};
use crate::models::category;
use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Accepted values for the persisted theme preference.
pub const THEMES: [&str; 3] = ["light", "dark", "black"];

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// UI theme preference, restored on load ("light" / "dark" / "black").
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Category pre-selected for new records.
    #[serde(default = "default_category")]
    pub default_category: String,
}

fn default_theme() -> String {
    "light".to_string()
}

fn default_category() -> String {
    category::DEFAULT_CATEGORY.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            theme: default_theme(),
            default_category: default_category(),
        }
    }
}

impl Config {
    /// Standard configuration directory depending on the platform.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".shelflog")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shelflog.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("shelflog.sqlite")
    }

    /// Load configuration from file, or fall back to defaults when the
    /// file is missing or unreadable.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(cfg) => cfg,
                Err(e) => {
                    warning(format!("Ignoring malformed config file: {}", e));
                    Self::default()
                }
            },
            Err(e) => {
                warning(format!("Cannot read config file: {}", e));
                Self::default()
            }
        }
    }

    pub fn save(&self) -> AppResult<()> {
        fs::create_dir_all(Self::config_dir())?;
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    pub fn set_theme(&mut self, theme: &str) -> AppResult<()> {
        if !THEMES.contains(&theme) {
            return Err(AppError::InvalidTheme(theme.to_string()));
        }
        self.theme = theme.to_string();
        Ok(())
    }

    /// Initialize configuration and database files.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                fs::create_dir_all(&dir)?;
                dir.join(p)
            }
        } else {
            fs::create_dir_all(&dir)?;
            Self::database_file()
        };

        // In test mode only the database is touched, never the user config.
        if !is_test {
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            config.save()?;
            println!("Config file: {:?}", Self::config_file());
        }

        Ok(db_path)
    }
}
