mod json;
mod model;
mod xlsx;

pub use json::export_json;
pub use model::{book_to_row, headers};
pub use xlsx::export_xlsx;

use crate::ui::messages::success;
use crate::utils::date;
use clap::ValueEnum;
use std::path::{Path, PathBuf};

/// Completion notice shared by all exporters.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Xlsx,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Json => "json",
        }
    }
}

/// Default output file when none is given: the catalog name with the
/// current date embedded, in the working directory.
pub fn default_export_path(format: &ExportFormat) -> PathBuf {
    PathBuf::from(format!(
        "圖書館借書清單_匯出_{}.{}",
        date::today_str(),
        format.as_str()
    ))
}
