use crate::core::pipeline::SortKey;
use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for shelflog
/// CLI application to manage a personal library catalog with SQLite
#[derive(Parser)]
#[command(
    name = "shelflog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A library catalog CLI: track books, borrowers and reading activity using SQLite",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "theme", help = "Set the UI theme (light, dark, black)")]
        theme: Option<String>,
    },

    /// Add a book to the catalog
    Add {
        /// Book title
        title: String,

        #[arg(long, help = "Author name (defaults to 未分類作者)")]
        author: Option<String>,

        #[arg(long, help = "Category (defaults to the configured category)")]
        category: Option<String>,

        #[arg(long, help = "Borrow date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long, help = "Borrower name or free-form note")]
        note: Option<String>,
    },

    /// Edit an existing book; only the given fields change
    Edit {
        /// Book id
        id: i64,

        #[arg(long)]
        title: Option<String>,

        #[arg(long)]
        author: Option<String>,

        #[arg(long)]
        category: Option<String>,

        #[arg(long, help = "Borrow date (YYYY-MM-DD), empty string to clear")]
        date: Option<String>,

        #[arg(long)]
        note: Option<String>,
    },

    /// Quick category change for one book
    SetCategory {
        /// Book id
        id: i64,

        /// Target category
        category: String,
    },

    /// Delete a book by id
    Del {
        /// Book id
        id: i64,
    },

    /// List books through the filter/sort/paginate pipeline
    List {
        #[arg(long, short, help = "Case-insensitive search on title, author and note")]
        search: Option<String>,

        #[arg(long, short, help = "Filter by category (全部 shows everything)")]
        category: Option<String>,

        #[arg(long, value_enum, help = "Sort order (default: date-desc)")]
        sort: Option<SortKey>,

        #[arg(long, help = "Page number (50 records per page)")]
        page: Option<usize>,
    },

    /// Show catalog statistics
    Stats,

    /// Show today's activity log
    Activity {
        #[arg(long, help = "Delete all activity entries")]
        clear: bool,
    },

    /// Import books from a spreadsheet (merge by id)
    Import {
        #[arg(long, value_name = "FILE")]
        file: String,
    },

    /// Export the catalog
    Export {
        #[arg(long, value_enum, default_value = "xlsx")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (default: dated name)")]
        file: Option<String>,
    },

    /// Manage the database (integrity checks, maintenance)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}
