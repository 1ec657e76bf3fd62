use crate::config::Config;
use crate::core::stats;
use crate::db::activity::load_activities_for_date;
use crate::errors::AppResult;
use crate::store::{RecordStore, SqliteStore};
use crate::ui::messages::header;
use crate::utils::date;
use crate::utils::table::{Column, Table};

/// Print the statistics view: headline numbers, category distribution and
/// the top-10 author/borrower charts.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let mut store = SqliteStore::open(&cfg.database)?;
    let books = store.list()?;

    let today = date::today_str();
    let summary = stats::summarize(&books, &today);

    header("Catalog summary");
    println!("Total books       : {}", summary.total_books);
    println!("Distinct authors  : {}", summary.total_authors);
    println!("Borrowed today    : {}", summary.added_today);
    println!("Categories        : {}", summary.category_count);

    let slices = stats::category_distribution(&books);
    if !slices.is_empty() {
        header("Books per category");
        let mut table = Table::new(vec![
            Column {
                header: "分類".into(),
                min_width: 6,
            },
            Column {
                header: "冊數".into(),
                min_width: 4,
            },
        ]);
        for slice in &slices {
            table.add_row(vec![slice.name.clone(), slice.count.to_string()]);
        }
        print!("{}", table.render());
    }

    print_chart("Top authors", &stats::top_authors(&books));
    print_chart("Top borrowers", &stats::top_borrowers(&books));

    let activities = load_activities_for_date(&mut store.pool, &today)?;
    let counts = stats::count_actions(&activities);
    header("Today's activity");
    println!(
        "{} entries ({} added, {} edited, {} deleted, {} moved)",
        counts.total, counts.adds, counts.edits, counts.deletes, counts.category_changes
    );

    Ok(())
}

fn print_chart(title: &str, rows: &[stats::NameCount]) {
    if rows.is_empty() {
        return;
    }
    header(title);
    for row in rows {
        println!("{:>4}  {}", row.count, row.name);
    }
}
