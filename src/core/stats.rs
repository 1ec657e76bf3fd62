//! Derived statistics over the full record set. Everything here is a pure
//! recomputation; nothing is maintained incrementally.

use crate::models::activity::{ActionKind, Activity};
use crate::models::book::{Book, UNCLASSIFIED_AUTHOR};
use crate::models::category;
use crate::utils::isbn::is_isbn_like;
use std::collections::{BTreeMap, HashSet};

/// Chart rows keep only the top entries.
pub const TOP_N: usize = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    pub name: String,
    pub count: usize,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NameCount {
    pub name: String,
    pub count: usize,
}

/// Records per real category; the "全部" sentinel and zero-count
/// categories are excluded from chart output.
pub fn category_distribution(books: &[Book]) -> Vec<CategorySlice> {
    category::real_categories()
        .map(|cat| CategorySlice {
            name: category::short_label(cat).to_string(),
            count: books.iter().filter(|b| b.category == cat.id).count(),
            color: cat.color,
        })
        .filter(|slice| slice.count > 0)
        .collect()
}

/// Top authors by record count, unclassified sentinel excluded.
pub fn top_authors(books: &[Book]) -> Vec<NameCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for book in books {
        if book.author != UNCLASSIFIED_AUTHOR {
            *counts.entry(book.author.as_str()).or_default() += 1;
        }
    }
    top_of(counts)
}

/// Top borrowers by note count. Empty notes and ISBN-like codes are not
/// borrowers and are excluded.
pub fn top_borrowers(books: &[Book]) -> Vec<NameCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for book in books {
        let note = book.note.trim();
        if !note.is_empty() && !is_isbn_like(note) {
            *counts.entry(note).or_default() += 1;
        }
    }
    top_of(counts)
}

fn top_of(counts: BTreeMap<&str, usize>) -> Vec<NameCount> {
    let mut out: Vec<NameCount> = counts
        .into_iter()
        .map(|(name, count)| NameCount {
            name: name.to_string(),
            count,
        })
        .collect();
    // BTreeMap gives a deterministic name order for equal counts.
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out.truncate(TOP_N);
    out
}

/// The headline numbers of the stats view.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogSummary {
    pub total_books: usize,
    pub total_authors: usize,
    pub added_today: usize,
    pub category_count: usize,
}

pub fn summarize(books: &[Book], today: &str) -> CatalogSummary {
    let authors: HashSet<&str> = books.iter().map(|b| b.author.as_str()).collect();
    CatalogSummary {
        total_books: books.len(),
        total_authors: authors.len(),
        added_today: books.iter().filter(|b| b.date == today).count(),
        category_count: category::real_categories().count(),
    }
}

/// Per-action totals of one day's activity log.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DayActionCounts {
    pub total: usize,
    pub adds: usize,
    pub edits: usize,
    pub deletes: usize,
    pub category_changes: usize,
}

pub fn count_actions(activities: &[Activity]) -> DayActionCounts {
    let mut counts = DayActionCounts {
        total: activities.len(),
        ..Default::default()
    };
    for act in activities {
        match act.action {
            ActionKind::Add => counts.adds += 1,
            ActionKind::Edit => counts.edits += 1,
            ActionKind::Delete => counts.deletes += 1,
            ActionKind::CategoryChange => counts.category_changes += 1,
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::activity::ActivityDetails;

    fn book(title: &str, author: &str, cat: &str, note: &str, date: &str) -> Book {
        Book {
            id: 0,
            title: title.to_string(),
            author: author.to_string(),
            category: cat.to_string(),
            note: note.to_string(),
            date: date.to_string(),
            created_at: String::new(),
        }
    }

    #[test]
    fn distribution_skips_empty_categories_and_sentinel() {
        let books = vec![
            book("a", "x", "待借", "", ""),
            book("b", "x", "待借", "", ""),
            book("c", "x", "食譜", "", ""),
        ];
        let dist = category_distribution(&books);
        assert_eq!(dist.len(), 2);
        assert!(dist.iter().any(|s| s.name == "待借" && s.count == 2));
        assert!(dist.iter().all(|s| s.name != "全部"));
    }

    #[test]
    fn top_authors_excludes_sentinel_and_sorts_by_count() {
        let mut books = vec![book("t", UNCLASSIFIED_AUTHOR, "待借", "", "")];
        for _ in 0..3 {
            books.push(book("t", "張三", "待借", "", ""));
        }
        books.push(book("t", "李四", "待借", "", ""));

        let top = top_authors(&books);
        assert_eq!(top[0].name, "張三");
        assert_eq!(top[0].count, 3);
        assert!(top.iter().all(|n| n.name != UNCLASSIFIED_AUTHOR));
    }

    #[test]
    fn borrowers_exclude_isbn_like_notes() {
        let books = vec![
            book("a", "x", "待借", "9789571234560", ""),
            book("b", "x", "待借", "妹", ""),
            book("c", "x", "待借", " 妹 ", ""),
            book("d", "x", "待借", "", ""),
        ];
        let top = top_borrowers(&books);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0].name, "妹");
        assert_eq!(top[0].count, 2); // note text is trimmed before grouping
    }

    #[test]
    fn top_lists_are_capped() {
        let mut books = Vec::new();
        for i in 0..15 {
            books.push(book("t", &format!("author{i}"), "待借", "", ""));
        }
        assert_eq!(top_authors(&books).len(), TOP_N);
    }

    #[test]
    fn summary_counts_todays_additions() {
        let books = vec![
            book("a", "x", "待借", "", "2024-05-05"),
            book("b", "y", "待借", "", "2024-05-06"),
        ];
        let s = summarize(&books, "2024-05-05");
        assert_eq!(s.total_books, 2);
        assert_eq!(s.total_authors, 2);
        assert_eq!(s.added_today, 1);
        assert_eq!(s.category_count, 8);
    }

    #[test]
    fn action_counts_by_kind() {
        let b = book("t", "x", "待借", "", "");
        let acts = vec![
            Activity::record(ActionKind::Add, &b, ActivityDetails::default()),
            Activity::record(ActionKind::Add, &b, ActivityDetails::default()),
            Activity::record(ActionKind::Delete, &b, ActivityDetails::default()),
        ];
        let counts = count_actions(&acts);
        assert_eq!(counts.total, 3);
        assert_eq!(counts.adds, 2);
        assert_eq!(counts.deletes, 1);
        assert_eq!(counts.edits, 0);
    }
}
