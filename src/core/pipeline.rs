//! Filter/sort/paginate pipeline: pure function of (records, query) to one
//! visible page.

use crate::core::collate::StrokeCollator;
use crate::errors::AppResult;
use crate::models::book::{Book, UNCLASSIFIED_AUTHOR};
use crate::models::category::ALL_CATEGORY;
use clap::ValueEnum;
use std::cmp::Ordering;

/// Fixed page size of the catalog views.
pub const PAGE_SIZE: usize = 50;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    /// Newest additions first (descending numeric id).
    Added,
    /// Date, newest first; empty dates last.
    #[default]
    DateDesc,
    /// Date, oldest first; empty dates last.
    DateAsc,
    /// Author by stroke count, title as tie-break; unclassified last.
    Author,
    /// Title by stroke count.
    Title,
}

#[derive(Clone, Debug)]
pub struct CatalogQuery {
    pub search: String,
    pub category: String,
    pub sort: SortKey,
    /// 1-based page number.
    pub page: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORY.to_string(),
            sort: SortKey::default(),
            page: 1,
        }
    }
}

/// One visible page plus the totals the pagination controls need.
#[derive(Debug)]
pub struct CatalogPage {
    pub books: Vec<Book>,
    pub matched: usize,
    pub total_pages: usize,
    pub page: usize,
}

/// Search-and-category predicate. A record matches when the term is empty
/// or a case-insensitive substring of title, author or note, and the
/// active category is the sentinel or equals the record's category.
pub fn matches_query(book: &Book, search_lower: &str, category: &str) -> bool {
    let matches_search = search_lower.is_empty()
        || book.title.to_lowercase().contains(search_lower)
        || book.author.to_lowercase().contains(search_lower)
        || book.note.to_lowercase().contains(search_lower);
    let matches_category = category == ALL_CATEGORY || book.category == category;
    matches_search && matches_category
}

/// Stable in-place sort under the given key.
pub fn sort_books(books: &mut [Book], sort: SortKey, coll: &StrokeCollator) {
    match sort {
        SortKey::Added => {
            // Descending by id; a missing identifier counts as 0.
            books.sort_by(|a, b| b.id.max(0).cmp(&a.id.max(0)));
        }
        SortKey::DateDesc => books.sort_by(|a, b| cmp_dates(&a.date, &b.date, true)),
        SortKey::DateAsc => books.sort_by(|a, b| cmp_dates(&a.date, &b.date, false)),
        SortKey::Author => books.sort_by(|a, b| cmp_authors(a, b, coll)),
        SortKey::Title => books.sort_by(|a, b| coll.compare(&a.title, &b.title)),
    }
}

/// Empty dates always sort last, regardless of direction.
fn cmp_dates(a: &str, b: &str, descending: bool) -> Ordering {
    match (a.is_empty(), b.is_empty()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => {
            if descending {
                b.cmp(a)
            } else {
                a.cmp(b)
            }
        }
    }
}

/// Unclassified authors always sort last; ties broken on title.
fn cmp_authors(a: &Book, b: &Book, coll: &StrokeCollator) -> Ordering {
    match (
        a.author == UNCLASSIFIED_AUTHOR,
        b.author == UNCLASSIFIED_AUTHOR,
    ) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => coll
            .compare(&a.author, &b.author)
            .then_with(|| coll.compare(&a.title, &b.title)),
    }
}

/// Run the full pipeline and slice out the requested page.
pub fn run_query(books: &[Book], query: &CatalogQuery) -> AppResult<CatalogPage> {
    let coll = StrokeCollator::new()?;
    let search_lower = query.search.to_lowercase();

    let mut matched: Vec<Book> = books
        .iter()
        .filter(|b| matches_query(b, &search_lower, &query.category))
        .cloned()
        .collect();
    sort_books(&mut matched, query.sort, &coll);

    let total = matched.len();
    let total_pages = total.div_ceil(PAGE_SIZE);
    let page = query.page.max(1);

    let start = (page - 1) * PAGE_SIZE;
    let page_books = if start >= total {
        Vec::new()
    } else {
        matched[start..(start + PAGE_SIZE).min(total)].to_vec()
    };

    Ok(CatalogPage {
        books: page_books,
        matched: total,
        total_pages,
        page,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(id: i64, title: &str, author: &str, category: &str, note: &str, date: &str) -> Book {
        Book {
            id,
            title: title.to_string(),
            author: author.to_string(),
            category: category.to_string(),
            note: note.to_string(),
            date: date.to_string(),
            created_at: String::new(),
        }
    }

    fn sample() -> Vec<Book> {
        vec![
            book(1, "A", "張三", "待借", "妹", "2024-01-01"),
            book(2, "B", "李四", "食譜", "", ""),
            book(3, "紅樓夢", UNCLASSIFIED_AUTHOR, "待借", "9789571234560", "2024-02-01"),
            book(4, "C", "張三", "已看-1", "state library", "2023-12-31"),
        ]
    }

    #[test]
    fn all_sentinel_matches_every_category() {
        let books = sample();
        let q = CatalogQuery::default();
        let page = run_query(&books, &q).unwrap();
        assert_eq!(page.matched, books.len());
    }

    #[test]
    fn category_filter_is_exact() {
        let books = sample();
        let q = CatalogQuery {
            category: "待借".to_string(),
            ..Default::default()
        };
        let page = run_query(&books, &q).unwrap();
        assert_eq!(page.matched, 2);
        assert!(page.books.iter().all(|b| b.category == "待借"));
    }

    #[test]
    fn search_is_case_insensitive_over_three_fields() {
        let books = sample();
        let q = CatalogQuery {
            search: "LIBRARY".to_string(),
            ..Default::default()
        };
        let page = run_query(&books, &q).unwrap();
        assert_eq!(page.matched, 1);
        assert_eq!(page.books[0].id, 4);

        // note field matches too
        let q = CatalogQuery {
            search: "妹".to_string(),
            ..Default::default()
        };
        assert_eq!(run_query(&books, &q).unwrap().matched, 1);
    }

    #[test]
    fn date_desc_puts_empty_dates_last() {
        let books = vec![
            book(1, "A", "x", "待借", "", "2024-01-01"),
            book(2, "B", "x", "待借", "", ""),
        ];
        let q = CatalogQuery {
            sort: SortKey::DateDesc,
            ..Default::default()
        };
        let page = run_query(&books, &q).unwrap();
        assert_eq!(page.books[0].title, "A");
        assert_eq!(page.books[1].title, "B");

        let q = CatalogQuery {
            sort: SortKey::DateAsc,
            ..Default::default()
        };
        let page = run_query(&books, &q).unwrap();
        assert_eq!(page.books.last().unwrap().title, "B");
    }

    #[test]
    fn author_sort_puts_unclassified_last() {
        let books = sample();
        let q = CatalogQuery {
            sort: SortKey::Author,
            ..Default::default()
        };
        let page = run_query(&books, &q).unwrap();
        assert_eq!(page.books.last().unwrap().author, UNCLASSIFIED_AUTHOR);
    }

    #[test]
    fn author_ties_break_on_title() {
        let books = vec![
            book(1, "佳", "張三", "待借", "", ""),
            book(2, "一", "張三", "待借", "", ""),
        ];
        let q = CatalogQuery {
            sort: SortKey::Author,
            ..Default::default()
        };
        let page = run_query(&books, &q).unwrap();
        assert_eq!(page.books[0].title, "一");
    }

    #[test]
    fn added_sorts_descending_by_id() {
        let books = sample();
        let q = CatalogQuery {
            sort: SortKey::Added,
            ..Default::default()
        };
        let page = run_query(&books, &q).unwrap();
        let ids: Vec<i64> = page.books.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![4, 3, 2, 1]);
    }

    #[test]
    fn pagination_partitions_without_gaps_or_overlap() {
        let books: Vec<Book> = (0..125)
            .map(|i| book(i, &format!("T{i}"), "x", "待借", "", ""))
            .collect();
        let mut seen = Vec::new();
        let mut q = CatalogQuery {
            sort: SortKey::Added,
            ..Default::default()
        };
        let first = run_query(&books, &q).unwrap();
        assert_eq!(first.total_pages, 3);
        for p in 1..=first.total_pages {
            q.page = p;
            let page = run_query(&books, &q).unwrap();
            seen.extend(page.books.iter().map(|b| b.id));
        }
        assert_eq!(seen.len(), 125);
        let expected: Vec<i64> = (0..125).rev().collect();
        assert_eq!(seen, expected);
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let books = sample();
        let q = CatalogQuery {
            page: 9,
            ..Default::default()
        };
        let page = run_query(&books, &q).unwrap();
        assert!(page.books.is_empty());
        assert_eq!(page.matched, 4);
        assert_eq!(page.total_pages, 1);
    }
}
