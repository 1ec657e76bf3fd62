//! Field-level diffing of edits and construction of activity entries.
//!
//! The diffed field set is closed: title, author, date, note, category, in
//! that order. Comparison is strict string inequality with no
//! normalization, so whitespace-only differences count as changes.

use crate::models::activity::{ActionKind, Activity, ActivityDetails, FieldChange};
use crate::models::book::Book;

/// Change triples for every field that differs between `old` and `new`.
pub fn diff_changes(old: &Book, new: &Book) -> Vec<FieldChange> {
    let pairs: [(&str, &str, &str); 5] = [
        ("title", &old.title, &new.title),
        ("author", &old.author, &new.author),
        ("date", &old.date, &new.date),
        ("note", &old.note, &new.note),
        ("category", &old.category, &new.category),
    ];

    pairs
        .iter()
        .filter(|(_, o, n)| o != n)
        .map(|(field, o, n)| FieldChange {
            field: field.to_string(),
            old: o.to_string(),
            new: n.to_string(),
        })
        .collect()
}

/// Entry for a completed edit. A category difference always classifies the
/// whole event as a category change carrying only the old/new category pair,
/// even when other fields changed too; it is never reported as a generic
/// field edit on top.
pub fn activity_for_edit(old: &Book, new: &Book) -> Activity {
    if old.category != new.category {
        return Activity::record(
            ActionKind::CategoryChange,
            new,
            ActivityDetails {
                old_category: Some(old.category.clone()),
                new_category: Some(new.category.clone()),
                ..Default::default()
            },
        );
    }

    Activity::record(
        ActionKind::Edit,
        new,
        ActivityDetails {
            changes: Some(diff_changes(old, new)),
            ..Default::default()
        },
    )
}

/// Entry for a newly created record: snapshot only, no diff.
pub fn activity_for_add(book: &Book) -> Activity {
    Activity::record(ActionKind::Add, book, ActivityDetails::default())
}

/// Entry for a deleted record, carrying its last-known snapshot.
pub fn activity_for_delete(book: &Book) -> Activity {
    Activity::record(ActionKind::Delete, book, ActivityDetails::default())
}
