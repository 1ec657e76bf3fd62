//! Row mapping of the spreadsheet interchange format.
//! Column order and headers are fixed; import recognizes the same headers
//! (plus English aliases).

use crate::models::book::Book;

pub const SHEET_NAME: &str = "圖書館清單";

pub fn headers() -> [&'static str; 7] {
    [
        "系統ID",
        "分類",
        "書名",
        "作者",
        "借閱人_備註",
        "日期",
        "建立時間",
    ]
}

pub fn book_to_row(book: &Book) -> [String; 7] {
    [
        book.id.to_string(),
        book.category.clone(),
        book.title.clone(),
        book.author.clone(),
        book.note.clone(),
        book.date.clone(),
        book.created_at.clone(),
    ]
}
