use chrono::{Local, NaiveDate};

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Today as "YYYY-MM-DD", the key used for same-day activity scoping.
pub fn today_str() -> String {
    today().format("%Y-%m-%d").to_string()
}

/// (timestamp, date, time) of the current local instant, in the shapes
/// stored on activity entries.
pub fn now_parts() -> (String, String, String) {
    let now = Local::now();
    (
        now.format("%Y-%m-%d %H:%M:%S").to_string(),
        now.format("%Y-%m-%d").to_string(),
        now.format("%H:%M:%S").to_string(),
    )
}

pub fn now_millis() -> i64 {
    Local::now().timestamp_millis()
}

/// Book dates are free-form strings but the CLI only accepts ISO dates
/// (or empty) on add/edit.
pub fn is_valid_book_date(s: &str) -> bool {
    s.is_empty() || NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn book_date_validation() {
        assert!(is_valid_book_date(""));
        assert!(is_valid_book_date("2024-01-31"));
        assert!(!is_valid_book_date("2024-13-01"));
        assert!(!is_valid_book_date("31/01/2024"));
    }
}
