use regex::Regex;
use std::sync::OnceLock;

static ISBN_RE: OnceLock<Regex> = OnceLock::new();

/// ISBN-like note detection: 9 digits, optionally prefixed by 978/979,
/// final character digit or X, hyphens ignored. Such notes are catalog
/// codes, not borrower names, and are excluded from borrower stats.
pub fn is_isbn_like(text: &str) -> bool {
    let compact: String = text.chars().filter(|c| *c != '-').collect();
    let re = ISBN_RE.get_or_init(|| Regex::new(r"^(978|979)?\d{9}[\dxX]$").unwrap());
    re.is_match(&compact)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirteen_digit_isbn() {
        assert!(is_isbn_like("9789571234560"));
        assert!(is_isbn_like("978-957-123-456-0"));
    }

    #[test]
    fn ten_digit_isbn_with_check_x() {
        assert!(is_isbn_like("957123456X"));
        assert!(is_isbn_like("957123456x"));
        assert!(is_isbn_like("9571234560"));
    }

    #[test]
    fn borrower_names_are_not_isbn() {
        assert!(!is_isbn_like("妹"));
        assert!(!is_isbn_like("州家庭"));
        assert!(!is_isbn_like(""));
        assert!(!is_isbn_like("12345"));
    }
}
