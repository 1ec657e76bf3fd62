//! Static display configuration for known borrower names.
//! Used only for rendering note values; never persisted.

use crate::utils::isbn::is_isbn_like;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorrowerStyle {
    pub name: &'static str,
    pub color: &'static str,
    pub bg: &'static str,
    pub label: &'static str,
}

pub const BORROWER_STYLES: [BorrowerStyle; 7] = [
    BorrowerStyle {
        name: "ELMO",
        color: "#8b5cf6",
        bg: "#f3e8ff",
        label: "🟣 ELMO",
    },
    BorrowerStyle {
        name: "妹",
        color: "#ec4899",
        bg: "#fce7f3",
        label: "🩷 妹",
    },
    BorrowerStyle {
        name: "妹(網路)",
        color: "#be185d",
        bg: "#fce7f3",
        label: "🩷 妹(網路)",
    },
    BorrowerStyle {
        name: "州家庭",
        color: "#3b82f6",
        bg: "#dbeafe",
        label: "🔵 州家庭",
    },
    BorrowerStyle {
        name: "州家庭(網路)",
        color: "#1d4ed8",
        bg: "#dbeafe",
        label: "🔵 州家庭(網路)",
    },
    BorrowerStyle {
        name: "州個人",
        color: "#10b981",
        bg: "#d1fae5",
        label: "🟢 州個人",
    },
    BorrowerStyle {
        name: "州個人(網路)",
        color: "#047857",
        bg: "#d1fae5",
        label: "🟢 州個人(網路)",
    },
];

pub fn style_for(name: &str) -> Option<&'static BorrowerStyle> {
    BORROWER_STYLES.iter().find(|b| b.name == name)
}

/// How a note value should be rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteBadge {
    Empty,
    Known(&'static BorrowerStyle),
    Online,
    IsbnLike,
    Plain,
}

pub fn classify_note(note: &str) -> NoteBadge {
    if note.is_empty() || note == "-" || note == "0" {
        return NoteBadge::Empty;
    }
    if let Some(style) = style_for(note) {
        return NoteBadge::Known(style);
    }
    if note.contains("網路") {
        return NoteBadge::Online;
    }
    if is_isbn_like(note) {
        return NoteBadge::IsbnLike;
    }
    NoteBadge::Plain
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_borrower_has_badge_style() {
        match classify_note("妹") {
            NoteBadge::Known(style) => assert_eq!(style.color, "#ec4899"),
            other => panic!("expected known borrower, got {:?}", other),
        }
    }

    #[test]
    fn isbn_note_renders_plain() {
        assert_eq!(classify_note("9789571234560"), NoteBadge::IsbnLike);
    }

    #[test]
    fn online_marker_without_config_entry() {
        assert_eq!(classify_note("某人(網路)"), NoteBadge::Online);
    }
}
