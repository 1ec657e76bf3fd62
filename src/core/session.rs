//! Explicit UI session state with a reducer-style transition table.
//!
//! All transient interaction state lives in one struct instead of ambient
//! globals; every user action names the fields it writes. The one rule
//! beyond plain field writes: changing the search term, category or sort
//! key resets the page to 1.

use crate::core::pipeline::{CatalogQuery, SortKey};
use crate::models::category::ALL_CATEGORY;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Table,
    Card,
    Activity,
    Stats,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Black,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
            Theme::Black => "black",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            "black" => Some(Theme::Black),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub search: String,
    pub category: String,
    pub sort: SortKey,
    /// 1-based page into the filtered result.
    pub page: usize,
    /// Single-row edit tracking; a UI affordance, not a backend lock.
    pub editing: Option<i64>,
    pub view: ViewMode,
    pub theme: Theme,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: ALL_CATEGORY.to_string(),
            sort: SortKey::default(),
            page: 1,
            editing: None,
            view: ViewMode::default(),
            theme: Theme::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    SetSearch(String),
    SetCategory(String),
    SetSort(SortKey),
    SetPage(usize),
    StartEdit(i64),
    CancelEdit,
    SetView(ViewMode),
    SetTheme(Theme),
}

impl SessionState {
    /// Apply one action. Transition table:
    /// - SetSearch    writes search, resets page to 1
    /// - SetCategory  writes category, resets page to 1
    /// - SetSort      writes sort, resets page to 1
    /// - SetPage      writes page, clamped to >= 1
    /// - StartEdit    writes editing
    /// - CancelEdit   clears editing
    /// - SetView      writes view
    /// - SetTheme     writes theme
    pub fn apply(mut self, action: SessionAction) -> Self {
        match action {
            SessionAction::SetSearch(term) => {
                self.search = term;
                self.page = 1;
            }
            SessionAction::SetCategory(cat) => {
                self.category = cat;
                self.page = 1;
            }
            SessionAction::SetSort(sort) => {
                self.sort = sort;
                self.page = 1;
            }
            SessionAction::SetPage(page) => {
                self.page = page.max(1);
            }
            SessionAction::StartEdit(id) => {
                self.editing = Some(id);
            }
            SessionAction::CancelEdit => {
                self.editing = None;
            }
            SessionAction::SetView(view) => {
                self.view = view;
            }
            SessionAction::SetTheme(theme) => {
                self.theme = theme;
            }
        }
        self
    }

    /// The pipeline query this state currently describes.
    pub fn query(&self) -> CatalogQuery {
        CatalogQuery {
            search: self.search.clone(),
            category: self.category.clone(),
            sort: self.sort,
            page: self.page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_changes_reset_the_page() {
        let state = SessionState::default()
            .apply(SessionAction::SetPage(5))
            .apply(SessionAction::SetSearch("紅".to_string()));
        assert_eq!(state.page, 1);

        let state = state
            .apply(SessionAction::SetPage(3))
            .apply(SessionAction::SetCategory("待借".to_string()));
        assert_eq!(state.page, 1);

        let state = state
            .apply(SessionAction::SetPage(2))
            .apply(SessionAction::SetSort(SortKey::Author));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn set_page_clamps_to_one() {
        let state = SessionState::default().apply(SessionAction::SetPage(0));
        assert_eq!(state.page, 1);
    }

    #[test]
    fn one_record_editable_at_a_time() {
        let state = SessionState::default().apply(SessionAction::StartEdit(3));
        assert_eq!(state.editing, Some(3));
        let state = state.apply(SessionAction::StartEdit(9));
        assert_eq!(state.editing, Some(9));
        let state = state.apply(SessionAction::CancelEdit);
        assert_eq!(state.editing, None);
    }

    #[test]
    fn theme_round_trips_through_strings() {
        for name in ["light", "dark", "black"] {
            let theme = Theme::from_str(name).unwrap();
            assert_eq!(theme.as_str(), name);
        }
        assert!(Theme::from_str("sepia").is_none());
    }

    #[test]
    fn query_reflects_state() {
        let state = SessionState::default()
            .apply(SessionAction::SetSearch("abc".to_string()))
            .apply(SessionAction::SetSort(SortKey::Title))
            .apply(SessionAction::SetPage(2));
        let q = state.query();
        assert_eq!(q.search, "abc");
        assert_eq!(q.sort, SortKey::Title);
        assert_eq!(q.page, 2);
    }
}
