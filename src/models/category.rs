//! Fixed category set: the sentinel "全部" plus 8 real categories.
//! Static display configuration, not a persisted entity.

/// Sentinel id matching every category when used as a filter.
pub const ALL_CATEGORY: &str = "全部";

/// Default category for new records.
pub const DEFAULT_CATEGORY: &str = "新書-待借";

/// Display color for categories not in the fixed set.
pub const FALLBACK_COLOR: &str = "#64748b";

#[derive(Debug, Clone, Copy)]
pub struct CategoryDef {
    pub id: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

pub const CATEGORIES: [CategoryDef; 9] = [
    CategoryDef {
        id: ALL_CATEGORY,
        label: "全部",
        color: "#8b5cf6",
    },
    CategoryDef {
        id: "新書-待借",
        label: "📚 新書-待借",
        color: "#3b82f6",
    },
    CategoryDef {
        id: "待借",
        label: "📖 待借",
        color: "#06b6d4",
    },
    CategoryDef {
        id: "未到館",
        label: "🚚 未到館",
        color: "#f59e0b",
    },
    CategoryDef {
        id: "不能借",
        label: "🚫 不能借",
        color: "#ef4444",
    },
    CategoryDef {
        id: "食譜",
        label: "🍳 食譜",
        color: "#10b981",
    },
    CategoryDef {
        id: "頁數太多",
        label: "📏 頁數太多",
        color: "#6366f1",
    },
    CategoryDef {
        id: "已看-3447本",
        label: "✅ 已看(主)",
        color: "#22c55e",
    },
    CategoryDef {
        id: "已看-1",
        label: "✅ 已看(1)",
        color: "#84cc16",
    },
];

pub fn find(id: &str) -> Option<&'static CategoryDef> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// The 8 persistable categories (sentinel excluded).
pub fn real_categories() -> impl Iterator<Item = &'static CategoryDef> {
    CATEGORIES.iter().filter(|c| c.id != ALL_CATEGORY)
}

/// Valid values for a persisted record's category field.
pub fn is_valid(id: &str) -> bool {
    id != ALL_CATEGORY && find(id).is_some()
}

pub fn color_of(id: &str) -> &'static str {
    find(id).map(|c| c.color).unwrap_or(FALLBACK_COLOR)
}

/// Label without the emoji prefix ("📖 待借" → "待借").
pub fn short_label(def: &CategoryDef) -> &'static str {
    def.label.split_once(' ').map(|(_, l)| l).unwrap_or(def.label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_not_persistable() {
        assert!(!is_valid(ALL_CATEGORY));
        assert!(is_valid(DEFAULT_CATEGORY));
        assert!(is_valid("已看-1"));
        assert!(!is_valid("不存在的分類"));
    }

    #[test]
    fn unknown_category_gets_fallback_color() {
        assert_eq!(color_of("不存在的分類"), FALLBACK_COLOR);
        assert_eq!(color_of("待借"), "#06b6d4");
    }

    #[test]
    fn short_label_strips_emoji_prefix() {
        let cat = find("待借").unwrap();
        assert_eq!(short_label(cat), "待借");
        let all = find(ALL_CATEGORY).unwrap();
        assert_eq!(short_label(all), "全部");
    }
}
