use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShortcutEntry {
    pub keys: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ShortcutGroup {
    pub id: &'static str,
    pub name: &'static str,
    pub shortcuts: Vec<ShortcutEntry>,
}

const fn entry(keys: &'static str, label: &'static str, description: &'static str, category: &'static str) -> ShortcutEntry {
    ShortcutEntry { keys, label, description, category }
}

pub const SHORTCUTS: [ShortcutEntry; 11] = [
    entry("h", "home", "Navigate home", "navigation"),
    entry("b", "blog", "Open blog", "navigation"),
    entry("Backspace", "back", "Navigate back", "navigation"),
    entry("n/p", "next/prev", "Navigate articles", "navigation"),
    entry("h/l", "prev/next", "Navigate projects", "navigation"),
    entry("j/k", "scroll", "Scroll up/down", "scroll"),
    entry("g/G", "top/bottom", "Scroll to top/bottom", "scroll"),
    entry("r", "refresh", "Refresh page", "utility"),
    entry("t+l/d", "theme", "Switch theme", "theme"),
    entry("?", "shortcuts", "Show shortcuts", "general"),
    entry("Escape", "close", "Close dialogs", "general"),
];

pub const CATEGORIES: [(&str, &str); 5] = [
    ("navigation", "Navigation"),
    ("scroll", "Scrolling"),
    ("utility", "Utility"),
    ("theme", "Theme"),
    ("general", "General"),
];

/// The help table grouped by category in display order.
pub fn grouped_shortcuts() -> Vec<ShortcutGroup> {
    CATEGORIES
        .iter()
        .map(|&(id, name)| ShortcutGroup {
            id,
            name,
            shortcuts: SHORTCUTS.iter().filter(|s| s.category == id).copied().collect(),
        })
        .collect()
}
