use serde::{Deserialize, Serialize};

use super::keys::Key;
use crate::entities::theme::Theme;

/// Fraction of the viewport height moved by one `j`/`k` press.
pub const SCROLL_STEP: f32 = 0.3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Projects,
    Contact,
    Skills,
}

impl Section {
    pub fn id(&self) -> &'static str {
        match self {
            Section::Projects => "projects",
            Section::Contact => "contact",
            Section::Skills => "skills",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrollTarget {
    Top,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "action", content = "value", rename_all = "snake_case")]
pub enum Action {
    ScrollDown,
    ScrollUp,
    ScrollToTop,
    ScrollToBottom,
    NavigateHome,
    NavigateBlog,
    NavigateBack,
    NavigateNext,
    NavigatePrev,
    ScrollToSection(Section),
    Refresh,
    ToggleShortcuts,
    CloseDialogs,
    SwitchTheme(Theme),
}

impl Action {
    /// Single-key binding table.
    pub fn for_key(key: &Key) -> Option<Action> {
        let action = match key {
            Key::Char('j') => Action::ScrollDown,
            Key::Char('k') => Action::ScrollUp,
            Key::Char('g') => Action::ScrollToTop,
            Key::Char('G') => Action::ScrollToBottom,
            Key::Char('h') => Action::NavigateHome,
            Key::Char('b') => Action::NavigateBlog,
            Key::Backspace => Action::NavigateBack,
            Key::Char('n') | Key::Char('l') => Action::NavigateNext,
            Key::Char('p') => Action::NavigatePrev,
            Key::Char('c') => Action::ScrollToSection(Section::Contact),
            Key::Char('s') => Action::ScrollToSection(Section::Skills),
            Key::Char('r') => Action::Refresh,
            Key::Char('?') => Action::ToggleShortcuts,
            Key::Escape => Action::CloseDialogs,
            _ => return None,
        };
        Some(action)
    }
}

/// Browser-side work the client performs for a dispatched shortcut.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Effect {
    ScrollBy { viewport_fraction: f32 },
    ScrollTo { target: ScrollTarget },
    ScrollIntoView { section: Section },
    Navigate { path: String },
    HistoryBack,
    Reload,
    SetTheme { theme: Theme },
    ShowShortcuts { visible: bool },
    FocusSearch,
    SelectCategory { category: String },
}

impl Effect {
    pub fn navigate(path: impl Into<String>) -> Self {
        Effect::Navigate { path: path.into() }
    }
}
