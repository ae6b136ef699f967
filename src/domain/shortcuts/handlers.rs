use super::actions::{Effect, Section};

/// A page's answer to a shortcut action.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Reaction {
    /// Let the dispatcher apply its default behaviour.
    #[default]
    Fallback,
    Handled {
        effects: Vec<Effect>,
        note: Option<String>,
    },
}

impl Reaction {
    pub fn handled(effects: Vec<Effect>) -> Self {
        Reaction::Handled { effects, note: None }
    }

    pub fn noted(effects: Vec<Effect>, note: impl Into<String>) -> Self {
        Reaction::Handled {
            effects,
            note: Some(note.into()),
        }
    }

    /// Consumed without doing anything.
    pub fn nothing() -> Self {
        Reaction::handled(Vec::new())
    }
}

/// Per-page overrides for shortcut actions. Every method falls back to the
/// dispatcher default unless a page supplies its own behaviour.
pub trait ShortcutHandlers {
    fn scroll_down(&mut self) -> Reaction {
        Reaction::Fallback
    }

    fn scroll_up(&mut self) -> Reaction {
        Reaction::Fallback
    }

    fn scroll_to_top(&mut self) -> Reaction {
        Reaction::Fallback
    }

    fn scroll_to_bottom(&mut self) -> Reaction {
        Reaction::Fallback
    }

    fn navigate_home(&mut self) -> Reaction {
        Reaction::Fallback
    }

    fn navigate_blog(&mut self) -> Reaction {
        Reaction::Fallback
    }

    fn navigate_back(&mut self) -> Reaction {
        Reaction::Fallback
    }

    fn navigate_next(&mut self) -> Reaction {
        Reaction::Fallback
    }

    fn navigate_prev(&mut self) -> Reaction {
        Reaction::Fallback
    }

    fn scroll_to_section(&mut self, _section: Section) -> Reaction {
        Reaction::Fallback
    }

    fn refresh(&mut self) -> Reaction {
        Reaction::Fallback
    }

    fn toggle_shortcuts(&mut self) -> Reaction {
        Reaction::Fallback
    }

    fn close_dialogs(&mut self) -> Reaction {
        Reaction::Fallback
    }
}

/// Page without overrides; every action takes its default.
#[derive(Debug, Default)]
pub struct NoHandlers;

impl ShortcutHandlers for NoHandlers {}
