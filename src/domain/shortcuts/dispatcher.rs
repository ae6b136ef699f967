use serde::Serialize;
use tracing::debug;

use super::{
    actions::{Action, Effect, ScrollTarget, Section, SCROLL_STEP},
    chord::{ChordMachine, ChordOutcome},
    handlers::{Reaction, ShortcutHandlers},
    history::CommandHistory,
    keys::KeyEvent,
};
use crate::entities::theme::{Theme, ThemeControl};

/// Outcome of one key event.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Dispatch {
    pub action: Option<Action>,
    pub effects: Vec<Effect>,
    pub note: Option<String>,
    pub prevent_default: bool,
}

impl Dispatch {
    fn ignored() -> Self {
        Dispatch::default()
    }

    fn handled(action: Action) -> Self {
        Dispatch {
            action: Some(action),
            prevent_default: true,
            ..Dispatch::default()
        }
    }
}

/// Maps key events to shortcut actions, page overrides and their defaults.
#[derive(Debug, Clone, Default)]
pub struct ShortcutDispatcher {
    chord: ChordMachine,
    history: CommandHistory,
}

impl ShortcutDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_history(history: CommandHistory) -> Self {
        ShortcutDispatcher {
            history,
            ..Self::default()
        }
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn into_history(self) -> CommandHistory {
        self.history
    }

    pub fn handle(
        &mut self,
        event: &KeyEvent,
        page: &mut dyn ShortcutHandlers,
        theme: &mut dyn ThemeControl,
    ) -> Dispatch {
        if event.in_text_input {
            return Dispatch::ignored();
        }

        let dispatch = match self.chord.on_event(event) {
            ChordOutcome::Resolved(target) => switch_theme(target, theme),
            ChordOutcome::PassThrough if event.is_down() => match Action::for_key(&event.key) {
                Some(action) => run_action(action, page),
                None => Dispatch::ignored(),
            },
            _ => Dispatch::ignored(),
        };

        if let Some(note) = &dispatch.note {
            debug!(key = ?event.key, note = %note, "Shortcut dispatched");
            self.history.push(note.clone());
        }
        dispatch
    }
}

fn switch_theme(target: Theme, theme: &mut dyn ThemeControl) -> Dispatch {
    let mut dispatch = Dispatch::handled(Action::SwitchTheme(target));
    if theme.current() != target {
        theme.set(target);
        dispatch.effects.push(Effect::SetTheme { theme: target });
        dispatch.note = Some(format!("Switched to {} theme", target));
    }
    dispatch
}

fn run_action(action: Action, page: &mut dyn ShortcutHandlers) -> Dispatch {
    let reaction = match action {
        Action::ScrollDown => page.scroll_down(),
        Action::ScrollUp => page.scroll_up(),
        Action::ScrollToTop => page.scroll_to_top(),
        Action::ScrollToBottom => page.scroll_to_bottom(),
        Action::NavigateHome => page.navigate_home(),
        Action::NavigateBlog => page.navigate_blog(),
        Action::NavigateBack => page.navigate_back(),
        Action::NavigateNext => page.navigate_next(),
        // Pages without articles may still scroll to their projects.
        Action::NavigatePrev => match page.navigate_prev() {
            Reaction::Fallback => page.scroll_to_section(Section::Projects),
            reaction => reaction,
        },
        Action::ScrollToSection(section) => page.scroll_to_section(section),
        Action::Refresh => page.refresh(),
        Action::ToggleShortcuts => page.toggle_shortcuts(),
        Action::CloseDialogs => page.close_dialogs(),
        Action::SwitchTheme(_) => Reaction::nothing(),
    };

    let mut dispatch = Dispatch::handled(action);
    match reaction {
        Reaction::Handled { effects, note } => {
            dispatch.effects = effects;
            dispatch.note = note;
        }
        Reaction::Fallback => {
            let (effects, note) = default_behaviour(action);
            dispatch.effects = effects;
            dispatch.note = note.map(str::to_string);
        }
    }

    // These two are always recorded, whoever handled them.
    match action {
        Action::ToggleShortcuts => dispatch.note = Some("Toggled shortcuts".to_string()),
        Action::CloseDialogs => dispatch.note = Some("Closed dialogs".to_string()),
        _ => {}
    }
    dispatch
}

fn default_behaviour(action: Action) -> (Vec<Effect>, Option<&'static str>) {
    match action {
        Action::ScrollDown => (vec![Effect::ScrollBy { viewport_fraction: SCROLL_STEP }], Some("Scrolled down")),
        Action::ScrollUp => (vec![Effect::ScrollBy { viewport_fraction: -SCROLL_STEP }], Some("Scrolled up")),
        Action::ScrollToTop => (vec![Effect::ScrollTo { target: ScrollTarget::Top }], Some("Scrolled to top")),
        Action::ScrollToBottom => (vec![Effect::ScrollTo { target: ScrollTarget::Bottom }], Some("Scrolled to bottom")),
        Action::NavigateHome => (vec![Effect::navigate("/")], Some("Navigated home")),
        Action::NavigateBlog => (vec![Effect::navigate("/blog")], Some("Opened blog")),
        Action::NavigateBack => (vec![Effect::HistoryBack], Some("Navigated back")),
        Action::Refresh => (vec![Effect::Reload], Some("Refreshed page")),
        Action::NavigateNext
        | Action::NavigatePrev
        | Action::ScrollToSection(_)
        | Action::ToggleShortcuts
        | Action::CloseDialogs
        | Action::SwitchTheme(_) => (Vec::new(), None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::theme::ThemeContext;
    use crate::shortcuts::handlers::NoHandlers;

    struct Counting {
        toggles: usize,
    }

    impl ShortcutHandlers for Counting {
        fn toggle_shortcuts(&mut self) -> Reaction {
            self.toggles += 1;
            Reaction::handled(vec![Effect::ShowShortcuts { visible: true }])
        }

        fn navigate_next(&mut self) -> Reaction {
            Reaction::noted(vec![Effect::navigate("/blog/2")], "Navigated to next article")
        }
    }

    fn press(dispatcher: &mut ShortcutDispatcher, key: &str, at: u64) -> Dispatch {
        let mut theme = ThemeContext::default();
        dispatcher.handle(&KeyEvent::down(key, at), &mut NoHandlers, &mut theme)
    }

    #[test]
    fn defaults_apply_without_page_handlers() {
        let mut dispatcher = ShortcutDispatcher::new();

        let dispatch = press(&mut dispatcher, "j", 0);
        assert_eq!(dispatch.effects, vec![Effect::ScrollBy { viewport_fraction: 0.3 }]);
        assert!(dispatch.prevent_default);

        press(&mut dispatcher, "h", 1);
        let notes: Vec<_> = dispatcher.history().entries().collect();
        assert_eq!(notes, vec!["Scrolled down", "Navigated home"]);
    }

    #[test]
    fn sections_are_left_to_pages_that_have_them() {
        let mut dispatcher = ShortcutDispatcher::new();

        for (at, key) in ["c", "s", "p"].into_iter().enumerate() {
            let dispatch = press(&mut dispatcher, key, at as u64);
            assert!(dispatch.effects.is_empty(), "{key}");
            assert!(dispatch.prevent_default, "{key}");
        }
        assert!(dispatcher.history().is_empty());
    }

    #[test]
    fn next_without_handler_does_nothing_but_is_consumed() {
        let mut dispatcher = ShortcutDispatcher::new();

        let dispatch = press(&mut dispatcher, "n", 0);

        assert!(dispatch.effects.is_empty());
        assert!(dispatch.prevent_default);
        assert!(dispatcher.history().is_empty());
    }

    #[test]
    fn page_overrides_win_and_toggle_is_always_noted() {
        let mut dispatcher = ShortcutDispatcher::new();
        let mut page = Counting { toggles: 0 };
        let mut theme = ThemeContext::default();

        let dispatch = dispatcher.handle(&KeyEvent::down("?", 0), &mut page, &mut theme);
        assert_eq!(page.toggles, 1);
        assert_eq!(dispatch.note.as_deref(), Some("Toggled shortcuts"));

        let dispatch = dispatcher.handle(&KeyEvent::down("l", 10), &mut page, &mut theme);
        assert_eq!(dispatch.effects, vec![Effect::navigate("/blog/2")]);
        assert_eq!(dispatcher.history().last(), Some("Navigated to next article"));
    }

    #[test]
    fn text_input_events_are_ignored() {
        let mut dispatcher = ShortcutDispatcher::new();
        let mut theme = ThemeContext::default();

        let dispatch = dispatcher.handle(&KeyEvent::down("j", 0).in_text_input(), &mut NoHandlers, &mut theme);

        assert_eq!(dispatch, Dispatch::default());
        assert!(dispatcher.history().is_empty());
    }

    #[test]
    fn chord_switches_theme_once() {
        let mut dispatcher = ShortcutDispatcher::new();
        let mut theme = ThemeContext::new(Theme::Light);

        dispatcher.handle(&KeyEvent::down("t", 0), &mut NoHandlers, &mut theme);
        let dispatch = dispatcher.handle(&KeyEvent::down("d", 50), &mut NoHandlers, &mut theme);
        assert_eq!(dispatch.effects, vec![Effect::SetTheme { theme: Theme::Dark }]);
        assert_eq!(theme.current(), Theme::Dark);

        let again = dispatcher.handle(&KeyEvent::down("d", 80), &mut NoHandlers, &mut theme);
        assert!(again.effects.is_empty());
        assert!(again.prevent_default);

        let notes: Vec<_> = dispatcher.history().entries().collect();
        assert_eq!(notes, vec!["Switched to dark theme"]);
    }

    #[test]
    fn single_keys_are_suppressed_while_chord_is_pending() {
        let mut dispatcher = ShortcutDispatcher::new();
        let mut theme = ThemeContext::default();

        dispatcher.handle(&KeyEvent::down("t", 0), &mut NoHandlers, &mut theme);
        let dispatch = dispatcher.handle(&KeyEvent::down("j", 10), &mut NoHandlers, &mut theme);
        assert!(dispatch.action.is_none());

        dispatcher.handle(&KeyEvent::up("t", 20), &mut NoHandlers, &mut theme);
        let dispatch = dispatcher.handle(&KeyEvent::down("j", 30), &mut NoHandlers, &mut theme);
        assert_eq!(dispatch.action, Some(Action::ScrollDown));
    }

    #[test]
    fn lone_l_navigates_instead_of_switching_theme() {
        let mut dispatcher = ShortcutDispatcher::new();
        let mut theme = ThemeContext::new(Theme::Dark);

        let dispatch = dispatcher.handle(&KeyEvent::down("l", 0), &mut NoHandlers, &mut theme);

        assert_eq!(dispatch.action, Some(Action::NavigateNext));
        assert_eq!(theme.current(), Theme::Dark);
    }
}
