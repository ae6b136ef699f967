//! Keyboard shortcut handling: key parsing, the theme chord, the action
//! dispatcher and its recent-command history.

pub mod actions;
pub mod chord;
pub mod dispatcher;
pub mod handlers;
pub mod history;
pub mod keys;
pub mod reference;

pub use actions::{Action, Effect, ScrollTarget, Section};
pub use dispatcher::{Dispatch, ShortcutDispatcher};
pub use handlers::{Reaction, ShortcutHandlers};
pub use history::CommandHistory;
pub use keys::{Key, KeyEvent, KeyPhase};
