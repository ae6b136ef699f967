pub mod blog;
pub mod extractors;
pub mod portfolio;
pub mod shortcut_session;
