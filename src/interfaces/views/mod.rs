//! Server-rendered HTML built with maud.

pub mod blog;
pub mod home;
pub mod layout;
pub mod markdown;
pub mod not_found;
