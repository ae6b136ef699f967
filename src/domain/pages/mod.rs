//! Per-page view state and the page-specific shortcut overrides.

pub mod blog_index;
pub mod home;
pub mod overlay;
pub mod post_detail;

pub use blog_index::BlogIndexPage;
pub use home::HomePage;
pub use overlay::ShortcutsOverlay;
pub use post_detail::PostDetailPage;
