pub mod assets;
pub mod blog_posts;
pub mod json_error;
pub mod pages;
pub mod portfolio;
pub mod shortcuts;
pub mod system;
