pub mod blog_post;
pub mod portfolio;
pub mod static_repo;
