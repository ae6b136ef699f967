pub mod blog_post;
pub mod category;
pub mod contact;
pub mod project;
pub mod skill;
pub mod theme;
