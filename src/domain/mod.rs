pub mod entities;
pub mod pages;
pub mod shortcuts;
pub mod use_cases;
