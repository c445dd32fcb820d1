pub mod accordion;
pub mod markdown;
