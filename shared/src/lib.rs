pub mod accordion;
pub mod content;

pub use accordion::*;
pub use content::*;
