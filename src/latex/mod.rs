pub mod escape;
pub mod walker;

pub use escape::{escape, remove_html_entities, unescape};
pub use walker::walk;
