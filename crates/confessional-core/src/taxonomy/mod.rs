pub mod vocabulary;

pub use vocabulary::{filter_to_vocabulary, is_valid_theme, MAX_THEMES, VALID_THEMES};
