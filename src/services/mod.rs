pub mod classifier;
pub mod problem_text;

pub use classifier::{classify, classify_finale};
pub use problem_text::{extract_description, rewrite_doc_block};
