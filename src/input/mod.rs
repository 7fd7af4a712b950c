//! Input handling: file text extraction and resume validation

pub mod text_extractor;
pub mod validator;

pub use text_extractor::extract_text;
pub use validator::{clean_text, validate_resume};
