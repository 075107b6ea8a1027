//! Receipts
//!
//! - `words`: Turkish spelling of amounts
//! - `document`: plain-text receipt built from a cash transaction or a paid installment

pub mod document;
pub mod words;

pub use document::Receipt;
pub use words::to_words;
