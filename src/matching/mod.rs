//! Keyword extraction and overlap scoring.
//!
//! The matching pipeline is deliberately coarse: free text is reduced to a
//! bounded keyword sequence at item creation, and candidates are ranked by
//! exact-token overlap. Both functions here are pure; the ranking that uses
//! them lives in `services::matcher`.

mod keywords;
mod score;

pub use keywords::{extract, MAX_KEYWORDS};
pub use score::score;
