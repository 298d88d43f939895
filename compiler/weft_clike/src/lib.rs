//! Token lists for C-style languages.
//!
//! Languages grouped by `{ } [ ] ( )` with `//` and `/* */` comments get two
//! extras on top of [`weft_tokens::TokenList`]:
//!
//! - indent direction: whether a bracket opens or closes an indented block
//! - the original indentation of each comment, captured once at build time so
//!   a formatter can decide later whether to re-indent it

mod c_style;

pub use c_style::{CStyleTokenList, IndentDirection, OriginalComment};
