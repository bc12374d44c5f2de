//! Filter terms
//!
//! - `Term`: a complete column/operator/value pill
//! - `PartialTerm`: the single in-progress term
//! - `Field`: which part of the partial term accepts input, derived from it
//! - `TermList`: committed terms in order

pub mod list;
pub mod types;

pub use list::TermList;
pub use types::{Field, PartialTerm, Term};
