//! Precision-aware date labels.
//!
//! - [`core`]: value types and their comparison rules
//! - [`parse`]: the accepted string grammars

pub mod core;
pub mod parse;

#[cfg(test)]
mod tests;
