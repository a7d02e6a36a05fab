//! Keyword-call rewriting.
//!
//! This module handles:
//! - Matching the `kw("...")` call pattern within a line of text
//! - Synthesizing the replacement identifier from the keyword literal

pub mod ident;
pub mod pattern;

pub use ident::generate;
pub use pattern::KwPattern;
