//! Record enrichment: abstract reconstruction, classification, link
//! resolution and normalization into `ResearchPaper`.
//!
//! Everything here is pure; no network I/O and no errors.

pub mod classify;
pub mod links;
pub mod text;

mod normalize;

pub use normalize::{Normalizer, UNTITLED};
