//! Rankfuse - result fusion for multi-source retrieval
//!
//! Rankfuse merges independently ranked result lists produced by
//! heterogeneous retrieval sources (vector search, full-text search,
//! multiple query rewrites) into one combined ranking:
//! - Reciprocal Rank Fusion with the conventional k = 60 default
//! - Deduplication by exact text equality across sources
//! - Weighted score averaging as a magnitude-preserving alternative
//! - Settings loadable from file + environment

pub mod config;
pub mod error;
pub mod fusion;
pub mod types;

pub use error::{Error, Result};
