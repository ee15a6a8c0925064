//! Evalview Core Library
//!
//! Typed result contract for evaluation jobs, plus the read-side operations
//! consumers run on it: validation, summaries, comparisons and per-example
//! rows.

pub mod compare;
pub mod config;
pub mod error;
pub mod format;
pub mod job;
pub mod logging;
pub mod metric;
pub mod records;
pub mod results;
pub mod samples;
pub mod summary;
pub mod validate;
