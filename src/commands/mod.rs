//! CLI commands for evalview

pub mod compare;
pub mod dispatch;
pub mod helpers;
pub mod merge;
pub mod metrics;
pub mod samples;
pub mod show;
pub mod validate;
