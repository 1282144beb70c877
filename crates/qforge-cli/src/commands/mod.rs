//! CLI command implementations.

pub mod exercise;
pub mod list;
