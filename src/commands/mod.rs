//! CLI commands

pub mod blogs;
pub mod check;
pub mod config;
pub mod posts;
