//! CLI library components for the growth time series toolkit.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod summary;
