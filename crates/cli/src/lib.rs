//! CLI layer for the `zipf` binary: argument parsing, command dispatch,
//! chart rendering, and the top-two ratio report.

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod args;
pub mod chart;
pub mod report;
