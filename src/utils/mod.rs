//! Utility modules shared by the content index and the CLI.

pub mod log;
