//! Command-line interface definitions.
//!
//! Defines all CLI arguments and subcommands using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// docdex content index CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Site root directory path
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Source root that `~` in folder ids resolves to (relative to site root)
    #[arg(short, long)]
    pub source: Option<PathBuf>,

    /// Config file name (default: docdex.toml)
    #[arg(short = 'C', long, default_value = "docdex.toml")]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List quick start pages in reading order
    Pages,

    /// List concept pages
    Concepts,

    /// Show the previous and next quick start page for an order
    Nav {
        /// `order` of the current page
        #[arg(allow_negative_numbers = true)]
        order: i64,
    },

    /// Show a concept page and the pages it lists as related
    Concept {
        /// concept id
        id: String,
    },

    /// Resolve concept ids to pages, in the given order
    Related {
        /// concept ids
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Write the index as JSON data files
    Export {
        /// Output directory (prints to stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON
        #[arg(long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
        pretty: Option<bool>,
    },
}
