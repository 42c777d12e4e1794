//! CLI module for statmon.
//!
//! Two flags configure the poller: `--url` and `--interval`. `--version` and
//! `--help` are provided by clap.
//!
//! ```ignore
//! use clap::Parser;
//! use statmon::cli::Cli;
//!
//! let cli = Cli::parse();
//! let config = cli.poller_config();
//! ```

pub mod args;

pub use args::{parse_interval, Cli};
