//! statmon - polls a host's statistics endpoint and prints warnings when
//! load, memory, disk, or network usage crosses a threshold.
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod cli;
pub mod error;
pub mod logging;
pub mod poller;
pub mod report;
pub mod traits;
