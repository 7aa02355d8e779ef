//! System-level modules
//!
//! This module contains system-level functionality:
//! - Logging setup
//! - Execution mode routing (cli, tui)

pub mod logging;
pub mod modes;
