//! User interfaces
//!
//! Both interfaces only render what the lookup controller exposes.

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "tui")]
pub mod tui;

use crate::controller::PLACEHOLDER;

/// Text shown for a view field; empty strings mean "unknown"
pub fn display_value(value: &str) -> &str {
    if value.is_empty() { PLACEHOLDER } else { value }
}
