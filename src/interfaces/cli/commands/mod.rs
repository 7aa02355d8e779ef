mod config;
mod lookup;

pub use config::{config_generate, config_show};
pub use lookup::{lookup, perform_lookup, render_lines};
