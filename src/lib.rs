//! iplocator - IP geolocation lookup widget
//!
//! The core is a small request-lifecycle state machine (the lookup
//! controller) that turns one address into either a location record or a
//! user-facing failure notification. The TUI and CLI only render what it
//! exposes.
//!
//! # Features
//! - **tui**: Terminal user interface (default)
//! - **cli**: One-shot command-line lookups and config management (default)
//!
//! # Architecture
//! - `controller`: Lookup state machine and its view projection
//! - `services`: Location service client (HTTP)
//! - `notify`: Transient failure notifications
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `config`: Configuration management
//! - `system`: Logging and execution mode routing

pub mod cli;
pub mod config;
pub mod controller;
pub mod errors;
pub mod interfaces;
pub mod notify;
pub mod services;
pub mod system;
