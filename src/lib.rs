//! netlist - Akamai Network Lists CLI
//!
//! Reads, searches, edits, synchronizes and activates IP/GEO network lists
//! through the Network Lists v2 API, signing every request with EdgeGrid.

// Note: deny (not forbid) to allow #[allow(unsafe_code)] in test helpers for env var manipulation
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod core;
pub mod edgegrid;
pub mod error;
pub mod render;
pub mod storage;
pub mod util;

pub use error::{ExitCode, NetlistError, Result};
