//! CLI command implementations for vitalrisk operations.
//!
//! Available commands:
//! - **assess**: Score health metric records and render the results
//! - **explain**: Same as assess, with per-factor contributions
//! - **init**: Initialize a new vitalrisk configuration file

pub mod assess;
pub mod init;

pub use assess::{handle_assess, AssessConfig};
pub use init::init_config;
