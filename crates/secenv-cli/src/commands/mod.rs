//! Command implementations for secenv-cli

pub mod config;
pub mod hook;
pub mod render;
pub mod validate;

pub use config::run_config;
pub use hook::run_hook;
pub use render::{run_info, run_segment, run_warning};
pub use validate::run_validate;
