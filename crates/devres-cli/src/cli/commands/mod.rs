//! CLI command handlers. Each command is in its own file.

mod base_url;
mod completions;
mod config;
mod fetch;

pub use base_url::run_base_url;
pub use completions::run_completions;
pub use config::run_config;
pub use fetch::{run_fetch, FetchArgs};
