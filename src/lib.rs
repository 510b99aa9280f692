pub mod cli;
pub mod config;
pub mod generator;
pub mod github;
pub mod summary;
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use generator::{fetch_pinned_projects, launch};
pub use types::project::PinnedProject;
