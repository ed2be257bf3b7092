//! Application layer - Use cases and orchestration

pub mod init;
pub mod manage_config;
pub mod repo_manager;

pub use manage_config::ConfigService;
pub use repo_manager::{ConfirmationChoice, DeleteResult, RepoManager};
