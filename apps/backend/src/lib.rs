#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod entities;
pub mod error;
pub mod errors;
pub mod infra;
pub mod repos;
pub mod services;
pub mod state;

// Re-exports for public API
pub use config::db::{db_url, DbKind, DbOwner, RuntimeEnv};
pub use entities::game_objects::GameObjectType;
pub use error::AppError;
pub use errors::domain::DomainError;
pub use infra::db::{bootstrap_db, connect_db};
pub use infra::state::build_state;
pub use repos::game_objects::{GameObject, GameObjectRepo, GameObjectRepoSea};
pub use services::game_objects::{
    CreateGameObjectInput, GameObjectService, UpdateGameObjectInput,
};
pub use state::app_state::AppState;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
