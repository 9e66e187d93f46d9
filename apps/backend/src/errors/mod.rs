//! Error handling for the game object backend.

pub mod domain;

pub use domain::DomainError;
