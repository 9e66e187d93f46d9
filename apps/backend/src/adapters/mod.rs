//! Adapters for external dependencies.

pub mod game_objects_sea;
