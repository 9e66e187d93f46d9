//! Repository traits and functions for the domain layer.

pub mod game_objects;
