//! Backend test support utilities
//!
//! Shared by the backend's unit and integration tests: one-time logging
//! initialization and generators for unique test data.

pub mod logging;
pub mod unique_helpers;
