#![allow(dead_code)]

// tests/common/mod.rs
use game_objects::{build_state, AppError, AppState, DbKind, RuntimeEnv};

// Logging is auto-installed for every test binary that declares `mod common;`
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Fresh, fully migrated in-memory database per call.
pub async fn memory_state() -> Result<AppState, AppError> {
    build_state()
        .with_env(RuntimeEnv::Test)
        .with_db(DbKind::SqliteMemory)
        .build()
        .await
}
