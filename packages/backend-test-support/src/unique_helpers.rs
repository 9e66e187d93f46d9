//! Test helpers for generating unique test data
//!
//! ULID-based so names never collide across tests sharing a database.

use ulid::Ulid;

/// Generate a unique string with the given prefix
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_str;
///
/// let a = unique_str("sword");
/// let b = unique_str("sword");
/// assert_ne!(a, b);
/// assert!(a.starts_with("sword-"));
/// ```
pub fn unique_str(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}

/// Unique name that still fits a length limit, keeping the ULID tail.
///
/// # Examples
/// ```
/// use backend_test_support::unique_helpers::unique_name_within;
///
/// let name = unique_name_within("a-rather-long-prefix", 30);
/// assert!(name.chars().count() <= 30);
/// ```
pub fn unique_name_within(prefix: &str, max_chars: usize) -> String {
    let ulid = Ulid::new().to_string();
    let room = max_chars.saturating_sub(ulid.len() + 1);
    let prefix: String = prefix.chars().take(room).collect();
    if prefix.is_empty() {
        ulid.chars().take(max_chars).collect()
    } else {
        format!("{prefix}-{ulid}")
    }
}
