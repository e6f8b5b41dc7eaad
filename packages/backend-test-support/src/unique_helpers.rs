//! Unique names for test fixtures so parallel tests never collide.

use ulid::Ulid;

/// `{prefix}-{ulid}`
///
/// ```
/// use backend_test_support::unique_helpers::unique_name;
///
/// let a = unique_name("team");
/// let b = unique_name("team");
/// assert_ne!(a, b);
/// assert!(a.starts_with("team-"));
/// ```
pub fn unique_name(prefix: &str) -> String {
    format!("{}-{}", prefix, Ulid::new())
}
