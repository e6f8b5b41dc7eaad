use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Quoted SQL literals, e.g. `'CAT DOG'`.
static QUOTED_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"'(?:[^']|'')*'").unwrap()
});

/// Postgres constraint detail, e.g. `Key (value)=(CAT DOG)`.
static KEY_DETAIL: LazyLock<Regex> = LazyLock::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"Key \(([^)]*)\)=\([^)]*\)").unwrap()
});

/// Mask row values that database errors echo back.
///
/// Phrases are the secret of a round, so raw driver messages must not put
/// them into logs. Column and constraint names are kept for diagnosis.
pub fn redact(input: &str) -> String {
    let keys_masked = KEY_DETAIL.replace_all(input, "Key ($1)=([REDACTED])");
    QUOTED_LITERAL
        .replace_all(&keys_masked, "'[REDACTED]'")
        .into_owned()
}

/// Display wrapper that applies [`redact`] when formatted.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
