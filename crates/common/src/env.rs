//! Environment variable helpers
//!
//! Used where configuration falls back to plain env vars (no config file).

use std::str::FromStr;

use tracing::warn;

/// Read `name`, falling back to `default` when unset.
pub fn var_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Parse `name` into `T`; unset or unparsable values yield `None`.
pub fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.trim().parse::<T>() {
        Ok(v) => Some(v),
        Err(_) => {
            warn!(%name, value = %raw, "ignoring unparsable environment variable");
            None
        }
    }
}

/// Boolean flag: `1`, `true`, `yes`, `on` (any case) are true.
pub fn flag(name: &str) -> bool {
    std::env::var(name)
        .map(|v| is_truthy(&v))
        .unwrap_or(false)
}

fn is_truthy(v: &str) -> bool {
    matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
