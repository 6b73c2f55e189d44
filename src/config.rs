//! Configuration management via environment variables
//!
//! Provides helper functions for reading environment variables and the
//! portal's default values.

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_PORT: u16 = 8360;

/// Default user credentials file
pub const DEFAULT_USERS_FILE: &str = "users.json";

/// Default access log file
pub const DEFAULT_ACCESS_LOG_FILE: &str = "access_log.json";

/// Default session lifetime in seconds (24 hours)
const DEFAULT_SESSION_TTL_SECS: i64 = 86_400;

/// Get an environment variable
///
/// # Returns
/// * `Some(value)` - The environment variable value
/// * `None` - The variable is not set or not valid UTF-8
pub fn get_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Get an environment variable with a default value
pub fn get_env_or(name: &str, default: &str) -> String {
    get_env(name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable, parsing to a specific type
///
/// Returns the default when the variable is unset or fails to parse.
pub fn get_env_parse<T: std::str::FromStr>(name: &str, default: T) -> T {
    get_env(name).and_then(|s| s.parse().ok()).unwrap_or(default)
}

/// Session lifetime from `FILEPORTAL_SESSION_TTL_SECS` (default: 24h)
pub fn session_ttl() -> chrono::Duration {
    let secs = get_env_parse("FILEPORTAL_SESSION_TTL_SECS", DEFAULT_SESSION_TTL_SECS);
    chrono::Duration::seconds(secs.max(1))
}
