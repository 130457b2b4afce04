use std::{env, fmt::Display, str::FromStr};

use tracing::warn;

/// Server defaults, overridable through the environment. Command-line flags
/// take precedence over both.
pub struct Config {
    pub port: u16,
    pub bind: String,
}

impl Config {
    #[must_use]
    pub fn load() -> Self {
        Self {
            port: load_or("NOSH_PORT", 8080),
            bind: load_or("NOSH_BIND", "127.0.0.1".to_string()),
        }
    }
}

fn load_or<T: FromStr>(key: &str, default: T) -> T
where
    T::Err: Display,
{
    parse_or(env::var(key).ok(), key, default)
}

fn parse_or<T: FromStr>(raw: Option<String>, key: &str, default: T) -> T
where
    T::Err: Display,
{
    match raw {
        Some(raw) => match raw.parse() {
            Ok(value) => value,
            Err(e) => {
                warn!("Invalid {key} value '{raw}': {e}; using default");
                default
            }
        },
        None => default,
    }
}
