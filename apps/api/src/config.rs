use std::num::NonZeroUsize;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::extraction::posting::PostingDefaults;
use crate::tailoring::keywords::DEFAULT_KEYWORD_LIMIT;

const DEFAULT_PORT: u16 = 8001;
const DEFAULT_MAX_DESCRIPTION_CHARS: usize = 12_000;

/// Application configuration loaded from environment variables.
/// Every variable is optional; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Number of role keywords kept per job description.
    pub keyword_limit: NonZeroUsize,
    /// Page text beyond this many characters is not analysed.
    pub max_description_chars: usize,
    pub posting_defaults: PostingDefaults,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let fallback = PostingDefaults::default();
        let keyword_limit: usize = parse_env("KEYWORD_LIMIT", DEFAULT_KEYWORD_LIMIT)?;

        Ok(Config {
            port: parse_env("PORT", DEFAULT_PORT)?,
            rust_log: env_or("RUST_LOG", "info"),
            keyword_limit: NonZeroUsize::new(keyword_limit)
                .context("KEYWORD_LIMIT must be greater than zero")?,
            max_description_chars: parse_env(
                "MAX_DESCRIPTION_CHARS",
                DEFAULT_MAX_DESCRIPTION_CHARS,
            )?,
            posting_defaults: PostingDefaults {
                industry: env_or("POSTING_INDUSTRY", &fallback.industry),
                role: env_or("POSTING_ROLE", &fallback.role),
                status: env_or("POSTING_STATUS", &fallback.status),
                location: env_or("POSTING_LOCATION", &fallback.location),
            },
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            rust_log: "info".to_string(),
            keyword_limit: NonZeroUsize::new(DEFAULT_KEYWORD_LIMIT).unwrap_or(NonZeroUsize::MIN),
            max_description_chars: DEFAULT_MAX_DESCRIPTION_CHARS,
            posting_defaults: PostingDefaults::default(),
        }
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => parse_value(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_value<T>(key: &str, raw: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    raw.trim()
        .parse::<T>()
        .with_context(|| format!("{key} must be a valid {}", std::any::type_name::<T>()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_value_trims_and_parses() {
        let port: u16 = parse_value("PORT", " 9000 ").unwrap();
        assert_eq!(port, 9000);
    }

    #[test]
    fn test_parse_value_error_names_variable() {
        let err = parse_value::<u16>("PORT", "eighty").unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_default_config_matches_documented_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8001);
        assert_eq!(config.keyword_limit.get(), 20);
        assert_eq!(config.max_description_chars, 12_000);
        assert_eq!(config.posting_defaults.status, "Waiting");
    }
}
