use anyhow::{Context, Result};

use crate::render::card_stack::SwipeThreshold;

/// Service configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Viewport width at which the inline nav replaces the hamburger menu.
    pub nav_breakpoint_px: u32,
    pub swipe: SwipeThreshold,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: 8080,
            rust_log: "info".to_string(),
            nav_breakpoint_px: 768,
            swipe: SwipeThreshold::default(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            port: parse_env("PORT", defaults.port)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
            nav_breakpoint_px: parse_env("NAV_BREAKPOINT_PX", defaults.nav_breakpoint_px)?,
            swipe: SwipeThreshold {
                distance_px: parse_env("SWIPE_DISTANCE_PX", defaults.swipe.distance_px)?,
                velocity: parse_env("SWIPE_VELOCITY", defaults.swipe.velocity)?,
            },
        })
    }
}

fn parse_env<T>(key: &str, default: T) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("{key} must be a valid number, got '{raw}'")),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.nav_breakpoint_px, 768);
        assert_eq!(config.swipe, SwipeThreshold::default());
    }

    #[test]
    fn test_parse_env_missing_uses_default() {
        let value: u32 = parse_env("PORTFOLIO_TEST_UNSET_VARIABLE", 42).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_parse_env_rejects_garbage() {
        std::env::set_var("PORTFOLIO_TEST_BAD_NUMBER", "wide");
        let result: Result<u32> = parse_env("PORTFOLIO_TEST_BAD_NUMBER", 768);
        assert!(result.is_err());
        std::env::remove_var("PORTFOLIO_TEST_BAD_NUMBER");
    }

    #[test]
    fn test_parse_env_reads_float() {
        std::env::set_var("PORTFOLIO_TEST_VELOCITY", " 0.75 ");
        let value: f32 = parse_env("PORTFOLIO_TEST_VELOCITY", 0.5).unwrap();
        assert_eq!(value, 0.75);
        std::env::remove_var("PORTFOLIO_TEST_VELOCITY");
    }
}
