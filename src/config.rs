use anyhow::{bail, Context, Result};
use std::fmt;
use std::time::Duration;

pub const DEFAULT_API_HOST: &str = "google-translate113.p.rapidapi.com";
pub const API_PATH: &str = "/api/v1/translator/text";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Clone)]
pub struct Config {
    // Provider credentials
    pub api_key: String,
    pub api_host: String,

    // Endpoint
    pub api_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("TRANSLATE_API_KEY").context("TRANSLATE_API_KEY not set")?;
        if api_key.trim().is_empty() {
            bail!("TRANSLATE_API_KEY is empty");
        }

        let api_host = std::env::var("TRANSLATE_API_HOST")
            .unwrap_or_else(|_| DEFAULT_API_HOST.to_string());

        let api_url = std::env::var("TRANSLATE_API_URL")
            .unwrap_or_else(|_| format!("https://{}{}", api_host, API_PATH));

        let timeout_secs = match std::env::var("TRANSLATE_TIMEOUT_SECS") {
            Ok(v) => v
                .parse::<u64>()
                .with_context(|| format!("TRANSLATE_TIMEOUT_SECS is not a number: '{}'", v))?,
            Err(_) => DEFAULT_TIMEOUT_SECS,
        };
        if timeout_secs == 0 {
            bail!("TRANSLATE_TIMEOUT_SECS must be at least 1");
        }

        Ok(Self {
            api_key,
            api_host,
            api_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

// Keep the key out of logs and panic messages
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("api_host", &self.api_host)
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 4] = [
        "TRANSLATE_API_KEY",
        "TRANSLATE_API_HOST",
        "TRANSLATE_API_URL",
        "TRANSLATE_TIMEOUT_SECS",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        std::env::set_var("TRANSLATE_API_KEY", "test-key");

        let config = Config::from_env().expect("Should load");

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.api_host, DEFAULT_API_HOST);
        assert_eq!(
            config.api_url,
            "https://google-translate113.p.rapidapi.com/api/v1/translator/text"
        );
        assert_eq!(config.timeout, Duration::from_secs(30));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_missing_key() {
        clear_env();

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("TRANSLATE_API_KEY not set"));
    }

    #[test]
    #[serial]
    fn test_from_env_blank_key() {
        clear_env();
        std::env::set_var("TRANSLATE_API_KEY", "   ");

        assert!(Config::from_env().is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_custom_host_builds_url() {
        clear_env();
        std::env::set_var("TRANSLATE_API_KEY", "test-key");
        std::env::set_var("TRANSLATE_API_HOST", "translate.example.com");

        let config = Config::from_env().expect("Should load");
        assert_eq!(
            config.api_url,
            "https://translate.example.com/api/v1/translator/text"
        );
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_url_override() {
        clear_env();
        std::env::set_var("TRANSLATE_API_KEY", "test-key");
        std::env::set_var("TRANSLATE_API_URL", "http://127.0.0.1:9000/translate");
        std::env::set_var("TRANSLATE_TIMEOUT_SECS", "5");

        let config = Config::from_env().expect("Should load");
        assert_eq!(config.api_url, "http://127.0.0.1:9000/translate");
        assert_eq!(config.api_host, DEFAULT_API_HOST);
        assert_eq!(config.timeout, Duration::from_secs(5));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_bad_timeout() {
        clear_env();
        std::env::set_var("TRANSLATE_API_KEY", "test-key");
        std::env::set_var("TRANSLATE_TIMEOUT_SECS", "soon");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("TRANSLATE_TIMEOUT_SECS"));
        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_zero_timeout() {
        clear_env();
        std::env::set_var("TRANSLATE_API_KEY", "test-key");
        std::env::set_var("TRANSLATE_TIMEOUT_SECS", "0");

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("at least 1"));
        clear_env();
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config {
            api_key: "super-secret".to_string(),
            api_host: DEFAULT_API_HOST.to_string(),
            api_url: "https://example.com".to_string(),
            timeout: Duration::from_secs(1),
        };

        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
