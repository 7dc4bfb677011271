use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::fetch::http::DEFAULT_TIMEOUT;

/// Pages analysed when nothing is configured.
pub const DEFAULT_URLS: &[&str] = &[
    "https://en.wikipedia.org/wiki/Russo-Ukrainian_War",
    "https://en.wikipedia.org/wiki/Russo-Japanese_War",
];

/// Word whose TF / IDF is reported when nothing is configured.
pub const DEFAULT_TARGET_WORD: &str = "ukrainian";

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy. Command-line flags are
/// applied on top with the `with_*` methods.
#[derive(Debug, Clone)]
pub struct Config {
    /// Sources to fetch, in order. The first two are compared.
    pub urls: Vec<String>,
    /// Word to compute TF / IDF for (always lowercase).
    pub target_word: String,
    /// Per-request HTTP timeout.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            urls: DEFAULT_URLS.iter().map(|u| u.to_string()).collect(),
            target_word: DEFAULT_TARGET_WORD.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: default_user_agent(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every variable is optional; unset ones fall back to the defaults.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. `load` passes the process
    /// environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let urls = match lookup("PAGESTATS_URLS") {
            Some(raw) => parse_url_list(&raw),
            None => defaults.urls,
        };

        let target_word = lookup("PAGESTATS_TARGET_WORD")
            .map(|w| w.trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .unwrap_or(defaults.target_word);

        let timeout = match lookup("PAGESTATS_TIMEOUT_SECS") {
            Some(raw) => parse_timeout(&raw)?,
            None => defaults.timeout,
        };

        let user_agent = lookup("PAGESTATS_USER_AGENT")
            .filter(|ua| !ua.trim().is_empty())
            .unwrap_or(defaults.user_agent);

        Ok(Self {
            urls,
            target_word,
            timeout,
            user_agent,
        })
    }

    /// Replace the configured sources when any were given on the command line.
    pub fn with_urls(mut self, urls: Vec<String>) -> Self {
        if !urls.is_empty() {
            self.urls = urls;
        }
        self
    }

    pub fn with_target_word(mut self, word: Option<String>) -> Self {
        if let Some(word) = word {
            self.target_word = word.trim().to_lowercase();
        }
        self
    }

    /// Override the timeout. Zero is rejected, the same as for
    /// PAGESTATS_TIMEOUT_SECS.
    pub fn with_timeout_secs(mut self, secs: Option<u64>) -> Result<Self> {
        if let Some(secs) = secs {
            if secs == 0 {
                anyhow::bail!("--timeout must be greater than zero");
            }
            self.timeout = Duration::from_secs(secs);
        }
        Ok(self)
    }

    /// Check that there is something to compare.
    /// Call this before running the TF / IDF / similarity analysis.
    pub fn require_comparison(&self) -> Result<()> {
        if self.urls.len() < 2 {
            anyhow::bail!(
                "At least two sources are needed to compare documents (got {}).\n\
                 Pass --url twice or set PAGESTATS_URLS to a comma-separated list.",
                self.urls.len()
            );
        }
        if self.target_word.is_empty() {
            anyhow::bail!("Target word is empty. Pass --word or set PAGESTATS_TARGET_WORD.");
        }
        Ok(())
    }
}

fn default_user_agent() -> String {
    format!("pagestats/{}", env!("CARGO_PKG_VERSION"))
}

fn parse_url_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .map(String::from)
        .collect()
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    let secs: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("PAGESTATS_TIMEOUT_SECS must be a whole number, got {raw:?}"))?;
    if secs == 0 {
        anyhow::bail!("PAGESTATS_TIMEOUT_SECS must be greater than zero");
    }
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.urls.len(), 2);
        assert_eq!(config.target_word, "ukrainian");
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert!(config.user_agent.starts_with("pagestats/"));
    }

    #[test]
    fn test_env_values() {
        let config = Config::from_lookup(lookup(&[
            ("PAGESTATS_URLS", " https://a.example , ,https://b.example,"),
            ("PAGESTATS_TARGET_WORD", " War "),
            ("PAGESTATS_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.urls, vec!["https://a.example", "https://b.example"]);
        assert_eq!(config.target_word, "war");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_bad_timeout() {
        assert!(Config::from_lookup(lookup(&[("PAGESTATS_TIMEOUT_SECS", "soon")])).is_err());
        assert!(Config::from_lookup(lookup(&[("PAGESTATS_TIMEOUT_SECS", "0")])).is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let config = Config::default()
            .with_urls(vec!["https://only.example".to_string()])
            .with_target_word(Some("Peace".to_string()))
            .with_timeout_secs(Some(3))
            .unwrap();
        assert_eq!(config.urls, vec!["https://only.example"]);
        assert_eq!(config.target_word, "peace");
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert!(config.require_comparison().is_err());
    }

    #[test]
    fn test_zero_cli_timeout_is_rejected() {
        assert!(Config::default().with_timeout_secs(Some(0)).is_err());
        let unchanged = Config::default().with_timeout_secs(None).unwrap();
        assert_eq!(unchanged.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_empty_cli_urls_keep_config() {
        let config = Config::default().with_urls(Vec::new());
        assert_eq!(config.urls.len(), 2);
        assert!(config.require_comparison().is_ok());
    }
}
