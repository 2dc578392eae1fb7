//! Matching engine configuration
//!
//! Configuration is loaded from environment variables with sensible defaults
//! for development. All timing knobs bound the profile fan-out; the scoring
//! rubric itself is fixed and not configurable.

use crate::error::ConfigError;
use crate::profile::PROFILE_PROMPT;
use std::str::FromStr;
use std::time::Duration;

/// Configuration for a matching operation.
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// Per-fetch timeout. Expiry is treated like any other fetch failure:
    /// the candidate degrades to the sentinel profile.
    pub fetch_timeout: Duration,

    /// Optional deadline for the whole candidate fan-out. Fetches still
    /// pending at the deadline degrade to the sentinel; completed fetches
    /// keep their text.
    pub overall_deadline: Option<Duration>,

    /// Maximum number of profile fetches in flight at once.
    pub max_concurrent_fetches: usize,

    /// Prompt sent to every agent when requesting its profile.
    pub profile_prompt: String,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            fetch_timeout: Duration::from_secs(10),
            overall_deadline: None,
            max_concurrent_fetches: 8,
            profile_prompt: PROFILE_PROMPT.to_string(),
        }
    }
}

impl MatchConfig {
    /// Create MatchConfig from environment variables.
    ///
    /// Environment variables:
    /// - `TANDEM_FETCH_TIMEOUT_MS`: Per-fetch timeout in milliseconds (default: 10000)
    /// - `TANDEM_OVERALL_DEADLINE_MS`: Fan-out deadline in milliseconds, 0 disables (default: 0)
    /// - `TANDEM_MAX_CONCURRENT_FETCHES`: In-flight fetch cap, clamped to at least 1 (default: 8)
    ///
    /// Unset variables fall back to the defaults.
    ///
    /// # Errors
    /// * `ConfigError::InvalidValue` - a variable is set but does not parse
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let fetch_timeout = parse_env_var::<u64>("TANDEM_FETCH_TIMEOUT_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.fetch_timeout);

        let overall_deadline = match parse_env_var::<u64>("TANDEM_OVERALL_DEADLINE_MS")? {
            Some(0) => None,
            Some(ms) => Some(Duration::from_millis(ms)),
            None => defaults.overall_deadline,
        };

        let max_concurrent_fetches = parse_env_var::<usize>("TANDEM_MAX_CONCURRENT_FETCHES")?
            .unwrap_or(defaults.max_concurrent_fetches)
            .max(1);

        Ok(Self {
            fetch_timeout,
            overall_deadline,
            max_concurrent_fetches,
            profile_prompt: defaults.profile_prompt,
        })
    }

    /// Override the per-fetch timeout.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Set a deadline for the whole candidate fan-out.
    pub fn with_overall_deadline(mut self, deadline: Duration) -> Self {
        self.overall_deadline = Some(deadline);
        self
    }

    /// Override the in-flight fetch cap. Zero is clamped to one.
    pub fn with_max_concurrent_fetches(mut self, max: usize) -> Self {
        self.max_concurrent_fetches = max.max(1);
        self
    }
}

/// Read and parse one environment variable. Unset yields `None`.
fn parse_env_var<T: FromStr>(variable: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(variable) {
        Ok(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                variable: variable.to_string(),
                value,
            }),
        Err(_) => Ok(None),
    }
}
