//! Error types for TANDEM operations

use crate::identity::AgentId;
use thiserror::Error;

/// Messaging layer errors.
///
/// These are per-agent failures. The engine recovers every one of them by
/// substituting the sentinel profile; they never abort a matching batch.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MessagingError {
    #[error("Request to {agent_id} failed: {reason}")]
    RequestFailed { agent_id: AgentId, reason: String },

    #[error("Invalid response from {agent_id}: {reason}")]
    InvalidResponse { agent_id: AgentId, reason: String },

    #[error("Profile request to {agent_id} timed out after {elapsed_ms}ms")]
    Timeout { agent_id: AgentId, elapsed_ms: u64 },
}

/// Matching operation errors.
///
/// Only these abort a matching operation; each maps to a descriptive
/// user-facing message at the engine boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("Unknown requester: {requester}")]
    UnknownRequester {
        requester: AgentId,
        /// Sorted list of registered agent ids, for display
        known: Vec<AgentId>,
    },

    #[error("Empty profile for requester: {requester}")]
    EmptyRequesterProfile { requester: AgentId },

    #[error("No candidates available for matching")]
    NoCandidates,

    #[error("No suitable match found")]
    NoMatch,
}

/// Configuration errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {variable}: {value}")]
    InvalidValue { variable: String, value: String },
}

/// Master error type for all TANDEM errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TandemError {
    #[error("Messaging error: {0}")]
    Messaging(#[from] MessagingError),

    #[error("Match error: {0}")]
    Match(#[from] MatchError),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
}

/// Result type alias for TANDEM operations.
pub type TandemResult<T> = Result<T, TandemError>;

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messaging_error_display_request_failed() {
        let err = MessagingError::RequestFailed {
            agent_id: "nate".to_string(),
            reason: "connection refused".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("nate"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_messaging_error_display_timeout() {
        let err = MessagingError::Timeout {
            agent_id: "karley".to_string(),
            elapsed_ms: 10_000,
        };
        let msg = format!("{}", err);
        assert!(msg.contains("karley"));
        assert!(msg.contains("10000"));
    }

    #[test]
    fn test_match_error_display_unknown_requester() {
        let err = MatchError::UnknownRequester {
            requester: "ghost".to_string(),
            known: vec!["kaitlynn".to_string(), "karley".to_string()],
        };
        let msg = format!("{}", err);
        assert!(msg.contains("Unknown requester"));
        assert!(msg.contains("ghost"));
    }

    #[test]
    fn test_match_error_display_no_candidates() {
        let err = MatchError::NoCandidates;
        let msg = format!("{}", err);
        assert!(msg.contains("No candidates"));
    }

    #[test]
    fn test_tandem_error_from_variants() {
        let messaging = TandemError::from(MessagingError::RequestFailed {
            agent_id: "nate".to_string(),
            reason: "boom".to_string(),
        });
        assert!(matches!(messaging, TandemError::Messaging(_)));

        let matching = TandemError::from(MatchError::NoMatch);
        assert!(matches!(matching, TandemError::Match(_)));

        let config = TandemError::from(ConfigError::InvalidValue {
            variable: "TANDEM_FETCH_TIMEOUT_MS".to_string(),
            value: "soon".to_string(),
        });
        assert!(matches!(config, TandemError::Config(_)));
    }

    #[test]
    fn test_config_error_display_names_the_variable() {
        let err = ConfigError::InvalidValue {
            variable: "TANDEM_MAX_CONCURRENT_FETCHES".to_string(),
            value: "many".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("TANDEM_MAX_CONCURRENT_FETCHES"));
        assert!(msg.contains("many"));
    }
}
