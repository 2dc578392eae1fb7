//! Per-request context threaded through profile fetches

use crate::identity::new_request_id;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Context for a single matching operation.
///
/// Every outbound profile request carries the same context, so the hosting
/// system can attribute a burst of agent messages to one matching run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    /// Unique id for this matching operation (UUIDv7, timestamp-sortable)
    pub request_id: Uuid,
    /// Optional hosting-system session this operation belongs to
    pub session_id: Option<String>,
}

impl RequestContext {
    /// Create a fresh context with a new request id.
    pub fn new() -> Self {
        Self {
            request_id: new_request_id(),
            session_id: None,
        }
    }

    /// Attach a hosting-system session id.
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }
}

impl Default for RequestContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_context_ids_are_unique() {
        let a = RequestContext::new();
        let b = RequestContext::new();
        assert_ne!(a.request_id, b.request_id);
    }

    #[test]
    fn test_request_context_session_id() {
        let ctx = RequestContext::new().with_session_id("session-1");
        assert_eq!(ctx.session_id.as_deref(), Some("session-1"));
    }
}
