//! Agent profile types

use crate::identity::AgentId;
use serde::{Deserialize, Serialize};

/// Fixed prompt sent to every agent when retrieving its profile.
pub const PROFILE_PROMPT: &str =
    "Tell me about all your skills, interests, and communication style";

/// Sentinel text substituted when a candidate's profile cannot be fetched.
/// Sentinel-bearing candidates stay eligible for scoring.
pub const PROFILE_UNAVAILABLE: &str = "Profile unavailable";

/// Free-text self-description of an agent, fetched per matching request.
/// Never cached or persisted; discarded when the request completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Agent this profile belongs to
    pub agent_id: AgentId,
    /// Free-form profile text; empty means "no usable signal"
    pub text: String,
}

impl Profile {
    /// Create a profile from fetched text.
    pub fn new(agent_id: impl Into<AgentId>, text: impl Into<String>) -> Self {
        Self {
            agent_id: agent_id.into(),
            text: text.into(),
        }
    }

    /// Create a sentinel profile for a candidate whose fetch failed.
    pub fn unavailable(agent_id: impl Into<AgentId>) -> Self {
        Self::new(agent_id, PROFILE_UNAVAILABLE)
    }

    /// Whether the fetched text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
