//! Mock messenger for testing
//!
//! Deterministic in-memory `AgentMessenger`: canned reply fragments per
//! agent, an explicit failure set, and optional artificial latency for
//! timeout tests. Records every outbound send so tests can assert on
//! fan-out behavior.

use crate::messenger::{AgentMessenger, MessagePart};
use crate::registry::RemoteAgentCard;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;
use tandem_core::{AgentId, MessagingError, RequestContext, TandemResult};

/// Mock messenger with canned replies.
#[derive(Debug, Default)]
pub struct MockMessenger {
    replies: HashMap<AgentId, Vec<MessagePart>>,
    failures: HashSet<AgentId>,
    delays: HashMap<AgentId, Duration>,
    sent: Mutex<Vec<AgentId>>,
}

impl MockMessenger {
    /// Create a mock with no canned replies. Unknown agents fail.
    pub fn new() -> Self {
        Self::default()
    }

    /// Can a single-fragment profile reply for an agent.
    pub fn with_profile(mut self, agent_id: impl Into<AgentId>, text: impl Into<String>) -> Self {
        self.replies
            .insert(agent_id.into(), vec![MessagePart::text(text)]);
        self
    }

    /// Can a multi-fragment reply for an agent.
    pub fn with_parts(mut self, agent_id: impl Into<AgentId>, parts: Vec<MessagePart>) -> Self {
        self.replies.insert(agent_id.into(), parts);
        self
    }

    /// Make every send to this agent fail.
    pub fn with_failure(mut self, agent_id: impl Into<AgentId>) -> Self {
        self.failures.insert(agent_id.into());
        self
    }

    /// Delay replies from this agent. Combine with a paused tokio clock to
    /// exercise fetch timeouts.
    pub fn with_delay(mut self, agent_id: impl Into<AgentId>, delay: Duration) -> Self {
        self.delays.insert(agent_id.into(), delay);
        self
    }

    /// Agent ids this mock has sent to, in send order.
    pub fn sent_to(&self) -> Vec<AgentId> {
        self.sent.lock().map(|log| log.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl AgentMessenger for MockMessenger {
    async fn send(
        &self,
        card: &RemoteAgentCard,
        _prompt: &str,
        _ctx: &RequestContext,
    ) -> TandemResult<Vec<MessagePart>> {
        if let Ok(mut log) = self.sent.lock() {
            log.push(card.name.clone());
        }

        if let Some(delay) = self.delays.get(&card.name) {
            tokio::time::sleep(*delay).await;
        }

        if self.failures.contains(&card.name) {
            return Err(MessagingError::RequestFailed {
                agent_id: card.name.clone(),
                reason: "Mock failure".to_string(),
            }
            .into());
        }

        match self.replies.get(&card.name) {
            Some(parts) => Ok(parts.clone()),
            None => Err(MessagingError::RequestFailed {
                agent_id: card.name.clone(),
                reason: "No canned reply".to_string(),
            }
            .into()),
        }
    }
}
