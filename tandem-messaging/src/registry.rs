//! Agent registry
//!
//! Insertion-ordered mapping from agent id to connection data. The hosting
//! system populates the registry at startup; the engine holds a read-only
//! view and iterates it in registration order. That order is the tie-break
//! order for match selection, so it must be stable.

use chrono::Utc;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tandem_core::{AgentId, Timestamp};

/// Connection data for one registered remote agent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoteAgentCard {
    /// Unique name the agent registered under
    pub name: AgentId,
    /// Endpoint the agent receives messages at
    pub endpoint: String,
    /// When the hosting system registered the agent
    pub registered_at: Timestamp,
}

impl RemoteAgentCard {
    /// Create a card stamped with the current time.
    pub fn new(name: impl Into<AgentId>, endpoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: endpoint.into(),
            registered_at: Utc::now(),
        }
    }
}

/// Read-only view of the agents known to the hosting system.
///
/// Backed by an insertion-ordered map: `iter()` and `agent_ids()` yield
/// agents in registration order, and re-registering a name keeps its
/// original position.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentRegistry {
    agents: IndexMap<AgentId, RemoteAgentCard>,
}

impl AgentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an agent. Replaces the card if the name is already present,
    /// keeping the original insertion position.
    pub fn register(&mut self, card: RemoteAgentCard) {
        self.agents.insert(card.name.clone(), card);
    }

    /// Look up an agent's card by name.
    pub fn get(&self, name: &str) -> Option<&RemoteAgentCard> {
        self.agents.get(name)
    }

    /// Whether an agent with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.agents.contains_key(name)
    }

    /// Iterate cards in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &RemoteAgentCard> {
        self.agents.values()
    }

    /// Agent ids in registration order.
    pub fn agent_ids(&self) -> Vec<AgentId> {
        self.agents.keys().cloned().collect()
    }

    /// Agent ids sorted lexicographically, for display in error messages.
    pub fn sorted_agent_ids(&self) -> Vec<AgentId> {
        let mut ids = self.agent_ids();
        ids.sort();
        ids
    }

    /// Cards of every agent except the named one, in registration order.
    pub fn candidates_for(&self, requester: &str) -> Vec<&RemoteAgentCard> {
        self.agents
            .values()
            .filter(|card| card.name != requester)
            .collect()
    }

    /// Number of registered agents.
    pub fn len(&self) -> usize {
        self.agents.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}

impl FromIterator<RemoteAgentCard> for AgentRegistry {
    fn from_iter<I: IntoIterator<Item = RemoteAgentCard>>(iter: I) -> Self {
        let mut registry = Self::new();
        for card in iter {
            registry.register(card);
        }
        registry
    }
}
