//! Messaging capability trait
//!
//! The engine's only view of the outside world: send a prompt to a named
//! agent, get back content fragments. Implementations must be thread-safe
//! (Send + Sync) so one messenger can serve a concurrent fan-out.

use crate::registry::RemoteAgentCard;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tandem_core::{RequestContext, TandemResult};

/// One content fragment returned by a remote agent.
///
/// A fragment without text contributes nothing to the fetched profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessagePart {
    /// Text payload, if this fragment carries any
    pub text: Option<String>,
}

impl MessagePart {
    /// Create a text fragment.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
        }
    }

    /// Create a fragment with no usable text.
    pub fn empty() -> Self {
        Self { text: None }
    }
}

/// Trait for sending a message to a remote agent and collecting its reply.
///
/// # Example
/// ```ignore
/// struct StdioMessenger { /* ... */ }
///
/// #[async_trait]
/// impl AgentMessenger for StdioMessenger {
///     async fn send(
///         &self,
///         card: &RemoteAgentCard,
///         prompt: &str,
///         ctx: &RequestContext,
///     ) -> TandemResult<Vec<MessagePart>> {
///         // Deliver the prompt, collect reply fragments
///     }
/// }
/// ```
#[async_trait]
pub trait AgentMessenger: Send + Sync {
    /// Send a prompt to the agent behind `card` and return its reply
    /// fragments.
    ///
    /// # Arguments
    /// * `card` - Connection data for the target agent
    /// * `prompt` - Message text to deliver
    /// * `ctx` - Matching-operation context, for attribution
    ///
    /// # Returns
    /// * `Ok(Vec<MessagePart>)` - Reply fragments, possibly empty
    /// * `Err(TandemError::Messaging)` - If delivery or the reply failed
    async fn send(
        &self,
        card: &RemoteAgentCard,
        prompt: &str,
        ctx: &RequestContext,
    ) -> TandemResult<Vec<MessagePart>>;
}
