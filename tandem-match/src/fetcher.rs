//! Profile fetcher
//!
//! Asks one remote agent for its profile and normalizes the reply into a
//! single string. Failures never propagate: a messenger error, a timeout, or
//! a reply with no usable text all yield the empty string, so one bad agent
//! cannot abort a matching batch.

use std::sync::Arc;
use std::time::Duration;
use tandem_core::{MatchConfig, MessagingError, RequestContext};
use tandem_messaging::{AgentMessenger, RemoteAgentCard};

/// Fetches profile text from remote agents.
#[derive(Clone)]
pub struct ProfileFetcher {
    messenger: Arc<dyn AgentMessenger>,
    prompt: String,
    timeout: Duration,
}

impl ProfileFetcher {
    /// Create a fetcher using the config's profile prompt and per-fetch
    /// timeout.
    pub fn new(messenger: Arc<dyn AgentMessenger>, config: &MatchConfig) -> Self {
        Self {
            messenger,
            prompt: config.profile_prompt.clone(),
            timeout: config.fetch_timeout,
        }
    }

    /// Fetch the profile of the agent behind `card`.
    ///
    /// Concatenates the text of every reply fragment, separated by single
    /// spaces, and trims surrounding whitespace. Returns the empty string on
    /// any failure.
    pub async fn fetch(&self, card: &RemoteAgentCard, ctx: &RequestContext) -> String {
        let send = self.messenger.send(card, &self.prompt, ctx);
        match tokio::time::timeout(self.timeout, send).await {
            Ok(Ok(parts)) => {
                let mut text = String::new();
                for part in parts {
                    if let Some(fragment) = part.text {
                        text.push_str(&fragment);
                        text.push(' ');
                    }
                }
                text.trim().to_string()
            }
            Ok(Err(error)) => {
                tracing::warn!(agent_id = %card.name, error = %error, "Profile fetch failed");
                String::new()
            }
            Err(_) => {
                let error = MessagingError::Timeout {
                    agent_id: card.name.clone(),
                    elapsed_ms: self.timeout.as_millis() as u64,
                };
                tracing::warn!(agent_id = %card.name, error = %error, "Profile fetch failed");
                String::new()
            }
        }
    }
}

impl std::fmt::Debug for ProfileFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileFetcher")
            .field("prompt", &self.prompt)
            .field("timeout", &self.timeout)
            .finish()
    }
}
