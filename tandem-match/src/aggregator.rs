//! Candidate aggregator
//!
//! Collects the requester's profile and every candidate's profile for one
//! matching operation. Candidate fetches fan out concurrently under a
//! semaphore, and each result lands in a slot indexed by registry position,
//! so the returned order is always registration order no matter when each
//! fetch completes. A failed or empty candidate fetch degrades to the
//! sentinel profile instead of dropping the candidate.

use crate::fetcher::ProfileFetcher;
use std::sync::Arc;
use std::time::Duration;
use tandem_core::{MatchConfig, MatchError, Profile, RequestContext};
use tandem_messaging::{AgentMessenger, AgentRegistry, RemoteAgentCard};
use tokio::sync::{mpsc, Semaphore};

/// Aggregates requester and candidate profiles for one matching operation.
#[derive(Debug)]
pub struct CandidateAggregator {
    registry: Arc<AgentRegistry>,
    fetcher: ProfileFetcher,
    max_concurrent: usize,
    overall_deadline: Option<Duration>,
}

impl CandidateAggregator {
    /// Create an aggregator over a registry and messenger.
    pub fn new(
        registry: Arc<AgentRegistry>,
        messenger: Arc<dyn AgentMessenger>,
        config: &MatchConfig,
    ) -> Self {
        Self {
            registry,
            fetcher: ProfileFetcher::new(messenger, config),
            max_concurrent: config.max_concurrent_fetches.max(1),
            overall_deadline: config.overall_deadline,
        }
    }

    /// Fetch the requester's profile plus every other registered agent's
    /// profile, in registration order.
    ///
    /// # Errors
    /// * `MatchError::UnknownRequester` - requester not in the registry
    /// * `MatchError::EmptyRequesterProfile` - requester returned no text
    /// * `MatchError::NoCandidates` - nobody else is registered
    pub async fn aggregate(
        &self,
        requester_id: &str,
        ctx: &RequestContext,
    ) -> Result<(Profile, Vec<Profile>), MatchError> {
        let requester_card =
            self.registry
                .get(requester_id)
                .ok_or_else(|| MatchError::UnknownRequester {
                    requester: requester_id.to_string(),
                    known: self.registry.sorted_agent_ids(),
                })?;

        let requester_text = self.fetcher.fetch(requester_card, ctx).await;
        if requester_text.is_empty() {
            return Err(MatchError::EmptyRequesterProfile {
                requester: requester_id.to_string(),
            });
        }
        let requester_profile = Profile::new(requester_id, requester_text);

        let cards: Vec<RemoteAgentCard> = self
            .registry
            .candidates_for(requester_id)
            .into_iter()
            .cloned()
            .collect();
        if cards.is_empty() {
            return Err(MatchError::NoCandidates);
        }

        let texts = self.fan_out(&cards, ctx).await;
        let candidates = cards
            .into_iter()
            .zip(texts)
            .map(|(card, slot)| match slot {
                Some(text) if !text.is_empty() => Profile::new(card.name, text),
                _ => Profile::unavailable(card.name),
            })
            .collect();

        Ok((requester_profile, candidates))
    }

    /// Fetch all candidate profiles concurrently. The returned vector is
    /// indexed like `cards`; a `None` slot means the fetch had not completed
    /// when the overall deadline expired.
    async fn fan_out(&self, cards: &[RemoteAgentCard], ctx: &RequestContext) -> Vec<Option<String>> {
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent));
        let (tx, mut rx) = mpsc::channel::<(usize, String)>(cards.len());

        for (index, card) in cards.iter().cloned().enumerate() {
            let fetcher = self.fetcher.clone();
            let ctx = ctx.clone();
            let semaphore = Arc::clone(&semaphore);
            let tx = tx.clone();
            tokio::spawn(async move {
                let Ok(_permit) = semaphore.acquire_owned().await else {
                    return;
                };
                let text = fetcher.fetch(&card, &ctx).await;
                let _ = tx.send((index, text)).await;
            });
        }
        drop(tx);

        let mut slots: Vec<Option<String>> = vec![None; cards.len()];
        let gather = async {
            while let Some((index, text)) = rx.recv().await {
                slots[index] = Some(text);
            }
        };
        match self.overall_deadline {
            Some(deadline) => {
                if tokio::time::timeout(deadline, gather).await.is_err() {
                    tracing::warn!(
                        deadline_ms = deadline.as_millis() as u64,
                        "Candidate fan-out hit overall deadline, keeping partial results"
                    );
                }
            }
            None => gather.await,
        }

        slots
    }
}
