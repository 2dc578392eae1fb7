//! Matching engine entry point
//!
//! `MatchEngine` ties the aggregator, selector, and formatter together. It
//! is an explicitly constructed value holding a read-only registry view and
//! a messenger; multiple engines (or multiple concurrent calls on one
//! engine) never share mutable state.

use crate::aggregator::CandidateAggregator;
use crate::formatter;
use crate::selector;
use std::sync::Arc;
use tandem_core::{
    MatchConfig, MatchError, MatchOutcome, Profile, RequestContext, TandemResult,
};
use tandem_messaging::{AgentMessenger, AgentRegistry};

/// The teammate matching engine.
pub struct MatchEngine {
    registry: Arc<AgentRegistry>,
    messenger: Arc<dyn AgentMessenger>,
    config: MatchConfig,
}

impl MatchEngine {
    /// Create an engine over a registry and messenger.
    pub fn new(
        registry: Arc<AgentRegistry>,
        messenger: Arc<dyn AgentMessenger>,
        config: MatchConfig,
    ) -> Self {
        Self {
            registry,
            messenger,
            config,
        }
    }

    /// Find the best teammate for `requester_id` and render the result.
    ///
    /// Always returns a user-facing message: every error in the taxonomy
    /// maps to a descriptive string, never to a fault. Callers that need
    /// typed errors should use [`MatchEngine::run_match`].
    pub async fn find_best_teammate(&self, requester_id: &str) -> String {
        let ctx = RequestContext::new();
        tracing::info!(requester = %requester_id, request_id = %ctx.request_id, "Finding best teammate");

        match self.run(requester_id, &ctx).await {
            Ok((outcome, requester_profile, candidates)) => {
                if let Some(best) = &outcome.best {
                    tracing::info!(
                        requester = %requester_id,
                        best = %best.agent_id,
                        score = best.score,
                        "Selected best teammate"
                    );
                }
                formatter::format_outcome(&outcome, &requester_profile, &candidates)
            }
            Err(error) => {
                tracing::warn!(requester = %requester_id, error = %error, "Matching aborted");
                user_message(&error)
            }
        }
    }

    /// Structured variant of [`MatchEngine::find_best_teammate`] for callers
    /// that need the outcome rather than display text.
    pub async fn run_match(&self, requester_id: &str) -> TandemResult<MatchOutcome> {
        let ctx = RequestContext::new();
        let (outcome, _, _) = self.run(requester_id, &ctx).await?;
        Ok(outcome)
    }

    async fn run(
        &self,
        requester_id: &str,
        ctx: &RequestContext,
    ) -> Result<(MatchOutcome, Profile, Vec<Profile>), MatchError> {
        let aggregator = CandidateAggregator::new(
            Arc::clone(&self.registry),
            Arc::clone(&self.messenger),
            &self.config,
        );
        let (requester_profile, candidates) = aggregator.aggregate(requester_id, ctx).await?;
        let outcome = selector::select(&requester_profile, &candidates)?;
        Ok((outcome, requester_profile, candidates))
    }
}

impl std::fmt::Debug for MatchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchEngine")
            .field("registry", &self.registry)
            .field("config", &self.config)
            .finish()
    }
}

/// Map an aborting error to its user-facing message.
fn user_message(error: &MatchError) -> String {
    match error {
        MatchError::UnknownRequester { requester, known } => format!(
            "Sorry, I couldn't find an agent named '{}'. Available agents: {}",
            requester,
            known.join(", ")
        ),
        MatchError::EmptyRequesterProfile { requester } => {
            format!("Unable to get profile information for {}", requester)
        }
        MatchError::NoCandidates => "No other agents available for matching.".to_string(),
        MatchError::NoMatch => "Unable to find a suitable teammate match.".to_string(),
    }
}
