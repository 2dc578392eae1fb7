//! Compatibility scoring and match outcome types

use crate::identity::AgentId;
use serde::{Deserialize, Serialize};

/// Result of scoring one requester/candidate profile pair.
///
/// Reasons are appended in the fixed rubric evaluation order. Every computed
/// report carries at least one reason and a score of at least 5.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityReport {
    /// Additive compatibility score, always >= 0
    pub score: f64,
    /// Human-readable reasons, one per matched rubric category
    pub reasons: Vec<String>,
}

/// A candidate together with its computed compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCandidate {
    /// Candidate agent
    pub agent_id: AgentId,
    /// Compatibility score against the requester
    pub score: f64,
    /// Reasons behind the score, in rubric order
    pub reasons: Vec<String>,
}

impl ScoredCandidate {
    /// Build a scored candidate from an agent id and its report.
    pub fn new(agent_id: impl Into<AgentId>, report: CompatibilityReport) -> Self {
        Self {
            agent_id: agent_id.into(),
            score: report.score,
            reasons: report.reasons,
        }
    }
}

/// Outcome of a full matching operation.
///
/// `best` is the first-seen strict-maximum candidate under the registry's
/// insertion-order iteration; `alternates` holds at most two further
/// candidates, descending by score, ties preserving encounter order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// Agent the match was requested for
    pub requester: AgentId,
    /// Best-scoring candidate, if any candidates were evaluated
    pub best: Option<ScoredCandidate>,
    /// Ranked shortlist of non-best candidates (at most 2)
    pub alternates: Vec<ScoredCandidate>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scored_candidate_from_report() {
        let report = CompatibilityReport {
            score: 30.0,
            reasons: vec!["Frontend + Backend skill complementarity".to_string()],
        };
        let candidate = ScoredCandidate::new("nate", report);
        assert_eq!(candidate.agent_id, "nate");
        assert_eq!(candidate.score, 30.0);
        assert_eq!(candidate.reasons.len(), 1);
    }
}
