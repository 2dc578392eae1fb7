//! TANDEM Match - Teammate Matching Engine
//!
//! Fetches every known agent's free-text profile over the messaging
//! capability, scores pairwise compatibility with a fixed keyword rubric,
//! and selects the best match plus a ranked shortlist of alternates.
//!
//! The engine is pure orchestration over three seams: the `AgentRegistry`
//! (who exists), the `AgentMessenger` (how to reach them), and the rubric
//! (how two profiles score). Construct a [`MatchEngine`] with a registry
//! and messenger, then call [`MatchEngine::find_best_teammate`].

pub mod aggregator;
pub mod engine;
pub mod fetcher;
pub mod formatter;
pub mod rubric;
pub mod selector;

pub use aggregator::CandidateAggregator;
pub use engine::MatchEngine;
pub use fetcher::ProfileFetcher;
pub use formatter::format_outcome;
pub use selector::select;
