//! Match selector
//!
//! Scores every candidate against the requester and picks the best match.
//! Candidates are scored in fetch order (registration order) and the running
//! best is only replaced on a strictly greater score, so the first candidate
//! to reach the maximum wins ties. Alternates come from a stable descending
//! sort, which keeps encounter order among equal scores.

use crate::rubric;
use tandem_core::{MatchError, MatchOutcome, Profile, ScoredCandidate};

/// Select the best match and up to two ranked alternates.
///
/// # Errors
/// * `MatchError::NoMatch` - the candidate slice was empty
pub fn select(requester: &Profile, candidates: &[Profile]) -> Result<MatchOutcome, MatchError> {
    if candidates.is_empty() {
        return Err(MatchError::NoMatch);
    }

    let mut scored = Vec::with_capacity(candidates.len());
    let mut best_index: Option<usize> = None;
    let mut highest = 0.0_f64;

    for (index, candidate) in candidates.iter().enumerate() {
        let report = rubric::score(&requester.text, &candidate.text);
        tracing::debug!(
            candidate = %candidate.agent_id,
            score = report.score,
            "Scored candidate"
        );
        if report.score > highest {
            highest = report.score;
            best_index = Some(index);
        }
        scored.push(ScoredCandidate::new(candidate.agent_id.clone(), report));
    }

    // Every report scores at least the fallback 5.0, so a non-empty
    // candidate set always yields a best.
    let best = best_index.map(|index| scored[index].clone());

    let mut ranked = scored;
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    // The stable sort puts the first-seen maximum at the front, so skipping
    // one entry drops exactly the selected best.
    let alternates = ranked.into_iter().skip(1).take(2).collect();

    Ok(MatchOutcome {
        requester: requester.agent_id.clone(),
        best,
        alternates,
    })
}
