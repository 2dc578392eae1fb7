//! Result formatter
//!
//! Renders a `MatchOutcome` into the user-facing recommendation text. Pure
//! and side-effect-free; truncation is by character count so multi-byte
//! text never splits mid-character.

use crate::rubric::FALLBACK_REASON;
use tandem_core::{MatchOutcome, Profile};

/// Profile excerpts are capped at this many characters.
pub const PROFILE_EXCERPT_CHARS: usize = 300;

/// Alternate reasoning excerpts are capped at this many characters.
pub const REASONING_EXCERPT_CHARS: usize = 100;

fn excerpt(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

/// The display form of a report's reasons: the bare fallback reason when
/// nothing categorical fired, otherwise the reasons joined into one line.
fn reasoning_line(reasons: &[String]) -> String {
    match reasons {
        [only] if only == FALLBACK_REASON => only.clone(),
        _ => format!("Strong compatibility due to: {}", reasons.join("; ")),
    }
}

/// Render the recommendation summary for a completed matching operation.
///
/// `candidates` supplies the profile text excerpted for the best match and
/// must be the set the outcome was selected from.
pub fn format_outcome(
    outcome: &MatchOutcome,
    requester: &Profile,
    candidates: &[Profile],
) -> String {
    let Some(best) = &outcome.best else {
        return "Unable to find a suitable teammate match.".to_string();
    };
    let best_text = candidates
        .iter()
        .find(|profile| profile.agent_id == best.agent_id)
        .map(|profile| profile.text.as_str())
        .unwrap_or("");

    let mut result = format!(
        "## 🎯 Best Teammate Recommendation for {}\n\n",
        outcome.requester
    );
    result.push_str(&format!("**Recommended Partner:** {}\n", best.agent_id));
    result.push_str(&format!("**Compatibility Score:** {:.1}/100\n", best.score));
    result.push_str(&format!(
        "**Why this match works:** {}\n\n",
        reasoning_line(&best.reasons)
    ));
    result.push_str(&format!(
        "**Your Profile Summary:**\n{}...\n\n",
        excerpt(&requester.text, PROFILE_EXCERPT_CHARS)
    ));
    result.push_str(&format!(
        "**{}'s Profile Summary:**\n{}...\n\n",
        best.agent_id,
        excerpt(best_text, PROFILE_EXCERPT_CHARS)
    ));

    if !outcome.alternates.is_empty() {
        result.push_str("**Other Potential Matches:**\n");
        for alternate in &outcome.alternates {
            result.push_str(&format!(
                "- **{}** (Score: {:.1}) - {}...\n",
                alternate.agent_id,
                alternate.score,
                excerpt(&reasoning_line(&alternate.reasons), REASONING_EXCERPT_CHARS)
            ));
        }
    }

    result
}
