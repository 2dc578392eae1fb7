//! Compatibility rubric
//!
//! Pure keyword-based scoring of one requester/candidate profile pair. The
//! rubric is data: fixed keyword sets plus an ordered table of categories,
//! each contributing a fixed number of points and one reason string when its
//! condition holds. Matching is case-insensitive substring containment.
//!
//! Scoring is not guaranteed symmetric: the mirrored skill and leadership
//! branches short-circuit as else-if pairs and emit side-specific reason
//! strings, so `score(a, b)` and `score(b, a)` can diverge when a profile
//! spans multiple categories.

use tandem_core::CompatibilityReport;

// ============================================================================
// KEYWORD SETS
// ============================================================================

pub const FRONTEND_SKILLS: &[&str] = &[
    "html",
    "css",
    "javascript",
    "react",
    "ui",
    "ux",
    "frontend",
    "design",
    "responsive",
];

pub const BACKEND_SKILLS: &[&str] = &[
    "python", "api", "backend", "database", "sql", "server", "crewai",
];

pub const LEADERSHIP_SKILLS: &[&str] = &[
    "leadership",
    "project management",
    "team",
    "organize",
    "mentor",
    "lead",
];

pub const INTROVERT_STYLES: &[&str] = &[
    "introvert",
    "quiet",
    "reserved",
    "shy",
    "thoughtful",
    "prefer written",
];

pub const EXTROVERT_STYLES: &[&str] = &[
    "extrovert",
    "enthusiastic",
    "outgoing",
    "friendly",
    "loves explaining",
    "confident",
];

pub const BEGINNER_LEVELS: &[&str] = &[
    "basic",
    "learning",
    "beginner",
    "still learning",
    "not confident",
    "improving",
];

pub const ADVANCED_LEVELS: &[&str] = &[
    "expert",
    "experienced",
    "advanced",
    "confident",
    "strong",
    "excellent",
];

pub const INTEREST_KEYWORDS: &[&str] = &[
    "ai",
    "machine learning",
    "web development",
    "programming",
    "design",
    "projects",
];

/// Score assigned when no category matches.
pub const FALLBACK_SCORE: f64 = 5.0;

/// Reason emitted when no category matches.
pub const FALLBACK_REASON: &str =
    "Basic compatibility - could work well together with some shared foundation";

// ============================================================================
// CATEGORY TABLE
// ============================================================================

/// One rubric category: a named condition over the (lowercased) requester
/// and candidate texts, worth a fixed number of points.
struct Category {
    name: &'static str,
    points: f64,
    /// Returns the reason string when the condition holds.
    probe: fn(&str, &str) -> Option<String>,
}

/// Categories in evaluation order. Reasons are appended in this order.
const CATEGORIES: &[Category] = &[
    Category {
        name: "skill complementarity",
        points: 30.0,
        probe: probe_skill_complementarity,
    },
    Category {
        name: "leadership balance",
        points: 20.0,
        probe: probe_leadership_balance,
    },
    Category {
        name: "communication balance",
        points: 25.0,
        probe: probe_communication_balance,
    },
    Category {
        name: "experience balance",
        points: 15.0,
        probe: probe_experience_balance,
    },
    Category {
        name: "shared interests",
        points: 10.0,
        probe: probe_shared_interests,
    },
];

fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}

/// Else-if pair: only the first matching direction fires.
fn probe_skill_complementarity(requester: &str, candidate: &str) -> Option<String> {
    if contains_any(requester, FRONTEND_SKILLS) && contains_any(candidate, BACKEND_SKILLS) {
        Some("Frontend + Backend skill complementarity".to_string())
    } else if contains_any(requester, BACKEND_SKILLS) && contains_any(candidate, FRONTEND_SKILLS) {
        Some("Backend + Frontend skill complementarity".to_string())
    } else {
        None
    }
}

/// Else-if pair: fires only when exactly one side shows leadership signal.
fn probe_leadership_balance(requester: &str, candidate: &str) -> Option<String> {
    let requester_leads = contains_any(requester, LEADERSHIP_SKILLS);
    let candidate_leads = contains_any(candidate, LEADERSHIP_SKILLS);
    if requester_leads && !candidate_leads {
        Some("Leadership + Technical collaboration".to_string())
    } else if !requester_leads && candidate_leads {
        Some("Technical + Leadership collaboration".to_string())
    } else {
        None
    }
}

fn probe_communication_balance(requester: &str, candidate: &str) -> Option<String> {
    let requester_introvert = contains_any(requester, INTROVERT_STYLES);
    let requester_extrovert = contains_any(requester, EXTROVERT_STYLES);
    let candidate_introvert = contains_any(candidate, INTROVERT_STYLES);
    let candidate_extrovert = contains_any(candidate, EXTROVERT_STYLES);
    if (requester_introvert && candidate_extrovert)
        || (requester_extrovert && candidate_introvert)
    {
        Some("Balanced introvert-extrovert communication styles".to_string())
    } else {
        None
    }
}

fn probe_experience_balance(requester: &str, candidate: &str) -> Option<String> {
    let requester_beginner = contains_any(requester, BEGINNER_LEVELS);
    let requester_advanced = contains_any(requester, ADVANCED_LEVELS);
    let candidate_beginner = contains_any(candidate, BEGINNER_LEVELS);
    let candidate_advanced = contains_any(candidate, ADVANCED_LEVELS);
    if (requester_beginner && candidate_advanced)
        || (requester_advanced && candidate_beginner)
    {
        Some("Mentor-learner experience balance".to_string())
    } else {
        None
    }
}

/// Flat bonus regardless of how many interests overlap; the reason lists
/// every overlapping interest in keyword-table order.
fn probe_shared_interests(requester: &str, candidate: &str) -> Option<String> {
    let common: Vec<&str> = INTEREST_KEYWORDS
        .iter()
        .filter(|interest| requester.contains(**interest) && candidate.contains(**interest))
        .copied()
        .collect();
    if common.is_empty() {
        None
    } else {
        Some(format!("Shared interests: {}", common.join(", ")))
    }
}

// ============================================================================
// SCORING
// ============================================================================

/// Score a requester profile against a candidate profile.
///
/// Both texts are case-folded, then every category is evaluated in table
/// order. When no category matches, the report carries the fallback reason
/// and the fallback score, so every report has a non-empty reason list and
/// a score of at least [`FALLBACK_SCORE`].
pub fn score(requester_text: &str, candidate_text: &str) -> CompatibilityReport {
    let requester = requester_text.to_lowercase();
    let candidate = candidate_text.to_lowercase();

    let mut total = 0.0;
    let mut reasons = Vec::new();

    for category in CATEGORIES {
        if let Some(reason) = (category.probe)(&requester, &candidate) {
            total += category.points;
            tracing::trace!(category = category.name, points = category.points, "Category matched");
            reasons.push(reason);
        }
    }

    if reasons.is_empty() {
        total += FALLBACK_SCORE;
        reasons.push(FALLBACK_REASON.to_string());
    }

    CompatibilityReport {
        score: total,
        reasons,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frontend_requester_backend_candidate() {
        let report = score("I build React UIs", "I write Python APIs");
        assert_eq!(report.score, 30.0);
        assert_eq!(
            report.reasons,
            vec!["Frontend + Backend skill complementarity"]
        );
    }

    #[test]
    fn test_backend_requester_frontend_candidate_mirrored_reason() {
        let report = score("I write Python APIs", "I build React UIs");
        assert_eq!(report.score, 30.0);
        assert_eq!(
            report.reasons,
            vec!["Backend + Frontend skill complementarity"]
        );
    }

    #[test]
    fn test_skill_branch_short_circuits_on_full_stack_profiles() {
        // Both sides know frontend and backend; only the first branch fires.
        let report = score("React and Python", "CSS and SQL");
        assert_eq!(report.score, 30.0);
        assert_eq!(
            report.reasons,
            vec!["Frontend + Backend skill complementarity"]
        );
    }

    #[test]
    fn test_leadership_only_on_requester_side() {
        let report = score("I mentor juniors", "I enjoy solving puzzles");
        assert_eq!(report.score, 20.0);
        assert_eq!(report.reasons, vec!["Leadership + Technical collaboration"]);
    }

    #[test]
    fn test_leadership_only_on_candidate_side() {
        let report = score("I enjoy solving puzzles", "I organize the club");
        assert_eq!(report.score, 20.0);
        assert_eq!(report.reasons, vec!["Technical + Leadership collaboration"]);
    }

    #[test]
    fn test_leadership_on_both_sides_does_not_fire() {
        let report = score("I lead the robotics team", "leadership comes naturally");
        assert_eq!(report.score, FALLBACK_SCORE);
        assert_eq!(report.reasons, vec![FALLBACK_REASON]);
    }

    #[test]
    fn test_communication_balance_both_directions() {
        let introvert = "I am quiet and prefer written notes";
        let extrovert = "outgoing and loves explaining things";
        let forward = score(introvert, extrovert);
        let backward = score(extrovert, introvert);
        assert_eq!(forward.score, 25.0);
        assert_eq!(backward.score, 25.0);
        assert_eq!(
            forward.reasons,
            vec!["Balanced introvert-extrovert communication styles"]
        );
        assert_eq!(forward.reasons, backward.reasons);
    }

    #[test]
    fn test_experience_balance() {
        let report = score("still learning the basics", "I am an experienced engineer");
        assert_eq!(report.score, 15.0);
        assert_eq!(report.reasons, vec!["Mentor-learner experience balance"]);
    }

    #[test]
    fn test_two_beginners_do_not_balance() {
        let report = score("still learning", "beginner here, improving");
        assert_eq!(report.score, FALLBACK_SCORE);
    }

    #[test]
    fn test_shared_interests_flat_bonus() {
        let one_overlap = score("into programming", "programming daily");
        let three_overlaps = score(
            "ai, programming and web development",
            "web development, programming, ai",
        );
        assert_eq!(one_overlap.score, 10.0);
        assert_eq!(three_overlaps.score, 10.0);
        assert_eq!(one_overlap.reasons, vec!["Shared interests: programming"]);
        assert_eq!(
            three_overlaps.reasons,
            vec!["Shared interests: ai, web development, programming"]
        );
    }

    #[test]
    fn test_fallback_on_no_signal() {
        let report = score("I collect stamps", "I grow tomatoes");
        assert_eq!(report.score, FALLBACK_SCORE);
        assert_eq!(report.reasons, vec![FALLBACK_REASON]);
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let report = score("REACT AND UI WORK", "Python And SQL");
        assert_eq!(report.score, 30.0);
    }

    #[test]
    fn test_categories_are_additive_in_table_order() {
        let requester = "React UI designer, quiet, still learning, into programming";
        let candidate = "Experienced Python lead, outgoing, programming every day";
        let report = score(requester, candidate);
        // skill 30 + leadership 20 + communication 25 + experience 15 + interests 10
        assert_eq!(report.score, 100.0);
        assert_eq!(
            report.reasons,
            vec![
                "Frontend + Backend skill complementarity",
                "Technical + Leadership collaboration",
                "Balanced introvert-extrovert communication styles",
                "Mentor-learner experience balance",
                "Shared interests: programming",
            ]
        );
    }

    #[test]
    fn test_react_designer_matches_python_backend() {
        let requester = "I love React and UI design, happy to mentor beginners";
        let candidate = "I'm an experienced Python, SQL and backend API expert, still learning leadership";
        let report = score(requester, candidate);
        assert!(report.score >= 45.0);
        assert!(report
            .reasons
            .contains(&"Frontend + Backend skill complementarity".to_string()));
        assert!(report
            .reasons
            .contains(&"Mentor-learner experience balance".to_string()));
    }

    #[test]
    fn test_scoring_can_be_asymmetric() {
        // Requester spans both skill sets, candidate is frontend-only with a
        // leadership signal; flipping the sides flips which branches fire.
        let full_stack = "React frontend and Python backend";
        let designer_lead = "CSS design lead";
        let forward = score(full_stack, designer_lead);
        let backward = score(designer_lead, full_stack);
        assert!(forward
            .reasons
            .contains(&"Technical + Leadership collaboration".to_string()));
        assert!(backward
            .reasons
            .contains(&"Leadership + Technical collaboration".to_string()));
        assert_ne!(forward.reasons, backward.reasons);
    }

    #[test]
    fn test_sentinel_profile_scores_fallback_without_incidental_overlap() {
        let report = score("I love React and UI design", "Profile unavailable");
        assert_eq!(report.score, FALLBACK_SCORE);
        assert_eq!(report.reasons, vec![FALLBACK_REASON]);
    }

    #[test]
    fn test_sentinel_profile_can_overlap_incidentally() {
        // "unavailable" contains the substring "ai", so a requester who also
        // mentions ai shares an interest with the sentinel text.
        let report = score("I am into ai research", "Profile unavailable");
        assert_eq!(report.score, 10.0);
        assert_eq!(report.reasons, vec!["Shared interests: ai"]);
    }
}
