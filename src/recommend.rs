//! Recommendation generation
//!
//! Produces at most three coaching messages from the sub-score profile.
//! The checks map onto the Fogg Behavior Model: low repetition/consistency
//! call for easier, anchored practice (Ability), a dormant habit calls for
//! a restart (Prompt), and mid-strength habits get motivation support.
//! Checks run in a fixed priority order and the list is cut at three, so
//! earlier deficits win when many apply.

/// Maximum recommendations returned per result
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Sub-score thresholds, in priority order
const LOW_REPETITION: f64 = 40.0;
const LOW_RECENCY: f64 = 50.0;
const LOW_CONSISTENCY: f64 = 40.0;
const LOW_CONTEXT: f64 = 50.0;

/// Generate up to three recommendations from the raw sub-scores, the
/// rounded composite score, and the completion count.
pub fn generate_recommendations(
    score: u8,
    repetition: f64,
    recency: f64,
    consistency: f64,
    context: f64,
    total_completions: usize,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if repetition < LOW_REPETITION {
        recommendations.push("Focus on daily practice - even 2 minutes counts".to_string());
    }

    if recency < LOW_RECENCY {
        recommendations
            .push("Get back on track today - a small action restarts momentum".to_string());
    }

    if consistency < LOW_CONSISTENCY {
        recommendations.push("Link this habit to an existing routine (habit stacking)".to_string());
    }

    if context < LOW_CONTEXT {
        recommendations.push("Set a specific time and place as your trigger".to_string());
    }

    // Ability: shrink the behavior until it is trivially easy
    if score < 30 {
        recommendations.push("Make the habit smaller until it feels almost too easy".to_string());
    }

    // Motivation: reward established effort that is not yet paying off
    if total_completions > 7 && score < 50 {
        recommendations
            .push("Celebrate each completion to build positive associations".to_string());
    }

    // Near formation
    if score > 70 && score < 90 {
        recommendations.push("You're close! Maintain consistency for 2 more weeks".to_string());
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);
    recommendations
}

/// Fixed starter recommendations for a habit with no completions yet.
pub fn starter_recommendations() -> Vec<String> {
    vec![
        "Start with a tiny version of this habit".to_string(),
        "Set a specific trigger time".to_string(),
    ]
}
