//! Habit stacking and implementation intentions
//!
//! Text helpers for attaching a new habit to existing strong habits
//! ("After I X, I will Y") and for if-then planning ("When it is T and I
//! am at L, I will Y"). Both are pure templates over pre-computed
//! strengths; the caller supplies sibling habits and excludes the habit
//! being planned.

use crate::types::TimeOfDay;

/// Minimum strength for a habit to serve as a stacking anchor
pub const ANCHOR_MIN_STRENGTH: u8 = 60;

/// Maximum anchors suggested per habit
pub const MAX_ANCHORS: usize = 3;

/// A sibling habit with its pre-computed strength score.
#[derive(Debug, Clone)]
pub struct HabitAnchor {
    pub name: String,
    pub strength: u8,
}

/// Suggest stacking sentences anchored on the caller's strongest habits.
///
/// Habits at or below strength 60 are too weak to anchor on and are
/// skipped; the rest are ranked by strength and the top three become
/// "After I {anchor}, I will {new}" sentences. Returns an empty list when
/// nothing qualifies.
pub fn habit_stacking_suggestions(existing: &[HabitAnchor], new_habit_name: &str) -> Vec<String> {
    let mut anchors: Vec<&HabitAnchor> = existing
        .iter()
        .filter(|h| h.strength > ANCHOR_MIN_STRENGTH)
        .collect();
    anchors.sort_by(|a, b| b.strength.cmp(&a.strength));

    anchors
        .iter()
        .take(MAX_ANCHORS)
        .map(|anchor| {
            format!(
                "After I {}, I will {}",
                anchor.name.to_lowercase(),
                new_habit_name.to_lowercase()
            )
        })
        .collect()
}

/// Build an implementation intention (if-then plan) for a habit.
///
/// Missing time or location fall back to bracketed placeholders the host
/// UI renders as fill-in slots.
pub fn implementation_intention(
    habit_name: &str,
    preferred_time: Option<&str>,
    preferred_location: Option<&str>,
) -> String {
    let time = preferred_time.unwrap_or("[specific time]");
    let location = preferred_location.unwrap_or("[specific location]");
    format!(
        "When it is {} and I am at {}, I will {}",
        time,
        location,
        habit_name.to_lowercase()
    )
}

/// Implementation intention seeded from the habit's target window.
///
/// Uses the window's default trigger time (7:00 AM / 1:00 PM / 7:00 PM)
/// when one exists.
pub fn intention_for(
    habit_name: &str,
    target_time_of_day: Option<TimeOfDay>,
    preferred_location: Option<&str>,
) -> String {
    let time = target_time_of_day.and_then(|t| t.default_trigger_time());
    implementation_intention(habit_name, time, preferred_location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn anchor(name: &str, strength: u8) -> HabitAnchor {
        HabitAnchor {
            name: name.to_string(),
            strength,
        }
    }

    #[test]
    fn test_weak_anchors_are_excluded() {
        let existing = vec![anchor("A", 40), anchor("B", 80)];
        let suggestions = habit_stacking_suggestions(&existing, "New");
        assert_eq!(suggestions, vec!["After I b, I will new".to_string()]);
    }

    #[test]
    fn test_exactly_sixty_does_not_qualify() {
        let existing = vec![anchor("Meditate", 60)];
        assert!(habit_stacking_suggestions(&existing, "Journal").is_empty());
    }

    #[test]
    fn test_ranked_by_strength_and_capped_at_three() {
        let existing = vec![
            anchor("Walk", 65),
            anchor("Read", 90),
            anchor("Stretch", 75),
            anchor("Hydrate", 85),
        ];
        let suggestions = habit_stacking_suggestions(&existing, "Floss");
        assert_eq!(
            suggestions,
            vec![
                "After I read, I will floss".to_string(),
                "After I hydrate, I will floss".to_string(),
                "After I stretch, I will floss".to_string(),
            ]
        );
    }

    #[test]
    fn test_no_anchors_yields_empty() {
        assert!(habit_stacking_suggestions(&[], "New").is_empty());
    }

    #[test]
    fn test_intention_with_placeholders() {
        let intention = implementation_intention("Read Books", None, None);
        assert_eq!(
            intention,
            "When it is [specific time] and I am at [specific location], I will read books"
        );
    }

    #[test]
    fn test_intention_with_preferences() {
        let intention = implementation_intention("Meditate", Some("6:30 AM"), Some("home"));
        assert_eq!(intention, "When it is 6:30 AM and I am at home, I will meditate");
    }

    #[test]
    fn test_intention_seeded_from_target_window() {
        let intention = intention_for("Journal", Some(TimeOfDay::Evening), None);
        assert_eq!(
            intention,
            "When it is 7:00 PM and I am at [specific location], I will journal"
        );

        let no_window = intention_for("Journal", None, None);
        assert!(no_window.starts_with("When it is [specific time]"));
    }
}
