//! Strength computation orchestration
//!
//! This module provides the public entry points of habit-forge. A
//! computation runs the full pipeline over one habit's completion map:
//! parse and sort the history, derive the four sub-scores, combine them
//! under the configured weights, then attach the formation estimate,
//! classification, and recommendations.
//!
//! The computation is a pure function of its inputs and the reference
//! date. `calculate_habit_strength` reads today's date from the local
//! clock at the boundary; `calculate_habit_strength_at` takes the date
//! explicitly and is fully deterministic.

use crate::classify::classify;
use crate::config::HabitStrengthConfig;
use crate::formation::{estimate_days_to_habit, FORMATION_MEAN_DAYS};
use crate::history::CompletionLog;
use crate::recommend::{generate_recommendations, starter_recommendations};
use crate::scores::{consistency_score, context_score, recency_score, repetition_score};
use crate::types::{Classification, HabitStrengthResult, TimeOfDay};
use chrono::{Local, NaiveDate};
use std::collections::HashMap;

/// Compute a habit's strength from its completion map.
///
/// Anchors the recency and formation calculations on today's local
/// calendar date. Malformed date keys are dropped; the computation never
/// fails.
///
/// # Example
/// ```ignore
/// let result = calculate_habit_strength(
///     &habit.completed_days,
///     &HabitStrengthConfig::default(),
///     habit.target_time_of_day,
/// );
/// ```
pub fn calculate_habit_strength(
    completed_days: &HashMap<String, bool>,
    config: &HabitStrengthConfig,
    target_time_of_day: Option<TimeOfDay>,
) -> HabitStrengthResult {
    calculate_habit_strength_at(
        completed_days,
        config,
        target_time_of_day,
        Local::now().date_naive(),
    )
}

/// Deterministic form of [`calculate_habit_strength`] with an injected
/// reference date.
pub fn calculate_habit_strength_at(
    completed_days: &HashMap<String, bool>,
    config: &HabitStrengthConfig,
    target_time_of_day: Option<TimeOfDay>,
    today: NaiveDate,
) -> HabitStrengthResult {
    let log = CompletionLog::from_history_lossy(completed_days);

    if log.is_empty() {
        return empty_result();
    }

    let total = log.len();

    // Sub-scores stay unrounded until the output boundary; the composite
    // combines the raw values
    let repetition = repetition_score(total);
    let days_since_last = log.days_since_last(today).unwrap_or(0);
    let recency = recency_score(days_since_last, config.recency_decay_rate);
    let consistency = consistency_score(&log);
    let context = context_score(&log, target_time_of_day);

    let composite = repetition * config.repetition_weight
        + recency * config.recency_weight
        + consistency * config.consistency_weight
        + context * config.context_weight;
    let score = round_score(composite);

    let estimate = estimate_days_to_habit(&log, score);
    let classification = classify(score, total as u32);
    let recommendations =
        generate_recommendations(score, repetition, recency, consistency, context, total);

    HabitStrengthResult {
        score,
        repetition_score: round_score(repetition),
        recency_score: round_score(recency),
        consistency_score: round_score(consistency),
        context_score: round_score(context),
        estimated_days_to_habit: estimate.estimated_days,
        progress_to_habit: estimate.progress_to_habit,
        classification,
        recommendations,
    }
}

/// Fixed zero state for a habit with no completions.
fn empty_result() -> HabitStrengthResult {
    HabitStrengthResult {
        score: 0,
        repetition_score: 0,
        recency_score: 0,
        consistency_score: 0,
        context_score: 0,
        estimated_days_to_habit: FORMATION_MEAN_DAYS,
        progress_to_habit: 0,
        classification: Classification::Nascent,
        recommendations: starter_recommendations(),
    }
}

fn round_score(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}
