//! Core types for the habit-strength engine
//!
//! This module defines the value types that flow through a strength
//! computation: time-of-day buckets, classifications, the per-habit result,
//! streak summaries, and the cross-habit report payload.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Time-of-day bucket for context scoring.
///
/// `Night` exists as a bucket for completions outside the three named
/// windows but is not a selectable target in the host UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl TimeOfDay {
    /// Bucket a local hour (0-23) into a time-of-day window.
    ///
    /// Windows: morning [5,12), afternoon [12,17), evening [17,21),
    /// night otherwise.
    pub fn from_hour(hour: u32) -> Self {
        match hour {
            5..=11 => TimeOfDay::Morning,
            12..=16 => TimeOfDay::Afternoon,
            17..=20 => TimeOfDay::Evening,
            _ => TimeOfDay::Night,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeOfDay::Morning => "morning",
            TimeOfDay::Afternoon => "afternoon",
            TimeOfDay::Evening => "evening",
            TimeOfDay::Night => "night",
        }
    }

    /// Default trigger time used to seed implementation intentions.
    ///
    /// Matches the times the host UI proposes for each window. `Night` has
    /// no default.
    pub fn default_trigger_time(&self) -> Option<&'static str> {
        match self {
            TimeOfDay::Morning => Some("7:00 AM"),
            TimeOfDay::Afternoon => Some("1:00 PM"),
            TimeOfDay::Evening => Some("7:00 PM"),
            TimeOfDay::Night => None,
        }
    }
}

/// Ordinal habit classification, weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Nascent,
    Developing,
    Forming,
    Established,
    Automatic,
}

impl Classification {
    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Nascent => "nascent",
            Classification::Developing => "developing",
            Classification::Forming => "forming",
            Classification::Established => "established",
            Classification::Automatic => "automatic",
        }
    }
}

/// Result of a habit-strength computation.
///
/// Entirely derived from the completion history, the weight config, and the
/// reference date; never stored by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HabitStrengthResult {
    /// Overall strength score (0-100), weighted composite of the sub-scores
    pub score: u8,
    /// Raw volume of completions, saturating at the 66-day automaticity mean
    pub repetition_score: u8,
    /// Exponential decay from the most recent completion
    pub recency_score: u8,
    /// Regularity of completion intervals (variance-based)
    pub consistency_score: u8,
    /// Share of completions landing in the target time-of-day window
    pub context_score: u8,
    /// Estimated days remaining to automaticity (0-254)
    pub estimated_days_to_habit: u32,
    /// Progress toward formation (0-95; 100% is never claimed here)
    pub progress_to_habit: u8,
    pub classification: Classification,
    /// At most three, ordered by priority
    pub recommendations: Vec<String>,
}

/// Current and longest runs of consecutive completion days.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakInfo {
    /// Length of the run ending today or yesterday; 0 if the run is broken
    pub current: u32,
    /// Longest run anywhere in the history
    pub longest: u32,
}

/// A habit as supplied by the host: name, per-day completion record, and
/// the intended time-of-day window.
///
/// Keys of `completed_days` are `YYYY-MM-DD` calendar days; a key may carry
/// a time component, which only the context sub-score consumes. Absent keys
/// and `false` values both mean "not completed".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitSnapshot {
    pub name: String,
    pub completed_days: HashMap<String, bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_time_of_day: Option<TimeOfDay>,
}

impl HabitSnapshot {
    /// Parse a stored array of snapshots from JSON.
    pub fn parse_many(json: &str) -> Result<Vec<HabitSnapshot>, crate::error::EngineError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Producer metadata stamped on every strength report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportProducer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// One habit's entry in a strength report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HabitReportEntry {
    pub name: String,
    pub result: HabitStrengthResult,
    pub streak: StreakInfo,
}

/// Cross-habit strength report: every habit scored and ranked by strength,
/// with a fleet-wide average.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrengthReport {
    pub report_version: String,
    pub producer: ReportProducer,
    pub computed_at_utc: String,
    /// Entries sorted by score, strongest first
    pub habits: Vec<HabitReportEntry>,
    /// Rounded mean of all scores; 0 when there are no habits
    pub average_score: u8,
}
