//! Strength report encoding
//!
//! Scores a set of habits and encodes the results into a versioned report
//! payload: every habit ranked by strength, each with its streak summary,
//! plus a fleet-wide average. This is the engine-side half of the host's
//! analytics view.

use crate::config::HabitStrengthConfig;
use crate::engine::calculate_habit_strength_at;
use crate::error::EngineError;
use crate::history::CompletionLog;
use crate::types::{HabitReportEntry, HabitSnapshot, ReportProducer, StrengthReport};
use crate::{ENGINE_VERSION, PRODUCER_NAME};
use chrono::{Local, NaiveDate, Utc};
use uuid::Uuid;

/// Current report schema version
pub const REPORT_VERSION: &str = "1.0.0";

/// Encoder producing ranked strength reports
pub struct StrengthEncoder {
    instance_id: String,
    config: HabitStrengthConfig,
}

impl Default for StrengthEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl StrengthEncoder {
    /// Create an encoder with the default weight config and a unique
    /// instance ID
    pub fn new() -> Self {
        Self::with_config(HabitStrengthConfig::default())
    }

    pub fn with_config(config: HabitStrengthConfig) -> Self {
        Self {
            instance_id: Uuid::new_v4().to_string(),
            config,
        }
    }

    /// Create an encoder with a specific instance ID
    pub fn with_instance_id(instance_id: String, config: HabitStrengthConfig) -> Self {
        Self {
            instance_id,
            config,
        }
    }

    /// Score every habit and build a report, anchored on today's local
    /// calendar date.
    pub fn encode(&self, habits: &[HabitSnapshot]) -> StrengthReport {
        self.encode_at(habits, Local::now().date_naive())
    }

    /// Deterministic form of [`StrengthEncoder::encode`] with an injected
    /// reference date.
    pub fn encode_at(&self, habits: &[HabitSnapshot], today: NaiveDate) -> StrengthReport {
        let mut entries: Vec<HabitReportEntry> = habits
            .iter()
            .map(|habit| {
                let result = calculate_habit_strength_at(
                    &habit.completed_days,
                    &self.config,
                    habit.target_time_of_day,
                    today,
                );
                let streak =
                    CompletionLog::from_history_lossy(&habit.completed_days).streaks(today);
                HabitReportEntry {
                    name: habit.name.clone(),
                    result,
                    streak,
                }
            })
            .collect();

        // Strongest first; stable sort keeps input order on ties
        entries.sort_by(|a, b| b.result.score.cmp(&a.result.score));

        let average_score = if entries.is_empty() {
            0
        } else {
            let sum: u32 = entries.iter().map(|e| u32::from(e.result.score)).sum();
            (sum as f64 / entries.len() as f64).round() as u8
        };

        StrengthReport {
            report_version: REPORT_VERSION.to_string(),
            producer: ReportProducer {
                name: PRODUCER_NAME.to_string(),
                version: ENGINE_VERSION.to_string(),
                instance_id: self.instance_id.clone(),
            },
            computed_at_utc: Utc::now().to_rfc3339(),
            habits: entries,
            average_score,
        }
    }

    /// Encode to pretty-printed JSON
    pub fn encode_to_json(&self, habits: &[HabitSnapshot]) -> Result<String, EngineError> {
        serde_json::to_string_pretty(&self.encode(habits))
            .map_err(|e| EngineError::EncodingError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn snapshot(name: &str, today: NaiveDate, days: i64) -> HabitSnapshot {
        let completed_days: HashMap<String, bool> = (0..days)
            .map(|i| {
                let day = today - chrono::Duration::days(i);
                (day.format("%Y-%m-%d").to_string(), true)
            })
            .collect();
        HabitSnapshot {
            name: name.to_string(),
            completed_days,
            target_time_of_day: None,
        }
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_entries_ranked_by_score() {
        let today = date("2026-08-07");
        let habits = vec![
            snapshot("Sporadic", today, 2),
            snapshot("Solid", today, 50),
            snapshot("Growing", today, 10),
        ];

        let encoder = StrengthEncoder::new();
        let report = encoder.encode_at(&habits, today);

        let names: Vec<&str> = report.habits.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Solid", "Growing", "Sporadic"]);

        let scores: Vec<u8> = report.habits.iter().map(|e| e.result.score).collect();
        assert!(scores.windows(2).all(|pair| pair[0] >= pair[1]));
    }

    #[test]
    fn test_average_is_rounded_mean() {
        let today = date("2026-08-07");
        let habits = vec![snapshot("A", today, 50), snapshot("B", today, 2)];

        let report = StrengthEncoder::new().encode_at(&habits, today);

        let expected = ((u32::from(report.habits[0].result.score)
            + u32::from(report.habits[1].result.score)) as f64
            / 2.0)
            .round() as u8;
        assert_eq!(report.average_score, expected);
    }

    #[test]
    fn test_empty_input() {
        let report = StrengthEncoder::new().encode_at(&[], date("2026-08-07"));
        assert!(report.habits.is_empty());
        assert_eq!(report.average_score, 0);
        assert_eq!(report.report_version, REPORT_VERSION);
    }

    #[test]
    fn test_streaks_included_per_habit() {
        let today = date("2026-08-07");
        let habits = vec![snapshot("Daily", today, 5)];

        let report = StrengthEncoder::new().encode_at(&habits, today);
        assert_eq!(report.habits[0].streak.current, 5);
        assert_eq!(report.habits[0].streak.longest, 5);
    }

    #[test]
    fn test_producer_metadata() {
        let encoder = StrengthEncoder::with_instance_id(
            "test-instance".to_string(),
            HabitStrengthConfig::default(),
        );
        let report = encoder.encode_at(&[], date("2026-08-07"));

        assert_eq!(report.producer.name, PRODUCER_NAME);
        assert_eq!(report.producer.instance_id, "test-instance");
        assert!(!report.producer.version.is_empty());
    }

    #[test]
    fn test_report_serializes() {
        let today = date("2026-08-07");
        let habits = vec![snapshot("Read", today, 7)];

        let json = StrengthEncoder::new().encode_to_json(&habits).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["report_version"], REPORT_VERSION);
        assert_eq!(value["habits"][0]["name"], "Read");
        assert!(value["habits"][0]["result"]["score"].as_u64().is_some());
    }
}
