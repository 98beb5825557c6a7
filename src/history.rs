//! Completion history parsing and derived series
//!
//! This module turns the host's raw `date-string -> bool` map into a
//! sorted completion log and derives the series the scoring functions
//! consume: day gaps, active span, completion rate, and streaks.
//!
//! Keys are `YYYY-MM-DD` calendar days; a key may also carry a time
//! component (`YYYY-MM-DDTHH:MM:SS`, optionally with fractional seconds or
//! an offset), which only the time-of-day bucketing consumes. Malformed
//! keys are either rejected (`from_history`) or dropped
//! (`from_history_lossy`) so the scoring operations stay total.

use crate::error::EngineError;
use crate::types::StreakInfo;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::collections::HashMap;

/// Parsed completion history, most recent completion first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionLog {
    completions: Vec<NaiveDateTime>,
}

impl CompletionLog {
    /// Parse a completion map, rejecting malformed keys.
    ///
    /// Only `true` entries are kept; `false` values are equivalent to
    /// absent keys.
    pub fn from_history(history: &HashMap<String, bool>) -> Result<Self, EngineError> {
        let mut completions = Vec::with_capacity(history.len());
        for (key, completed) in history {
            if !*completed {
                continue;
            }
            let parsed =
                parse_date_key(key).ok_or_else(|| EngineError::InvalidDateKey(key.clone()))?;
            completions.push(parsed);
        }
        completions.sort_unstable_by(|a, b| b.cmp(a));
        Ok(Self { completions })
    }

    /// Parse a completion map, silently dropping malformed keys.
    pub fn from_history_lossy(history: &HashMap<String, bool>) -> Self {
        let mut completions: Vec<NaiveDateTime> = history
            .iter()
            .filter(|(_, completed)| **completed)
            .filter_map(|(key, _)| parse_date_key(key))
            .collect();
        completions.sort_unstable_by(|a, b| b.cmp(a));
        Self { completions }
    }

    pub fn is_empty(&self) -> bool {
        self.completions.is_empty()
    }

    /// Total number of completions
    pub fn len(&self) -> usize {
        self.completions.len()
    }

    /// Completion timestamps, most recent first
    pub fn completions(&self) -> &[NaiveDateTime] {
        &self.completions
    }

    /// Most recent completion, if any
    pub fn last_completion(&self) -> Option<NaiveDateTime> {
        self.completions.first().copied()
    }

    /// Whole days between the most recent completion and `today`,
    /// midnight-normalized. 0 when completed today; negative only for
    /// (pathological) future-dated completions.
    pub fn days_since_last(&self, today: NaiveDate) -> Option<i64> {
        self.last_completion()
            .map(|last| (today - last.date()).num_days())
    }

    /// Day gaps between temporally-adjacent completions: `gaps()[i]` is the
    /// number of calendar days between completion `i` and completion `i+1`.
    pub fn gaps(&self) -> Vec<i64> {
        self.completions
            .windows(2)
            .map(|pair| (pair[0].date() - pair[1].date()).num_days())
            .collect()
    }

    /// Calendar days spanned from the earliest to the latest completion.
    /// 0 for a single completion.
    pub fn span_days(&self) -> i64 {
        match (self.completions.first(), self.completions.last()) {
            (Some(latest), Some(earliest)) => (latest.date() - earliest.date()).num_days(),
            _ => 0,
        }
    }

    /// Fraction of the active date span that was actually completed:
    /// `completions / (span_days + 1)`, in (0, 1] for well-formed daily
    /// histories.
    pub fn completion_rate(&self) -> f64 {
        if self.completions.is_empty() {
            return 0.0;
        }
        self.completions.len() as f64 / (self.span_days() + 1).max(1) as f64
    }

    /// Current and longest runs of consecutive completion days.
    ///
    /// The current streak is alive only while the latest completion is
    /// today or yesterday relative to `today`.
    pub fn streaks(&self, today: NaiveDate) -> StreakInfo {
        let mut days: Vec<NaiveDate> = self.completions.iter().map(|dt| dt.date()).collect();
        days.dedup();

        if days.is_empty() {
            return StreakInfo::default();
        }

        let mut longest: u32 = 0;
        let mut run: u32 = 1;
        // Length of the run containing the latest completion
        let mut latest_run: u32 = 0;

        for pair in days.windows(2) {
            if (pair[0] - pair[1]).num_days() == 1 {
                run += 1;
            } else {
                longest = longest.max(run);
                if latest_run == 0 {
                    latest_run = run;
                }
                run = 1;
            }
        }
        longest = longest.max(run);
        if latest_run == 0 {
            latest_run = run;
        }

        let age = (today - days[0]).num_days();
        let current = if (0..=1).contains(&age) { latest_run } else { 0 };

        StreakInfo { current, longest }
    }
}

/// Parse a completion key: plain calendar date, naive date-time, or an
/// RFC 3339 timestamp (interpreted in its own local offset).
fn parse_date_key(key: &str) -> Option<NaiveDateTime> {
    if let Ok(date) = NaiveDate::parse_from_str(key, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(key, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(key) {
        return Some(dt.naive_local());
    }
    None
}
