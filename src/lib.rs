//! Habit Forge - compute engine for habit-strength signals
//!
//! Habit Forge turns a habit's per-day completion record into a quantified
//! strength assessment through a deterministic pipeline: history parsing →
//! sub-score derivation (repetition, recency, consistency, context) →
//! weighted composite → formation estimate, classification, and
//! recommendations.
//!
//! The model follows the habit-formation literature: Lally et al. (2010)
//! for the 66-day automaticity mean and the 18-254 day range, and the Fogg
//! Behavior Model (B = Motivation + Ability + Prompt) for which
//! recommendation fires for which deficit.
//!
//! The engine is pure: no I/O, no shared state, and deterministic given
//! its inputs and a reference date. The `_at` entry points take that date
//! explicitly; the plain forms read the local clock once at the boundary.

pub mod classify;
pub mod config;
pub mod engine;
pub mod error;
pub mod formation;
pub mod history;
pub mod recommend;
pub mod report;
pub mod scores;
pub mod stacking;
pub mod types;

pub use config::HabitStrengthConfig;
pub use engine::{calculate_habit_strength, calculate_habit_strength_at};
pub use error::EngineError;
pub use formation::{FORMATION_MAX_DAYS, FORMATION_MEAN_DAYS, FORMATION_MIN_DAYS};
pub use history::CompletionLog;
pub use report::{StrengthEncoder, REPORT_VERSION};
pub use stacking::{
    habit_stacking_suggestions, implementation_intention, intention_for, HabitAnchor,
};
pub use types::{
    Classification, HabitReportEntry, HabitSnapshot, HabitStrengthResult, ReportProducer,
    StreakInfo, StrengthReport, TimeOfDay,
};

/// Engine version embedded in all strength reports
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for strength reports
pub const PRODUCER_NAME: &str = "habit-forge";
