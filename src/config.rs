//! Weight configuration for the strength computation
//!
//! The four component weights SHOULD sum to 1.0; the engine trusts the
//! caller and performs no normalization. Two presets are provided.

use serde::{Deserialize, Serialize};

/// Weights and decay rate for a habit-strength computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HabitStrengthConfig {
    /// Weight for repetition volume (0-1)
    pub repetition_weight: f64,
    /// Weight for recency decay (0-1)
    pub recency_weight: f64,
    /// Weight for interval consistency (0-1)
    pub consistency_weight: f64,
    /// Weight for time-of-day context match (0-1)
    pub context_weight: f64,
    /// Exponential decay rate for recency (higher = faster decay)
    pub recency_decay_rate: f64,
}

impl Default for HabitStrengthConfig {
    fn default() -> Self {
        Self {
            repetition_weight: 0.35,
            recency_weight: 0.25,
            consistency_weight: 0.25,
            context_weight: 0.15,
            recency_decay_rate: 0.1,
        }
    }
}

impl HabitStrengthConfig {
    /// Research-backed preset derived from Lally et al. (2010): repetition
    /// and consistency dominate, recency decays more slowly.
    pub fn research() -> Self {
        Self {
            repetition_weight: 0.4,
            recency_weight: 0.2,
            consistency_weight: 0.3,
            context_weight: 0.1,
            recency_decay_rate: 0.08,
        }
    }
}
