//! Aggregate values that may fail to compute independently of each other.

use serde::{Deserialize, Serialize};

/// Value returned in place of a failed scalar by `value_or_sentinel`.
pub const FAILED_SENTINEL: f64 = -1.0;

/// An aggregate statistic: computed, or failed with the reason.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Statistic<T> {
    Computed(T),
    Failed { reason: String },
}

impl<T> Statistic<T> {
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Computed(value) => Some(value),
            Self::Failed { .. } => None,
        }
    }

    pub fn is_computed(&self) -> bool {
        matches!(self, Self::Computed(_))
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Computed(_) => None,
            Self::Failed { reason } => Some(reason),
        }
    }
}

impl Statistic<f64> {
    /// The computed value, or -1 when the statistic failed.
    pub fn value_or_sentinel(&self) -> f64 {
        self.value().copied().unwrap_or(FAILED_SENTINEL)
    }
}
