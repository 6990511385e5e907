//! Classification of a reading against its normal range.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::parameter::ParameterRange;

/// Status of a reading relative to its normal range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Within the inclusive bounds
    Normal,
    /// Below the lower bound
    Risk,
    /// Above the upper bound
    Concern,
}

impl Status {
    /// Classify `value` against an inclusive range
    #[must_use]
    pub fn from_range(value: f64, range: &ParameterRange) -> Self {
        if value < range.min_normal {
            Self::Risk
        } else if value > range.max_normal {
            Self::Concern
        } else {
            Self::Normal
        }
    }

    /// Risk and Concern implicate nutrients; Normal never does
    #[must_use]
    pub const fn is_abnormal(self) -> bool {
        matches!(self, Self::Risk | Self::Concern)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Risk => "Risk",
            Self::Concern => "Concern",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of classifying one resolved reading
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterAssessment {
    pub parameter: String,
    pub value: f64,
    pub status: Status,
    pub normal_range: String,
}
