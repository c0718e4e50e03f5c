//! Task priority levels
//!
//! Priorities have a fixed domain order: `HIGH < MEDIUM < LOW`. Sorting by
//! priority therefore lists the most urgent work first.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Priority {
    /// Needs attention first
    High,
    /// Normal urgency
    Medium,
    /// Can wait
    Low,
}

impl Priority {
    /// Every priority, in domain order
    pub const ALL: [Self; 3] = [Self::High, Self::Medium, Self::Low];

    /// Wire name of this priority
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "HIGH",
            Self::Medium => "MEDIUM",
            Self::Low => "LOW",
        }
    }

    /// Comma-separated list of accepted wire names, used in error messages
    #[must_use]
    pub fn accepted_values() -> String {
        Self::ALL.iter().map(|p| p.as_str()).collect::<Vec<_>>().join(", ")
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(format!("Invalid priority: {s}. Use: {}", Self::accepted_values())),
        }
    }
}
