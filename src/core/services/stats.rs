//! Completion-time statistics
//!
//! Averages how long completed tasks took, overall and per priority, and
//! renders each average as `DD:HH:MM:SS`.

use serde::Serialize;

use crate::core::models::{Priority, Task};

/// Stat names, in the order they are reported
pub const STAT_KEYS: [&str; 4] = [
    "averageTime",
    "averageTimeHighPriority",
    "averageTimeMediumPriority",
    "averageTimeLowPriority",
];

/// Formatted average completion times
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionStats {
    /// Average over every completed task
    pub average_time: String,
    /// Average over completed `HIGH` tasks
    pub average_time_high_priority: String,
    /// Average over completed `MEDIUM` tasks
    pub average_time_medium_priority: String,
    /// Average over completed `LOW` tasks
    pub average_time_low_priority: String,
}

impl CompletionStats {
    /// Look a stat up by its reported name
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        match key {
            "averageTime" => Some(&self.average_time),
            "averageTimeHighPriority" => Some(&self.average_time_high_priority),
            "averageTimeMediumPriority" => Some(&self.average_time_medium_priority),
            "averageTimeLowPriority" => Some(&self.average_time_low_priority),
            _ => None,
        }
    }

    /// `(name, value)` pairs in reporting order
    #[must_use]
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        STAT_KEYS.iter().filter_map(|&k| self.get(k).map(|v| (k, v))).collect()
    }
}

#[derive(Debug, Clone, Copy, Default)]
struct Bucket {
    total_ms: i64,
    count: i64,
}

impl Bucket {
    const fn add(&mut self, ms: i64) {
        self.total_ms += ms;
        self.count += 1;
    }

    const fn average_ms(self) -> i64 {
        if self.count == 0 { 0 } else { self.total_ms / self.count }
    }
}

/// Compute average completion times over `tasks`.
///
/// Only tasks that are done and carry a completion timestamp count. An empty
/// bucket averages to zero.
#[must_use]
pub fn completion_stats(tasks: &[Task]) -> CompletionStats {
    let mut overall = Bucket::default();
    let mut by_priority = [Bucket::default(); 3];

    for task in tasks {
        let Some(elapsed) = task.completion_time() else {
            continue;
        };
        let ms = elapsed.num_milliseconds();
        overall.add(ms);
        let slot = match task.priority {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        };
        by_priority[slot].add(ms);
    }

    CompletionStats {
        average_time: format_duration(overall.average_ms()),
        average_time_high_priority: format_duration(by_priority[0].average_ms()),
        average_time_medium_priority: format_duration(by_priority[1].average_ms()),
        average_time_low_priority: format_duration(by_priority[2].average_ms()),
    }
}

/// Render milliseconds as `DD:HH:MM:SS`, each part zero-padded to two digits
#[must_use]
pub fn format_duration(millis: i64) -> String {
    let seconds = millis / 1000;
    let minutes = seconds / 60;
    let hours = minutes / 60;
    let days = hours / 24;

    format!("{:02}:{:02}:{:02}:{:02}", days, hours % 24, minutes % 60, seconds % 60)
}
