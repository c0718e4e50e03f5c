//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing todoapp components.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Utc};
use parking_lot::Mutex;

use todoapp::TodoService;
use todoapp::core::models::{NewTask, Priority, Task};
use todoapp::core::ports::Clock;

/// Page size used by fixture services
pub const PAGE_SIZE: usize = 10;

/// A clock that only moves when told to
#[derive(Debug)]
pub struct FixedClock {
    now: Mutex<DateTime<Utc>>,
}

impl FixedClock {
    /// Create a clock frozen at the given UTC instant
    pub fn at(year: i32, month: u32, day: u32, hour: u32) -> Arc<Self> {
        let now = Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap();
        Arc::new(Self { now: Mutex::new(now) })
    }

    /// Move the clock forward
    pub fn advance(&self, delta: TimeDelta) {
        *self.now.lock() += delta;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }

    fn today(&self) -> NaiveDate {
        self.now.lock().date_naive()
    }
}

/// Noon on 2026-03-15, a Sunday
pub fn default_clock() -> Arc<FixedClock> {
    FixedClock::at(2026, 3, 15, 12)
}

/// A service on a fixed clock, returned with the clock so tests can move time
pub fn service() -> (TodoService, Arc<FixedClock>) {
    let clock = default_clock();
    let service = TodoService::with_clock(PAGE_SIZE, clock.clone());
    (service, clock)
}

/// Add a task without a due date
pub fn add(service: &TodoService, text: &str, priority: Priority) -> Task {
    service.add_task(&NewTask::new(text, priority)).unwrap()
}

/// Add a task due on `due` (`yyyy-MM-dd`)
pub fn add_due(service: &TodoService, text: &str, priority: Priority, due: &str) -> Task {
    service
        .add_task(&NewTask::new(text, priority).with_due_date(due))
        .unwrap()
}

/// Texts of a list of tasks, in order
pub fn texts(tasks: &[Task]) -> Vec<String> {
    tasks.iter().map(|t| t.text.clone()).collect()
}
