//! Clock port
//!
//! Defines where the current time comes from.

use std::fmt::Debug;

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Source of the current instant and the current calendar date
///
/// Creation and completion timestamps come from [`Clock::now`]; due dates are
/// compared against [`Clock::today`].
pub trait Clock: Send + Sync + Debug {
    /// Current instant
    fn now(&self) -> DateTime<Utc>;

    /// Current calendar date in the local time zone
    fn today(&self) -> NaiveDate {
        self.now().with_timezone(&Local).date_naive()
    }
}
