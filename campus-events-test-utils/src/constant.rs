//! Standard values shared by fixtures and tests.

use chrono::{NaiveDate, NaiveDateTime};

/// Department used for fixture users and events.
pub static TEST_DEPARTMENT: &str = "Computer Science";

/// Title given to fixture events.
pub static TEST_EVENT_TITLE: &str = "Tech Fest";

/// Length of the fixture event window in minutes.
pub const TEST_EVENT_DURATION_MINUTES: i32 = 120;

/// Start of the fixture event window, 2026-03-10 09:00.
pub fn test_event_start() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 10)
        .and_then(|date| date.and_hms_opt(9, 0, 0))
        .expect("valid fixture timestamp")
}

/// End of the fixture event window, 2026-03-10 11:00.
pub fn test_event_end() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, 10)
        .and_then(|date| date.and_hms_opt(11, 0, 0))
        .expect("valid fixture timestamp")
}
