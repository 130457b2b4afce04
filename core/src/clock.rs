use chrono::{Local, NaiveDateTime};

/// Source of the wall-clock reading that stamps a log entry.
///
/// The engine samples the clock exactly once per logged meal and derives
/// both the date and the time-of-day from that single reading, so an entry
/// can never straddle a midnight boundary. Production uses `SystemClock`;
/// tests inject a fixed clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}
