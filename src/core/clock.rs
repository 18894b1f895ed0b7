use chrono::Datelike;

/// Injected calendar-year source.
pub trait Clock {
    fn current_year(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i64 {
        i64::from(chrono::Utc::now().year())
    }
}

/// Pinned year, for deterministic rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn current_year(&self) -> i64 {
        self.0
    }
}
