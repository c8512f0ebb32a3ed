//! Wall-clock source for creation stamps.

use chrono::{Local, NaiveDateTime};

/// Supplies the local wall-clock time used to stamp new items.
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Reads the system local time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant. Used by tests and replay tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
