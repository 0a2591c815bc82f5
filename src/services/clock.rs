use chrono::{NaiveDateTime, Utc};

/// Time source for anything that compares against "now". Swapped out in
/// tests so upcoming/past classification is deterministic.
pub trait Clock: Send + Sync {
    fn now(&self) -> NaiveDateTime;
}

pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Utc::now().naive_utc()
    }
}
