use chrono::{DateTime, Utc};

/// Time source for cache expiry, injectable so tests can move time by hand.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
