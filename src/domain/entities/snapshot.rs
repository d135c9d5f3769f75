use crate::domain::entities::commodity::Commodity;
use chrono::{DateTime, Duration, Utc};
use serde::Serialize;

/// One parsed capture of the whole settlement table.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub commodities: Vec<Commodity>,
    pub fetched_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(commodities: Vec<Commodity>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            commodities,
            fetched_at,
        }
    }

    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        now - self.fetched_at
    }

    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        self.age(now) < ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freshness_boundary() {
        let t0 = Utc::now();
        let snap = Snapshot::new(vec![], t0);
        let ttl = Duration::seconds(6000);
        assert!(snap.is_fresh(t0 + Duration::seconds(5999), ttl));
        assert!(!snap.is_fresh(t0 + ttl, ttl));
    }
}
