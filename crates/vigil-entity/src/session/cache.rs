//! The seen-session cache document.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use vigil_core::types::SessionId;

/// Hours without an update before the whole record is discarded.
const ROLLING_WINDOW_HOURS: i64 = 24;

/// Rolling record of session ids the agent itself has held.
///
/// Own ids accumulate here across reconnects so that snapshot filtering
/// never mistakes a lingering former own session for a foreign device.
/// The record is bounded by its rolling window: once nothing has been
/// written for 24 hours, the next write starts it over from empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeenSessionCache {
    /// When the record was last written.
    #[serde(rename = "lastUpdated", with = "chrono::serde::ts_milliseconds")]
    pub last_updated: DateTime<Utc>,
    /// Session ids recorded within the current window.
    #[serde(rename = "sessionIds", default)]
    pub session_ids: Vec<SessionId>,
}

impl SeenSessionCache {
    /// An empty record stamped at `now`.
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            last_updated: now,
            session_ids: Vec::new(),
        }
    }

    /// Whether the rolling window has lapsed relative to `now`.
    pub fn is_stale(&self, now: DateTime<Utc>) -> bool {
        now - self.last_updated > Duration::hours(ROLLING_WINDOW_HOURS)
    }

    /// Whether `id` was recorded within the current window.
    pub fn contains(&self, id: &SessionId) -> bool {
        self.session_ids.iter().any(|known| known == id)
    }

    /// Record one own session id observed at `now`.
    ///
    /// A lapsed window discards the previous record first. Ids are
    /// append-only within a window. Returns `true` when the document
    /// changed and needs persisting.
    pub fn record(&mut self, id: &SessionId, now: DateTime<Utc>) -> bool {
        if self.is_stale(now) {
            self.session_ids.clear();
            self.session_ids.push(id.clone());
            self.last_updated = now;
            return true;
        }
        if self.contains(id) {
            return false;
        }
        self.session_ids.push(id.clone());
        self.last_updated = now;
        true
    }
}

impl Default for SeenSessionCache {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_appends_new_ids() {
        let now = Utc::now();
        let mut cache = SeenSessionCache::new(now);

        assert!(cache.record(&SessionId::new("a"), now));
        assert!(cache.record(&SessionId::new("b"), now));
        assert_eq!(cache.session_ids.len(), 2);
        assert!(cache.contains(&SessionId::new("a")));
    }

    #[test]
    fn test_record_ignores_duplicates() {
        let now = Utc::now();
        let mut cache = SeenSessionCache::new(now);

        assert!(cache.record(&SessionId::new("a"), now));
        assert!(!cache.record(&SessionId::new("a"), now));
        assert_eq!(cache.session_ids.len(), 1);
    }

    #[test]
    fn test_duplicate_does_not_touch_timestamp() {
        let first = Utc::now();
        let mut cache = SeenSessionCache::new(first);
        cache.record(&SessionId::new("a"), first);

        let later = first + Duration::hours(1);
        assert!(!cache.record(&SessionId::new("a"), later));
        assert_eq!(cache.last_updated, first);
    }

    #[test]
    fn test_lapsed_window_resets_record() {
        let start = Utc::now();
        let mut cache = SeenSessionCache::new(start);
        cache.record(&SessionId::new("old"), start);

        let later = start + Duration::hours(25);
        assert!(cache.record(&SessionId::new("new"), later));
        assert_eq!(cache.session_ids, vec![SessionId::new("new")]);
        assert_eq!(cache.last_updated, later);
    }

    #[test]
    fn test_window_edge_is_exclusive() {
        let start = Utc::now();
        let cache = SeenSessionCache::new(start);

        assert!(!cache.is_stale(start + Duration::hours(24)));
        assert!(cache.is_stale(start + Duration::hours(24) + Duration::seconds(1)));
    }

    #[test]
    fn test_document_shape() {
        let now = DateTime::from_timestamp_millis(1700000000000).unwrap();
        let mut cache = SeenSessionCache::new(now);
        cache.record(&SessionId::new("a"), now);

        let value = serde_json::to_value(&cache).unwrap();
        assert_eq!(value["lastUpdated"], 1700000000000i64);
        assert_eq!(value["sessionIds"][0], "a");
    }
}
