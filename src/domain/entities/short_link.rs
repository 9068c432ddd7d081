//! Short link entity representing a code-to-URL mapping with click accounting.

use chrono::{DateTime, Utc};

/// A shortened URL held by a [`crate::domain::repositories::LinkStore`],
/// keyed by its short code.
///
/// `target` never changes after creation; `clicks` only grows.
#[derive(Debug, Clone)]
pub struct ShortLink {
    pub target: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a fresh link with zero clicks, stamped with the current time.
    pub fn new(target: String) -> Self {
        Self {
            target,
            clicks: 0,
            created_at: Utc::now(),
        }
    }

    /// Records one redirect.
    pub fn record_click(&mut self) {
        self.clicks = self.clicks.saturating_add(1);
    }

    /// Read-only snapshot of the link's analytics.
    pub fn stats(&self) -> LinkStats {
        LinkStats {
            target: self.target.clone(),
            clicks: self.clicks,
            created_at: self.created_at,
        }
    }
}

/// Point-in-time view of a link, as returned by the stats endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkStats {
    pub target: String,
    pub clicks: u64,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_link_starts_at_zero_clicks() {
        let before = Utc::now();
        let link = ShortLink::new("https://example.com".to_string());

        assert_eq!(link.target, "https://example.com");
        assert_eq!(link.clicks, 0);
        assert!(link.created_at >= before);
    }

    #[test]
    fn test_record_click_increments_by_one() {
        let mut link = ShortLink::new("https://example.com".to_string());

        link.record_click();
        link.record_click();

        assert_eq!(link.clicks, 2);
    }

    #[test]
    fn test_stats_snapshot_is_detached() {
        let mut link = ShortLink::new("https://example.com".to_string());
        let snapshot = link.stats();

        link.record_click();

        assert_eq!(snapshot.clicks, 0);
        assert_eq!(snapshot.target, "https://example.com");
        assert_eq!(snapshot.created_at, link.created_at);
    }
}
