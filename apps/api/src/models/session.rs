use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

/// An authenticated admin session: an opaque bearer token plus its expiry.
///
/// Handlers receive a validated session via the `AdminSession` extractor or a
/// 401; there is no process-global "logged in" flag.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: Uuid,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    pub fn issue(ttl_minutes: i64) -> Self {
        Session {
            token: Uuid::new_v4(),
            expires_at: Utc::now() + Duration::minutes(ttl_minutes),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}
