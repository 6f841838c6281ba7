//! In-process session registry.
//!
//! Tokens are stateless JWTs, but logout has to mean something: a token is
//! only honored while its `jti` is present here. Entries expire together
//! with the token itself.

use moka::sync::Cache;
use std::time::Duration;

#[derive(Clone)]
pub struct SessionCache {
    // jti -> subject (admin username)
    entries: Cache<String, String>,
}

impl std::fmt::Debug for SessionCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionCache").field("entries", &self.entries.entry_count()).finish()
    }
}

impl SessionCache {
    #[must_use]
    pub fn new(capacity: u64, ttl: Duration) -> Self {
        let entries = Cache::builder().max_capacity(capacity).time_to_live(ttl).build();
        Self { entries }
    }

    /// Registers a freshly issued session.
    pub fn insert(&self, jti: impl Into<String>, subject: impl Into<String>) {
        self.entries.insert(jti.into(), subject.into());
    }

    /// Returns whether the session is still active.
    #[must_use]
    pub fn contains(&self, jti: &str) -> bool {
        self.entries.get(jti).is_some()
    }

    /// Removes a session (logout); unknown ids are a no-op.
    pub fn invalidate(&self, jti: &str) {
        self.entries.invalidate(jti);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_contains_invalidate() {
        let sessions = SessionCache::new(16, Duration::from_secs(60));

        sessions.insert("jti-1", "admin");
        assert!(sessions.contains("jti-1"));
        assert!(!sessions.contains("jti-2"));

        sessions.invalidate("jti-1");
        assert!(!sessions.contains("jti-1"));

        // Invalidating an unknown session is harmless.
        sessions.invalidate("jti-404");
    }

    #[test]
    fn entries_expire_with_the_token() {
        let sessions = SessionCache::new(16, Duration::from_millis(10));
        sessions.insert("jti-1", "admin");

        std::thread::sleep(Duration::from_millis(30));
        assert!(!sessions.contains("jti-1"));
    }
}
