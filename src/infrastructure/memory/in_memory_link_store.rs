//! Mutex-guarded in-memory link store.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::{Mutex, MutexGuard, PoisonError};

use serde_json::json;
use tracing::{debug, warn};

use crate::domain::entities::{LinkStats, ShortLink};
use crate::domain::repositories::LinkStore;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Default bound on code-generation attempts per insert.
pub const DEFAULT_MAX_ATTEMPTS: usize = 16;

type CodeGenerator = Box<dyn Fn() -> String + Send + Sync>;

/// In-memory [`LinkStore`] backed by a single `HashMap`.
///
/// Every operation, including the collision-retry loop of [`LinkStore::add`],
/// runs under one exclusive lock, so all operations are serialized.
/// Contents are lost on restart.
pub struct InMemoryLinkStore {
    links: Mutex<HashMap<String, ShortLink>>,
    generator: CodeGenerator,
    max_attempts: usize,
}

impl InMemoryLinkStore {
    /// Creates an empty store using random 6-character codes.
    pub fn new(max_attempts: usize) -> Self {
        Self::with_generator(max_attempts, generate_code)
    }

    /// Creates an empty store with a custom code generator.
    pub fn with_generator<F>(max_attempts: usize, generator: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self {
            links: Mutex::new(HashMap::new()),
            generator: Box::new(generator),
            max_attempts: max_attempts.max(1),
        }
    }

    // A panic while holding the lock cannot leave a half-written entry:
    // each mutation is a single insert or counter bump.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, ShortLink>> {
        self.links.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryLinkStore {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ATTEMPTS)
    }
}

impl LinkStore for InMemoryLinkStore {
    fn add(&self, target: String) -> Result<String, AppError> {
        let mut links = self.lock();

        for attempt in 1..=self.max_attempts {
            let code = (self.generator)();

            match links.entry(code) {
                Entry::Occupied(entry) => {
                    debug!(code = %entry.key(), attempt, "Short code collision, retrying");
                }
                Entry::Vacant(entry) => {
                    let code = entry.key().clone();
                    entry.insert(ShortLink::new(target));
                    return Ok(code);
                }
            }
        }

        warn!(
            attempts = self.max_attempts,
            stored = links.len(),
            "Failed to allocate a free short code"
        );

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "reason": "Short code space exhausted", "attempts": self.max_attempts }),
        ))
    }

    fn resolve(&self, code: &str) -> Option<String> {
        let mut links = self.lock();
        let link = links.get_mut(code)?;
        link.record_click();
        Some(link.target.clone())
    }

    fn stats(&self, code: &str) -> Option<LinkStats> {
        self.lock().get(code).map(ShortLink::stats)
    }

    fn contains(&self, code: &str) -> bool {
        self.lock().contains_key(code)
    }

    fn count(&self) -> usize {
        self.lock().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    #[test]
    fn test_add_returns_six_char_code() {
        let store = InMemoryLinkStore::default();
        let code = store.add("https://example.com".to_string()).unwrap();

        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        assert!(store.contains(&code));
    }

    #[test]
    fn test_new_link_has_zero_clicks() {
        let store = InMemoryLinkStore::default();
        let code = store.add("https://example.com".to_string()).unwrap();

        let stats = store.stats(&code).unwrap();
        assert_eq!(stats.clicks, 0);
        assert_eq!(stats.target, "https://example.com");
    }

    #[test]
    fn test_resolve_counts_each_call() {
        let store = InMemoryLinkStore::default();
        let code = store.add("https://example.com".to_string()).unwrap();

        for _ in 0..5 {
            assert_eq!(store.resolve(&code).as_deref(), Some("https://example.com"));
        }

        assert_eq!(store.stats(&code).unwrap().clicks, 5);
    }

    #[test]
    fn test_stats_does_not_count_clicks() {
        let store = InMemoryLinkStore::default();
        let code = store.add("https://example.com".to_string()).unwrap();
        store.resolve(&code);

        let first = store.stats(&code).unwrap();
        let second = store.stats(&code).unwrap();

        assert_eq!(first, second);
        assert_eq!(second.clicks, 1);
    }

    #[test]
    fn test_unknown_code_is_absent() {
        let store = InMemoryLinkStore::default();

        assert!(store.resolve("nope00").is_none());
        assert!(store.stats("nope00").is_none());
        assert!(!store.contains("nope00"));
    }

    #[test]
    fn test_collision_retries_until_free_code() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let sequence = ["aaaaaa", "aaaaaa", "aaaaaa", "bbbbbb"];

        let store = InMemoryLinkStore::with_generator(10, move || {
            let i = counter.fetch_add(1, Ordering::SeqCst);
            sequence[i.min(sequence.len() - 1)].to_string()
        });

        let first = store.add("https://one.example.com".to_string()).unwrap();
        let second = store.add("https://two.example.com".to_string()).unwrap();

        assert_eq!(first, "aaaaaa");
        assert_eq!(second, "bbbbbb");
        assert_eq!(calls.load(Ordering::SeqCst), 4);
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn test_exhausted_attempts_return_error() {
        let store = InMemoryLinkStore::with_generator(3, || "zzzzzz".to_string());

        store.add("https://one.example.com".to_string()).unwrap();
        let result = store.add("https://two.example.com".to_string());

        assert!(matches!(result, Err(AppError::Internal { .. })));
        assert_eq!(store.count(), 1);
    }

    #[test]
    fn test_existing_target_not_overwritten_on_collision() {
        let store = InMemoryLinkStore::with_generator(2, || "zzzzzz".to_string());

        store.add("https://one.example.com".to_string()).unwrap();
        let _ = store.add("https://two.example.com".to_string());

        assert_eq!(
            store.stats("zzzzzz").unwrap().target,
            "https://one.example.com"
        );
    }

    #[test]
    fn test_concurrent_resolves_are_all_counted() {
        let store = Arc::new(InMemoryLinkStore::default());
        let code = store.add("https://example.com".to_string()).unwrap();

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                let code = code.clone();
                thread::spawn(move || {
                    for _ in 0..100 {
                        store.resolve(&code);
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.stats(&code).unwrap().clicks, 800);
    }

    #[test]
    fn test_concurrent_adds_yield_distinct_codes() {
        let store = Arc::new(InMemoryLinkStore::default());

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let store = store.clone();
                thread::spawn(move || {
                    (0..250)
                        .map(|i| store.add(format!("https://example.com/{t}/{i}")).unwrap())
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut codes = std::collections::HashSet::new();
        for handle in handles {
            codes.extend(handle.join().unwrap());
        }

        assert_eq!(codes.len(), 1000);
        assert_eq!(store.count(), 1000);
    }
}
