use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use serde::{Deserialize, Serialize};

/// A single promotional offer.
///
/// `price` and `expiration_date` are carried verbatim from the source file;
/// nothing in the service parses them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Promotion {
    pub id: String,
    pub price: String,
    pub expiration_date: String,
}

/// Internal HashMap type.
pub type InnerMap = HashMap<String, Promotion>;

/// Shared promotion store.
///
/// Cloning is cheap and every clone points at the same map. Writers take the
/// lock exclusively, readers share it, and the lock is never held across an
/// `.await` or any I/O.
#[derive(Debug, Clone, Default)]
pub struct PromotionStore {
    inner: Arc<RwLock<InnerMap>>,
}

impl PromotionStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the promotion stored under `promotion.id`.
    pub fn put(&self, promotion: Promotion) {
        // A poisoned lock still holds whole values: inserts never leave a
        // half-built promotion behind.
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.insert(promotion.id.clone(), promotion);
    }

    /// Look up a promotion by id.
    pub fn get(&self, id: &str) -> Option<Promotion> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.get(id).cloned()
    }

    /// Number of stored promotions.
    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn promo(id: &str, price: &str, expiration_date: &str) -> Promotion {
        Promotion {
            id: id.to_string(),
            price: price.to_string(),
            expiration_date: expiration_date.to_string(),
        }
    }

    #[test]
    fn last_write_wins() {
        let store = PromotionStore::new();
        store.put(promo("A", "5", "2025-01-01"));
        store.put(promo("A", "7", "2025-02-01"));

        assert_eq!(store.get("A"), Some(promo("A", "7", "2025-02-01")));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn unknown_id_is_absent() {
        let store = PromotionStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("missing"), None);

        store.put(promo("A", "5", "2025-01-01"));
        assert_eq!(store.get("a"), None);
        assert_eq!(store.get(""), None);
    }

    #[test]
    fn empty_id_is_a_literal_key() {
        let store = PromotionStore::new();
        store.put(promo("", "1", "x"));
        assert_eq!(store.get(""), Some(promo("", "1", "x")));
    }

    #[test]
    fn clones_share_the_same_map() {
        let store = PromotionStore::new();
        let other = store.clone();
        other.put(promo("B", "3", "2030-01-01"));
        assert_eq!(store.get("B"), Some(promo("B", "3", "2030-01-01")));
    }

    #[test]
    fn concurrent_puts_then_gets_on_distinct_keys() {
        let store = PromotionStore::new();

        thread::scope(|s| {
            for t in 0..8 {
                let store = &store;
                s.spawn(move || {
                    for i in 0..250 {
                        let id = format!("{t}-{i}");
                        store.put(promo(&id, &format!("p{id}"), &format!("d{id}")));
                    }
                });
            }
        });

        assert_eq!(store.len(), 8 * 250);

        thread::scope(|s| {
            for t in 0..8 {
                let store = &store;
                s.spawn(move || {
                    for i in 0..250 {
                        let id = format!("{t}-{i}");
                        let got = store.get(&id).expect("inserted id must be present");
                        assert_eq!(got, promo(&id, &format!("p{id}"), &format!("d{id}")));
                    }
                });
            }
        });
    }

    #[test]
    fn readers_never_see_a_torn_promotion() {
        let store = PromotionStore::new();
        let old = promo("X", "1.00", "2025-01-01");
        let new = promo("X", "2.00", "2026-01-01");
        store.put(old.clone());

        thread::scope(|s| {
            let writer_store = &store;
            let (a, b) = (&old, &new);
            s.spawn(move || {
                for i in 0..2_000 {
                    writer_store.put(if i % 2 == 0 { b.clone() } else { a.clone() });
                }
            });

            for _ in 0..4 {
                let store = &store;
                let (a, b) = (&old, &new);
                s.spawn(move || {
                    for _ in 0..2_000 {
                        let got = store.get("X").expect("X is never removed");
                        assert!(got == *a || got == *b, "torn read: {got:?}");
                    }
                });
            }
        });
    }
}
