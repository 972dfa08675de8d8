//! In-memory table
//!
//! The repository primitive behind every collection: an owned map keyed by
//! id. Listing is deterministic (creation time, then id) so repeated reads
//! over the same data return identical sequences.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

/// Row stored in a [`Table`]
pub trait Entity {
    fn id(&self) -> &str;
    fn created_at(&self) -> DateTime<Utc>;
}

/// Id-keyed in-memory collection
#[derive(Debug, Clone)]
pub struct Table<T> {
    rows: HashMap<String, T>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }
}

impl<T: Entity + Clone> Table<T> {
    pub fn new() -> Self {
        Self {
            rows: HashMap::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rows.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<&T> {
        self.rows.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut T> {
        self.rows.get_mut(id)
    }

    /// Insert a row under its own id, replacing any previous row
    pub fn insert(&mut self, row: T) {
        self.rows.insert(row.id().to_string(), row);
    }

    pub fn remove(&mut self, id: &str) -> Option<T> {
        self.rows.remove(id)
    }

    /// Unordered row iterator (counting, filtering)
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.rows.values()
    }

    /// Unordered mutable row iterator (propagation fan-out)
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.rows.values_mut()
    }

    /// Cloned rows ordered by creation time, then id
    pub fn list(&self) -> Vec<T> {
        let mut rows: Vec<T> = self.rows.values().cloned().collect();
        rows.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().cmp(b.id()))
        });
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        created_at: DateTime<Utc>,
    }

    impl Entity for Row {
        fn id(&self) -> &str {
            &self.id
        }
        fn created_at(&self) -> DateTime<Utc> {
            self.created_at
        }
    }

    fn row(id: &str, secs: i64) -> Row {
        Row {
            id: id.to_string(),
            created_at: Utc.timestamp_opt(secs, 0).unwrap(),
        }
    }

    #[test]
    fn test_crud() {
        let mut table = Table::new();
        table.insert(row("a", 1));
        assert!(table.contains("a"));
        assert_eq!(table.len(), 1);

        table.get_mut("a").unwrap().created_at = Utc.timestamp_opt(5, 0).unwrap();
        assert_eq!(table.get("a").unwrap().created_at.timestamp(), 5);

        assert!(table.remove("a").is_some());
        assert!(table.is_empty());
        assert!(table.remove("a").is_none());
    }

    #[test]
    fn test_list_is_deterministic() {
        let mut table = Table::new();
        table.insert(row("b", 2));
        table.insert(row("c", 1));
        table.insert(row("a", 2));

        let rows = table.list();
        let ids: Vec<&str> = rows.iter().map(|r| r.id.as_str()).collect();
        // ordered by created_at, ties broken by id
        assert_eq!(ids, vec!["c", "a", "b"]);
        assert_eq!(table.list(), table.list());
    }
}
