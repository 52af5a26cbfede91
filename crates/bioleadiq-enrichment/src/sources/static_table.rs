//! Deterministic publication table used when live lookup is disabled.

use std::collections::HashMap;

use async_trait::async_trait;
use bioleadiq_common::ScientificIntentSignal;
use chrono::Datelike;

use super::ScientificIntentResolver;

/// A publication counts as recent if it is at most this many years old.
pub const RECENT_WINDOW_YEARS: i32 = 2;

/// Built-in table: (name, keyword_hits, last_publication_year).
const BUILTIN_PUBLICATIONS: &[(&str, u32, i32)] = &[
    ("Dr. Maya Chen", 3, 2024),
    ("Lucas Patel", 1, 2023),
    ("Amelia Rossi", 4, 2024),
    ("Ravi Narayanan", 0, 2022),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicationRecord {
    pub keyword_hits: u32,
    pub last_publication_year: i32,
}

pub struct StaticIntentResolver {
    table: HashMap<String, PublicationRecord>,
    current_year: i32,
}

impl StaticIntentResolver {
    /// Resolver over the given table, judging recency against `current_year`.
    pub fn new(table: HashMap<String, PublicationRecord>, current_year: i32) -> Self {
        Self { table, current_year }
    }

    /// Built-in table, with the current year captured now.
    pub fn builtin() -> Self {
        Self::builtin_at(chrono::Local::now().year())
    }

    pub fn builtin_at(current_year: i32) -> Self {
        let table = BUILTIN_PUBLICATIONS
            .iter()
            .map(|&(name, keyword_hits, last_publication_year)| {
                (name.to_string(), PublicationRecord { keyword_hits, last_publication_year })
            })
            .collect();
        Self::new(table, current_year)
    }

    fn lookup(&self, name: &str) -> ScientificIntentSignal {
        match self.table.get(name) {
            Some(record) => ScientificIntentSignal {
                keyword_hits: record.keyword_hits,
                recent_publication: self.current_year - record.last_publication_year <= RECENT_WINDOW_YEARS,
                used_live_lookup: false,
            },
            None => ScientificIntentSignal::none(false),
        }
    }
}

#[async_trait]
impl ScientificIntentResolver for StaticIntentResolver {
    async fn resolve(&self, name: &str) -> ScientificIntentSignal {
        self.lookup(name)
    }

    fn is_live(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unknown_name_is_zero_signal() {
        let resolver = StaticIntentResolver::builtin_at(2025);
        assert_eq!(resolver.lookup("Nobody"), ScientificIntentSignal::none(false));
    }

    #[test]
    fn test_recency_window() {
        let resolver = StaticIntentResolver::builtin_at(2025);
        // 2025 - 2023 = 2 -> recent
        let lucas = resolver.lookup("Lucas Patel");
        assert_eq!(lucas.keyword_hits, 1);
        assert!(lucas.recent_publication);
        // 2025 - 2022 = 3 -> not recent
        assert!(!resolver.lookup("Ravi Narayanan").recent_publication);
    }

    #[test]
    fn test_lookup_is_exact_name() {
        let resolver = StaticIntentResolver::builtin_at(2024);
        assert_eq!(resolver.lookup("Dr. Maya Chen").keyword_hits, 3);
        assert_eq!(resolver.lookup("maya chen").keyword_hits, 0);
    }

    #[test]
    fn test_custom_table() {
        let mut table = HashMap::new();
        table.insert("X".to_string(), PublicationRecord { keyword_hits: 7, last_publication_year: 2010 });
        let resolver = StaticIntentResolver::new(table, 2030);
        let signal = resolver.lookup("X");
        assert_eq!(signal.keyword_hits, 7);
        assert!(!signal.recent_publication);
        assert!(!signal.used_live_lookup);
    }
}
