//! Search configuration: keywords, exclusion patterns, and registered
//! collections with their aggregates.
//!
//! All three term sets are ordered and duplicate-free. Duplicate adds and
//! missing removes are not errors; they produce a [`Notice`] the caller
//! surfaces to the user and carries on.

use indexmap::IndexMap;

use crate::core::aggregate::CollectionAggregate;

/// Which term set an operation touched, for notice wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TermKind {
    Keyword,
    Exclusion,
    Collection,
}

impl std::fmt::Display for TermKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TermKind::Keyword => write!(f, "keyword"),
            TermKind::Exclusion => write!(f, "skip word"),
            TermKind::Collection => write!(f, "collection"),
        }
    }
}

/// Non-fatal outcome of a term-set mutation; shown to the user, never raised.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum Notice {
    #[error("{kind} '{value}' is already in the list")]
    Duplicate { kind: TermKind, value: String },

    #[error("{kind} '{value}' is not in the list")]
    Missing { kind: TermKind, value: String },
}

/// The full search setup: what to look for, what to skip, where to look.
///
/// Owns one [`CollectionAggregate`] per registered collection, keyed by
/// collection name in registration order.
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    pub keywords: Vec<String>,
    pub exclusions: Vec<String>,
    pub collections: IndexMap<String, CollectionAggregate>,
}

impl SearchConfig {
    /// Build from startup term lists. Input lists are assumed already
    /// deduplicated by the loader; stray duplicates are dropped silently.
    pub fn from_terms(
        keywords: Vec<String>,
        exclusions: Vec<String>,
        collections: Vec<String>,
    ) -> Self {
        let mut cfg = Self::default();
        for keyword in keywords {
            let _ = cfg.add_keyword(&keyword);
        }
        for pattern in exclusions {
            let _ = cfg.add_exclusion(&pattern);
        }
        for name in collections {
            let _ = cfg.add_collection(&name);
        }
        cfg
    }

    pub fn add_keyword(&mut self, keyword: &str) -> Result<(), Notice> {
        add_unique(&mut self.keywords, keyword, TermKind::Keyword)
    }

    pub fn remove_keyword(&mut self, keyword: &str) -> Result<(), Notice> {
        remove_present(&mut self.keywords, keyword, TermKind::Keyword)
    }

    pub fn add_exclusion(&mut self, pattern: &str) -> Result<(), Notice> {
        add_unique(&mut self.exclusions, pattern, TermKind::Exclusion)
    }

    pub fn remove_exclusion(&mut self, pattern: &str) -> Result<(), Notice> {
        remove_present(&mut self.exclusions, pattern, TermKind::Exclusion)
    }

    /// Register a collection, creating its empty aggregate.
    pub fn add_collection(&mut self, name: &str) -> Result<(), Notice> {
        if self.collections.contains_key(name) {
            return Err(Notice::Duplicate {
                kind: TermKind::Collection,
                value: name.to_string(),
            });
        }
        self.collections
            .insert(name.to_string(), CollectionAggregate::new(name));
        Ok(())
    }

    /// Deregister a collection, destroying its aggregate.
    pub fn remove_collection(&mut self, name: &str) -> Result<(), Notice> {
        // shift_remove keeps the registration order of the rest.
        match self.collections.shift_remove(name) {
            Some(_) => Ok(()),
            None => Err(Notice::Missing {
                kind: TermKind::Collection,
                value: name.to_string(),
            }),
        }
    }

    /// Reset one collection's accumulated state without deregistering it.
    pub fn reset_collection(&mut self, name: &str) -> Result<(), Notice> {
        match self.collections.get_mut(name) {
            Some(agg) => {
                agg.clear();
                Ok(())
            }
            None => Err(Notice::Missing {
                kind: TermKind::Collection,
                value: name.to_string(),
            }),
        }
    }

    pub fn clear_keywords(&mut self) {
        self.keywords.clear();
    }

    pub fn clear_exclusions(&mut self) {
        self.exclusions.clear();
    }

    /// Drop every collection and its aggregate.
    pub fn clear_collections(&mut self) {
        self.collections = IndexMap::new();
    }

    pub fn aggregate(&self, name: &str) -> Option<&CollectionAggregate> {
        self.collections.get(name)
    }
}

fn add_unique(list: &mut Vec<String>, value: &str, kind: TermKind) -> Result<(), Notice> {
    if list.iter().any(|v| v == value) {
        return Err(Notice::Duplicate {
            kind,
            value: value.to_string(),
        });
    }
    list.push(value.to_string());
    Ok(())
}

fn remove_present(list: &mut Vec<String>, value: &str, kind: TermKind) -> Result<(), Notice> {
    match list.iter().position(|v| v == value) {
        Some(idx) => {
            list.remove(idx);
            Ok(())
        }
        None => Err(Notice::Missing {
            kind,
            value: value.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_add_is_a_notice_not_a_second_entry() {
        let mut cfg = SearchConfig::default();
        assert!(cfg.add_keyword("foo").is_ok());
        let notice = cfg.add_keyword("foo").unwrap_err();
        assert_eq!(
            notice,
            Notice::Duplicate {
                kind: TermKind::Keyword,
                value: "foo".to_string()
            }
        );
        assert_eq!(cfg.keywords, vec!["foo".to_string()]);
    }

    #[test]
    fn removing_a_missing_entry_is_a_notice() {
        let mut cfg = SearchConfig::default();
        let notice = cfg.remove_exclusion("nope").unwrap_err();
        assert!(matches!(notice, Notice::Missing { .. }));
    }

    #[test]
    fn registering_a_collection_creates_its_aggregate() {
        let mut cfg = SearchConfig::default();
        cfg.add_collection("rust").unwrap();
        assert!(cfg.aggregate("rust").is_some());
        assert!(cfg.add_collection("rust").is_err());

        cfg.remove_collection("rust").unwrap();
        assert!(cfg.aggregate("rust").is_none());
    }

    #[test]
    fn reset_clears_state_but_keeps_registration() {
        let mut cfg = SearchConfig::default();
        cfg.add_collection("rust").unwrap();
        cfg.collections.get_mut("rust").unwrap().count_word("hello");
        cfg.reset_collection("rust").unwrap();
        let agg = cfg.aggregate("rust").unwrap();
        assert_eq!(agg.distinct_words(), 0);
        assert!(cfg.reset_collection("absent").is_err());
    }

    #[test]
    fn from_terms_drops_stray_duplicates() {
        let cfg = SearchConfig::from_terms(
            vec!["a".into(), "b".into(), "a".into()],
            vec![],
            vec!["sub".into(), "sub".into()],
        );
        assert_eq!(cfg.keywords, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(cfg.collections.len(), 1);
    }

    #[test]
    fn notice_wording_names_the_term_kind() {
        let notice = Notice::Duplicate {
            kind: TermKind::Collection,
            value: "funny".to_string(),
        };
        assert_eq!(notice.to_string(), "collection 'funny' is already in the list");
    }
}
