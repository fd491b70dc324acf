//! Upstream feed collaborator.
//!
//! The engine never talks to a service directly; it is handed something that
//! implements [`Feed`] and treats the result purely as an iterator of
//! (title, id) items. Pagination, authentication, and the upstream's
//! mandatory inter-call delay all live behind this seam.
//!
//! Two implementations ship with the crate: [`DirFeed`] reads JSONL fixtures
//! from a feed directory (the CLI's stand-in for the real service), and
//! [`MemoryFeed`] holds items in memory for tests and embedding.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::debug;

/// One feed entry: a post title and its item identifier.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FeedItem {
    pub title: String,
    pub id: String,
}

impl FeedItem {
    pub fn new(title: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            id: id.into(),
        }
    }
}

/// Retrieval ordering offered by the upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeedOrder {
    /// Recency-ordered ("hot").
    Hot,
    /// All-time ordering ("top").
    Top,
}

impl FeedOrder {
    fn file_name(self) -> &'static str {
        match self {
            FeedOrder::Hot => "hot.jsonl",
            FeedOrder::Top => "top.jsonl",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("collection '{collection}' has no feed data")]
    NotFound { collection: String },

    #[error("reading feed file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed feed entry for collection '{collection}' at line {line}")]
    Malformed {
        collection: String,
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Items come back one `Result` at a time so a mid-stream upstream failure
/// aborts only the collection being scanned.
pub type FeedStream = Box<dyn Iterator<Item = Result<FeedItem, FeedError>>>;

/// A source of titled items per named collection.
pub trait Feed {
    /// Fetch the lazy finite item sequence for one collection in the given
    /// ordering. A missing collection is an upstream failure.
    fn fetch(&self, collection: &str, order: FeedOrder) -> Result<FeedStream, FeedError>;
}

/// Feed backed by a directory of JSONL files:
/// `<root>/<collection>/{hot,top}.jsonl`, one `{"title": …, "id": …}` per line.
#[derive(Debug, Clone)]
pub struct DirFeed {
    root: PathBuf,
}

impl DirFeed {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl Feed for DirFeed {
    fn fetch(&self, collection: &str, order: FeedOrder) -> Result<FeedStream, FeedError> {
        let path = self.root.join(collection).join(order.file_name());
        debug!(collection, path = %path.display(), "fetching feed file");

        if !path.exists() {
            return Err(FeedError::NotFound {
                collection: collection.to_string(),
            });
        }

        let content = std::fs::read_to_string(&path).map_err(|source| FeedError::Io {
            path: path.clone(),
            source,
        })?;

        let collection = collection.to_string();
        let lines: Vec<String> = content.lines().map(str::to_string).collect();
        Ok(Box::new(lines.into_iter().enumerate().filter_map(
            move |(idx, line)| {
                if line.trim().is_empty() {
                    return None;
                }
                Some(
                    serde_json::from_str::<FeedItem>(&line).map_err(|source| {
                        FeedError::Malformed {
                            collection: collection.clone(),
                            line: idx + 1,
                            source,
                        }
                    }),
                )
            },
        )))
    }
}

/// In-memory feed, the substitution vehicle for tests and embedders.
#[derive(Debug, Clone, Default)]
pub struct MemoryFeed {
    items: IndexMap<(String, FeedOrder), Vec<FeedItem>>,
}

impl MemoryFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the item sequence served for one collection and ordering.
    pub fn insert(
        &mut self,
        collection: impl Into<String>,
        order: FeedOrder,
        items: Vec<FeedItem>,
    ) {
        self.items.insert((collection.into(), order), items);
    }

    /// Convenience: serve the same items for both orderings.
    pub fn insert_both(&mut self, collection: &str, items: Vec<FeedItem>) {
        self.insert(collection, FeedOrder::Hot, items.clone());
        self.insert(collection, FeedOrder::Top, items);
    }
}

impl Feed for MemoryFeed {
    fn fetch(&self, collection: &str, order: FeedOrder) -> Result<FeedStream, FeedError> {
        match self.items.get(&(collection.to_string(), order)) {
            Some(items) => Ok(Box::new(items.clone().into_iter().map(Ok))),
            None => Err(FeedError::NotFound {
                collection: collection.to_string(),
            }),
        }
    }
}

/// Helper for callers that need the whole sequence at once.
pub fn collect_items(
    feed: &dyn Feed,
    collection: &str,
    order: FeedOrder,
) -> Result<Vec<FeedItem>, FeedError> {
    feed.fetch(collection, order)?.collect()
}
