use common::models::{CoinList, CoinRecord};
use tracing::debug;

/// Holds the coin list from the last successful load plus the view currently
/// shown to the consumer.
///
/// The canonical list is immutable between loads. Every query is evaluated
/// against it from scratch, never against the previous filtered view, so
/// shortening a query recovers rows a longer query had dropped.
pub struct CoinRegistry {
    canonical: CoinList,
    current: CoinList,
}

impl CoinRegistry {
    pub fn new() -> Self {
        Self {
            canonical: Vec::new(),
            current: Vec::new(),
        }
    }

    /// Replace the canonical list with `list`, as on a fresh fetch or a
    /// refresh. The current view resets to the full list.
    pub fn load(&mut self, list: CoinList) {
        debug!("Loading {} coins into the registry", list.len());
        self.current = list.clone();
        self.canonical = list;
    }

    /// Filter the canonical list by a case-insensitive substring match on the
    /// coin name and make the result the current view.
    ///
    /// A query that is empty after trimming restores the full canonical list.
    /// Symbols are not searched; a query with no matches yields an empty view,
    /// not an error.
    pub fn apply_query(&mut self, query: &str) -> &[CoinRecord] {
        let query = query.trim();

        if query.is_empty() {
            self.current = self.canonical.clone();
        } else {
            let needle = query.to_lowercase();
            self.current = self
                .canonical
                .iter()
                .filter(|coin| coin.name.to_lowercase().contains(&needle))
                .cloned()
                .collect();
            debug!("Query {:?} matched {} coins", query, self.current.len());
        }

        &self.current
    }

    pub fn current(&self) -> &[CoinRecord] {
        &self.current
    }

    pub fn canonical(&self) -> &[CoinRecord] {
        &self.canonical
    }
}

impl Default for CoinRegistry {
    fn default() -> Self {
        Self::new()
    }
}
