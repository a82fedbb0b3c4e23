pub mod coinlore;
mod single_flight;

use async_trait::async_trait;
use common::{models::CoinList, Result};

pub use single_flight::FetchSlot;

/// Trait defining the interface for upstream ticker providers
#[async_trait]
pub trait TickerSource: Send + Sync {
    /// Fetch the full ticker list and parse it into coin records
    async fn fetch_tickers(&self) -> Result<CoinList>;
}
