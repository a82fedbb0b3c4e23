use serde::{Deserialize, Serialize};

/// One cryptocurrency as reported by the upstream ticker API.
///
/// Price and percentage-change fields are kept as the exact decimal text the
/// API sent. They are round-tripped verbatim into display strings, so parsing
/// them into floats here would only introduce rounding artifacts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct CoinRecord {
    /// Ticker symbol (e.g., "BTC", "ETH")
    pub symbol: String,
    /// Human-readable name (e.g., "Bitcoin", "Ethereum")
    pub name: String,
    /// Current price in USD, decimal text
    pub price_usd: String,
    /// 24h percentage change, signed decimal text without a trailing "%"
    pub change_24h: String,
    /// 1h percentage change, signed decimal text without a trailing "%"
    pub change_1h: String,
}

/// Ordered list of coins, in upstream response order. No sorting, no
/// de-duplication by symbol.
pub type CoinList = Vec<CoinRecord>;
