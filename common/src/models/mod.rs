mod coin;

pub use coin::{CoinList, CoinRecord};
