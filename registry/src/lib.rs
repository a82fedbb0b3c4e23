mod coin_registry;

pub use coin_registry::CoinRegistry;
