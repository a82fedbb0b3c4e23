use connectors::coinlore::parse_tickers;
use registry::CoinRegistry;

#[test]
fn parsed_payload_flows_through_the_registry() {
    let payload = r#"{"data":[{"symbol":"BTC","name":"Bitcoin","price_usd":"50000","percent_change_24h":"-2.5","percent_change_1h":"0.3"}]}"#;

    let coins = parse_tickers(payload).unwrap();
    assert_eq!(coins.len(), 1);

    let mut registry = CoinRegistry::new();
    registry.load(coins);

    let matched = registry.apply_query("bit");
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].symbol, "BTC");
    assert_eq!(matched[0].price_usd, "50000");

    assert!(registry.apply_query("eth").is_empty());
}
