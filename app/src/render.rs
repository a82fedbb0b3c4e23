use common::convert::convert;
use common::models::CoinRecord;

/// Format a percentage change for display: negative changes keep their sign,
/// non-negative changes gain a leading "+", both gain a "%".
pub fn format_change(change: &str) -> String {
    if change.contains('-') {
        format!("{}%", change)
    } else {
        format!("+{}%", change)
    }
}

/// One list row: coin name and its 24h change.
pub fn render_row(coin: &CoinRecord) -> String {
    format!("{:<24} {}", coin.name, format_change(&coin.change_24h))
}

/// Detail view for a single coin, with an optional conversion line for a
/// user-entered quantity.
pub fn render_detail(coin: &CoinRecord, quantity: Option<&str>) -> String {
    let mut out = format!(
        "{}\n{}\n${}\n{} (24h)\n{} (1h)",
        coin.name,
        coin.symbol,
        coin.price_usd,
        format_change(&coin.change_24h),
        format_change(&coin.change_1h),
    );

    if let Some(quantity) = quantity {
        out.push_str(&format!(
            "\n{} {} = {}",
            quantity,
            coin.symbol,
            convert(&coin.price_usd, quantity)
        ));
    }

    out
}

/// Shareable one-liner about a coin's day.
pub fn share_text(coin: &CoinRecord) -> String {
    if coin.change_24h.contains('-') {
        format!(
            "{} is down {}% today. Is it time to invest?!",
            coin.name,
            coin.change_24h.trim_start_matches('-')
        )
    } else {
        format!(
            "{} is up {}% today. Is it time to sell?!",
            coin.name, coin.change_24h
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bitcoin(change_24h: &str) -> CoinRecord {
        CoinRecord {
            symbol: "BTC".to_string(),
            name: "Bitcoin".to_string(),
            price_usd: "50000".to_string(),
            change_24h: change_24h.to_string(),
            change_1h: "0.3".to_string(),
        }
    }

    #[test]
    fn negative_changes_keep_their_sign() {
        assert_eq!(format_change("-2.5"), "-2.5%");
    }

    #[test]
    fn non_negative_changes_gain_a_plus() {
        assert_eq!(format_change("2.5"), "+2.5%");
        assert_eq!(format_change("0"), "+0%");
    }

    #[test]
    fn row_shows_name_and_daily_change() {
        let row = render_row(&bitcoin("-2.5"));
        assert!(row.starts_with("Bitcoin"));
        assert!(row.ends_with("-2.5%"));
    }

    #[test]
    fn detail_includes_price_and_both_changes() {
        let detail = render_detail(&bitcoin("-2.5"), None);
        assert!(detail.contains("$50000"));
        assert!(detail.contains("-2.5% (24h)"));
        assert!(detail.contains("+0.3% (1h)"));
    }

    #[test]
    fn detail_with_quantity_appends_the_conversion() {
        let detail = render_detail(&bitcoin("-2.5"), Some("2"));
        assert!(detail.ends_with("2 BTC = $100000.0"));
    }

    #[test]
    fn share_text_for_a_down_day() {
        assert_eq!(
            share_text(&bitcoin("-2.5")),
            "Bitcoin is down 2.5% today. Is it time to invest?!"
        );
    }

    #[test]
    fn share_text_for_an_up_day() {
        assert_eq!(
            share_text(&bitcoin("2.5")),
            "Bitcoin is up 2.5% today. Is it time to sell?!"
        );
    }
}
