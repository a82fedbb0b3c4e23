use tracing::debug;

/// Convert a quantity of coins into a display dollar amount.
///
/// Both operands arrive as user/API text. An operand that does not parse as a
/// decimal number is silently treated as `0.0` — this mirrors the legacy
/// client, where a bad keystroke in the quantity box produced `$0.0` rather
/// than an error. The substitution is deliberate and covered by tests; callers
/// that want to surface bad input should validate before calling.
///
/// Formatting: whole-number results keep one trailing decimal (`$201.0`),
/// fractional results use the shortest text that round-trips (`$2.25`).
pub fn convert(price_usd: &str, quantity: &str) -> String {
    let price = parse_or_zero(price_usd);
    let quantity = parse_or_zero(quantity);
    format!("${}", format_amount(price * quantity))
}

fn parse_or_zero(text: &str) -> f64 {
    match text.trim().parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            debug!("could not parse {:?} as a decimal, substituting 0.0", text);
            0.0
        }
    }
}

fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn multiplies_price_by_quantity() {
        assert_eq!(convert("100.5", "2"), "$201.0");
    }

    #[test]
    fn fractional_results_keep_their_precision() {
        assert_eq!(convert("1.5", "1.5"), "$2.25");
    }

    #[test]
    fn malformed_price_is_treated_as_zero() {
        assert_eq!(convert("abc", "2"), "$0.0");
    }

    #[test]
    fn malformed_quantity_is_treated_as_zero() {
        assert_eq!(convert("50000", ""), "$0.0");
        assert_eq!(convert("50000", "2x"), "$0.0");
    }

    #[test]
    fn whitespace_around_operands_is_ignored() {
        assert_eq!(convert(" 100.5 ", " 2 "), "$201.0");
    }

    #[test]
    fn whole_results_keep_a_trailing_decimal() {
        assert_eq!(convert("50000", "1"), "$50000.0");
    }
}
