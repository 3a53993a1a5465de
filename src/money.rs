use rust_decimal::Decimal;

const CENTS: u32 = 2;

/// Renders an amount as `$#,##0.00`, rounding half to even at the cent.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp(CENTS);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    format!("{}${}.{}", sign, grouped, cents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_small_amounts() {
        assert_eq!("$0.00", format_currency(dec!(0)));
        assert_eq!("$5.00", format_currency(dec!(5)));
        assert_eq!("$999.90", format_currency(dec!(999.9)));
    }

    #[test]
    fn test_thousands_separators() {
        assert_eq!("$1,000.00", format_currency(dec!(1000)));
        assert_eq!("$12,345.67", format_currency(dec!(12345.67)));
        assert_eq!("$1,234,567.89", format_currency(dec!(1234567.891)));
    }

    #[test]
    fn test_half_even_rounding() {
        assert_eq!("$987.83", format_currency(dec!(987.8325)));
        assert_eq!("$0.12", format_currency(dec!(0.125)));
        assert_eq!("$0.14", format_currency(dec!(0.135)));
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!("-$1,234.50", format_currency(dec!(-1234.5)));
        assert_eq!("$0.00", format_currency(dec!(-0.001)));
    }
}
