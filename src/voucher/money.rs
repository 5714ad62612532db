//! Brazilian-real input masking for the amount field.
//!
//! The field is treated as a stream of digits whose last two are cents, so
//! typing `1`, `5`, `0`, `0`, `0` reads `R$ 0,01` … `R$ 150,00`.

use rust_decimal::{Decimal, RoundingStrategy};

pub const CURRENCY_PREFIX: &str = "R$ ";

/// Longest digit run the mask keeps; later keystrokes are ignored
const MAX_DIGITS: usize = 15;

/// Re-mask the amount field after a keystroke.
pub fn mask(raw: &str) -> String {
    format_brl(masked_value(raw))
}

/// Like [`mask`], also moving the cursor so the same number of digits stays to its right.
///
/// `cursor` and the returned position are character offsets.
pub fn mask_with_cursor(raw: &str, cursor: usize) -> (String, usize) {
    let digits_after = raw
        .chars()
        .skip(cursor)
        .filter(char::is_ascii_digit)
        .count();
    let masked = mask(raw);

    let chars: Vec<char> = masked.chars().collect();
    let mut remaining = digits_after;
    let mut position = chars.len();
    while remaining > 0 && position > 0 {
        position -= 1;
        if chars[position].is_ascii_digit() {
            remaining -= 1;
        }
    }

    (masked, position)
}

/// Numeric value the mask would display for `raw`
pub fn masked_value(raw: &str) -> Decimal {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let significant: String = digits
        .trim_start_matches('0')
        .chars()
        .take(MAX_DIGITS)
        .collect();

    // at most MAX_DIGITS ascii digits, always fits an i64
    let cents = significant.parse::<i64>().unwrap_or(0);
    Decimal::new(cents, 2)
}

/// `R$ 1.234,56` style display of an amount
pub fn format_brl(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}{CURRENCY_PREFIX}{grouped},{cents}")
}

/// Parse an amount typed as `150.00`, `150,00` or a masked `R$ 1.234,56`.
///
/// When both `.` and `,` appear, the one that comes last is the decimal
/// separator and the other groups thousands (`1.234,56` and `1,234.56`). A
/// lone comma is decimal. Returns `None` when the text is not a decimal
/// number at all.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let cleaned: String = input
        .trim()
        .trim_start_matches("R$")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if cleaned.is_empty() {
        return None;
    }

    let normalized = match (cleaned.rfind(','), cleaned.rfind('.')) {
        (Some(comma), Some(dot)) if dot > comma => cleaned.replace(',', ""),
        (Some(_), Some(_)) => cleaned.replace('.', "").replace(',', "."),
        (Some(_), None) => cleaned.replace(',', "."),
        _ => cleaned,
    };
    normalized.parse::<Decimal>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn digits_are_read_as_cents() {
        assert_eq!(mask(""), "R$ 0,00");
        assert_eq!(mask("1"), "R$ 0,01");
        assert_eq!(mask("15"), "R$ 0,15");
        assert_eq!(mask("15000"), "R$ 150,00");
        assert_eq!(mask("123456789"), "R$ 1.234.567,89");
    }

    #[test]
    fn non_digits_are_stripped() {
        assert_eq!(mask("abc1x2.3"), "R$ 1,23");
        assert_eq!(masked_value("R$ 1.234,56"), dec!(1234.56));
    }

    #[test]
    fn keystroke_on_masked_text() {
        // user types "7" after "R$ 150,00"
        assert_eq!(mask("R$ 150,007"), "R$ 1.500,07");
        // user deletes the last digit
        assert_eq!(mask("R$ 150,0"), "R$ 15,00");
    }

    #[test]
    fn masking_is_idempotent() {
        for raw in ["", "7", "15000", "00042", "987654321", "R$ 12,34x"] {
            let once = mask(raw);
            let twice = mask(&once);
            assert_eq!(once, twice, "raw input {raw:?}");
            assert_eq!(masked_value(raw), masked_value(&once));
        }
    }

    #[test]
    fn excess_digits_are_ignored() {
        let long = "1234567890123456789";
        assert_eq!(masked_value(long), dec!(1234567890123.45));
    }

    #[test]
    fn cursor_keeps_trailing_digit_count() {
        // cursor after "R$ 19" leaves three digits to its right
        let (masked, cursor) = mask_with_cursor("R$ 192,34", 5);
        assert_eq!(masked, "R$ 192,34");
        assert_eq!(cursor, 5);

        // typing at the end keeps the cursor at the end
        let (masked, cursor) = mask_with_cursor("R$ 1,235", 8);
        assert_eq!(masked, "R$ 12,35");
        assert_eq!(cursor, masked.chars().count());

        // inserting a digit that grows the thousands group
        let (masked, cursor) = mask_with_cursor("R$ 9999,99", 4);
        assert_eq!(masked, "R$ 9.999,99");
        assert_eq!(&masked[cursor..], "999,99");
    }

    #[test]
    fn formats_brazilian_real() {
        assert_eq!(format_brl(dec!(150)), "R$ 150,00");
        assert_eq!(format_brl(dec!(0.5)), "R$ 0,50");
        assert_eq!(format_brl(dec!(1000000)), "R$ 1.000.000,00");
        assert_eq!(format_brl(dec!(12.345)), "R$ 12,35");
        assert_eq!(format_brl(dec!(0.125)), "R$ 0,13");
    }

    #[test]
    fn parses_typed_amounts() {
        assert_eq!(parse_amount("150.00"), Some(dec!(150.00)));
        assert_eq!(parse_amount("150,00"), Some(dec!(150.00)));
        assert_eq!(parse_amount("R$ 1.234,56"), Some(dec!(1234.56)));
        assert_eq!(parse_amount(" 42 "), Some(dec!(42)));
        assert_eq!(parse_amount("1.234,56"), Some(dec!(1234.56)));
        assert_eq!(parse_amount("1,234.56"), Some(dec!(1234.56)));
        assert_eq!(parse_amount("1,234,567.89"), Some(dec!(1234567.89)));
        assert_eq!(parse_amount("1,2,3"), None);
        assert_eq!(parse_amount("-3"), Some(dec!(-3)));
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount(""), None);
    }
}
