//! Display helpers for account keys and balance amounts

use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

pub const DEFAULT_START_CHARS: usize = 4;
pub const DEFAULT_END_CHARS: usize = 4;
pub const DEFAULT_DECIMALS: u32 = 2;

/// Returned for any amount that cannot be formatted, whatever precision was asked for.
pub const BALANCE_FALLBACK: &str = "0.00";

const SEPARATOR: &str = "...";
const MAX_DECIMALS: u32 = 100;
// Above this magnitude fixed notation switches to exponent form.
const EXPONENT_THRESHOLD: f64 = 1e21;

fn exponent_threshold() -> Decimal {
    Decimal::from_i128_with_scale(1_000_000_000_000_000_000_000, 0)
}

/// Shorten `identity` to its first `start_chars` and last `end_chars` characters.
///
/// Identities shorter than `start_chars + end_chars` (and the empty string)
/// come back unchanged.
pub fn abbreviate_identity(identity: &str, start_chars: usize, end_chars: usize) -> String {
    let len = identity.chars().count();
    if identity.is_empty() || len < start_chars.saturating_add(end_chars) {
        return identity.to_string();
    }

    let head: String = identity.chars().take(start_chars).collect();
    let tail: String = identity.chars().skip(len - end_chars).collect();
    format!("{}{}{}", head, SEPARATOR, tail)
}

/// `abbreviate_identity` with the default 4/4 split.
pub fn abbreviate_key(identity: &str) -> String {
    abbreviate_identity(identity, DEFAULT_START_CHARS, DEFAULT_END_CHARS)
}

/// Format a decimal balance string with exactly `decimals` fraction digits.
///
/// Parsing is lenient: leading whitespace is skipped and anything after the
/// longest numeric prefix is ignored. Ties round away from zero. Input with
/// no numeric prefix, or a precision above 100, yields [`BALANCE_FALLBACK`].
pub fn format_balance_amount(balance: &str, decimals: u32) -> String {
    if decimals > MAX_DECIMALS {
        return BALANCE_FALLBACK.to_string();
    }

    match parse_float_prefix(balance) {
        Some(Number::Infinite { negative }) => infinity(negative),
        Some(Number::Finite(literal)) => match literal_to_decimal(literal) {
            Some(value) if value.abs() < exponent_threshold() => {
                to_fixed(value, decimals)
            }
            _ => format_f64(literal, decimals),
        },
        None => BALANCE_FALLBACK.to_string(),
    }
}

/// `format_balance_amount` with two fraction digits.
pub fn format_balance(balance: &str) -> String {
    format_balance_amount(balance, DEFAULT_DECIMALS)
}

/// Dashboard-style currency: `$1.2M`, `$3.4K`, `$12`.
pub fn format_compact_currency(amount: Decimal) -> String {
    let million = Decimal::from(1_000_000);
    let thousand = Decimal::from(1_000);

    if amount >= million {
        format!("${}M", to_fixed(amount / million, 1))
    } else if amount >= thousand {
        format!("${}K", to_fixed(amount / thousand, 1))
    } else {
        format!("${}", to_fixed(amount, 0))
    }
}

enum Number<'a> {
    Finite(&'a str),
    Infinite { negative: bool },
}

/// Longest prefix of `input` that reads as a number, after leading whitespace.
fn parse_float_prefix(input: &str) -> Option<Number<'_>> {
    let s = input.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let bytes = s.as_bytes();
    let len = bytes.len();

    let mut i = 0;
    if matches!(bytes.first(), Some(b'+') | Some(b'-')) {
        i = 1;
    }
    if s[i..].starts_with("Infinity") {
        return Some(Number::Infinite {
            negative: bytes[0] == b'-',
        });
    }

    let int_start = i;
    while i < len && bytes[i].is_ascii_digit() {
        i += 1;
    }
    let mut digits = i - int_start;

    if i < len && bytes[i] == b'.' {
        let mut j = i + 1;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        digits += j - (i + 1);
        if digits > 0 {
            i = j;
        }
    }
    if digits == 0 {
        return None;
    }

    if i < len && (bytes[i] == b'e' || bytes[i] == b'E') {
        let mut j = i + 1;
        if j < len && (bytes[j] == b'+' || bytes[j] == b'-') {
            j += 1;
        }
        let exp_start = j;
        while j < len && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > exp_start {
            i = j;
        }
    }

    Some(Number::Finite(&s[..i]))
}

/// Exact decimal value of a numeric literal, or None when it does not fit a `Decimal`.
fn literal_to_decimal(literal: &str) -> Option<Decimal> {
    let (mantissa, exponent) = match literal.find(|c: char| c == 'e' || c == 'E') {
        Some(pos) => (&literal[..pos], Some(&literal[pos + 1..])),
        None => (literal, None),
    };

    let (negative, digits) = match mantissa.as_bytes().first() {
        Some(b'-') => (true, &mantissa[1..]),
        Some(b'+') => (false, &mantissa[1..]),
        _ => (false, mantissa),
    };
    let mut normalized = String::with_capacity(digits.len() + 1);
    if digits.starts_with('.') {
        normalized.push('0');
    }
    normalized.push_str(digits.strip_suffix('.').unwrap_or(digits));

    let mut value = Decimal::from_str(&normalized).ok()?;

    if let Some(exp) = exponent {
        let exp: i64 = exp.parse().ok()?;
        if exp >= 0 {
            for _ in 0..exp.min(64) {
                value = value.checked_mul(Decimal::TEN)?;
            }
            if exp > 64 && !value.is_zero() {
                return None;
            }
        } else {
            let scale = i64::from(value.scale()) - exp;
            if scale > 28 {
                return None;
            }
            value.set_scale(scale as u32).ok()?;
        }
    }

    if negative {
        value.set_sign_negative(true);
    }
    Some(value)
}

fn to_fixed(value: Decimal, decimals: u32) -> String {
    let negative = value.is_sign_negative() && !value.is_zero();
    let rounded = value
        .abs()
        .round_dp_with_strategy(decimals, RoundingStrategy::MidpointAwayFromZero);
    let body = format!("{:.*}", decimals as usize, rounded);
    if negative {
        format!("-{}", body)
    } else {
        body
    }
}

// Values a Decimal cannot hold go through binary floating point.
fn format_f64(literal: &str, decimals: u32) -> String {
    let number: f64 = match literal.parse() {
        Ok(n) => n,
        Err(_) => return BALANCE_FALLBACK.to_string(),
    };

    if number.is_infinite() {
        return infinity(number < 0.0);
    }
    if number.abs() >= EXPONENT_THRESHOLD {
        let sci = format!("{:e}", number);
        return if sci.contains("e-") {
            sci
        } else {
            sci.replacen('e', "e+", 1)
        };
    }
    format!("{:.*}", decimals as usize, number)
}

fn infinity(negative: bool) -> String {
    if negative {
        "-Infinity".to_string()
    } else {
        "Infinity".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviate_identity() {
        assert_eq!(abbreviate_identity("GABCDEFGH", 4, 4), "GABC...EFGH");
        assert_eq!(
            abbreviate_key("GA5ZSEJYB37JRC5AVCIA5MOP4RHTM335X2KGX3IHOJAPP5RE34K4KZVN"),
            "GA5Z...KZVN"
        );
        assert_eq!(abbreviate_identity("GABCDEFGHIJ", 2, 3), "GA...HIJ");
    }

    #[test]
    fn test_abbreviate_short_identity_unchanged() {
        assert_eq!(abbreviate_identity("GABCDEF", 4, 4), "GABCDEF");
        assert_eq!(abbreviate_identity("", 4, 4), "");
        assert_eq!(abbreviate_identity("", 0, 0), "");
    }

    #[test]
    fn test_abbreviate_exact_length_and_zero_widths() {
        // Length equal to start + end still abbreviates.
        assert_eq!(abbreviate_identity("ABCDEFGH", 4, 4), "ABCD...EFGH");
        assert_eq!(abbreviate_identity("ABCDEFGH", 0, 0), "...");
        assert_eq!(abbreviate_identity("ABCDEFGH", 3, 0), "ABC...");
        assert_eq!(abbreviate_identity("ABCDEFGH", 0, 2), "...GH");
    }

    #[test]
    fn test_abbreviate_result_length() {
        let identity = "GDQP2KPQGKIHYJGXNUIYOMHARUARCA7DJT5FO2FFOOKY3B2WSQHG4W37";
        for start in 0..6 {
            for end in 0..6 {
                let short = abbreviate_identity(identity, start, end);
                assert_eq!(short.chars().count(), start + 3 + end);
                assert!(short.starts_with(&identity[..start]));
                assert!(short.ends_with(&identity[identity.len() - end..]));
            }
        }
    }

    #[test]
    fn test_abbreviate_multibyte() {
        assert_eq!(abbreviate_identity("ééééxxxxüüüü", 4, 4), "éééé...üüüü");
    }

    #[test]
    fn test_format_balance_rounding() {
        assert_eq!(format_balance_amount("123.456", 2), "123.46");
        assert_eq!(format_balance_amount("123.454", 2), "123.45");
        assert_eq!(format_balance_amount("2.5", 0), "3");
        assert_eq!(format_balance_amount("-1.005", 2), "-1.01");
        assert_eq!(format_balance_amount("42.0000000", 2), "42.00");
        assert_eq!(format_balance("9999.999"), "10000.00");
    }

    #[test]
    fn test_format_balance_padding() {
        assert_eq!(format_balance_amount("10", 0), "10");
        assert_eq!(format_balance_amount("10", 3), "10.000");
        assert_eq!(format_balance_amount("0.5", 4), "0.5000");
    }

    #[test]
    fn test_format_balance_fallback() {
        assert_eq!(format_balance_amount("not-a-number", 2), "0.00");
        assert_eq!(format_balance_amount("", 2), "0.00");
        assert_eq!(format_balance_amount(".", 2), "0.00");
        assert_eq!(format_balance_amount("-", 2), "0.00");
        // Fallback ignores the requested precision.
        assert_eq!(format_balance_amount("abc", 5), "0.00");
        assert_eq!(format_balance_amount("abc", 0), "0.00");
        assert_eq!(format_balance_amount("1.5", 101), "0.00");
    }

    #[test]
    fn test_format_balance_lenient_parse() {
        assert_eq!(format_balance_amount("  7.1", 2), "7.10");
        assert_eq!(format_balance_amount("12abc", 1), "12.0");
        assert_eq!(format_balance_amount(".5", 1), "0.5");
        assert_eq!(format_balance_amount("5.", 1), "5.0");
        assert_eq!(format_balance_amount("+3", 0), "3");
        assert_eq!(format_balance_amount("1e3", 2), "1000.00");
        assert_eq!(format_balance_amount("2.5E-1", 2), "0.25");
        assert_eq!(format_balance_amount("4e", 1), "4.0");
    }

    #[test]
    fn test_format_balance_signs_and_infinity() {
        assert_eq!(format_balance_amount("-0.001", 2), "-0.00");
        assert_eq!(format_balance_amount("-0", 2), "0.00");
        assert_eq!(format_balance_amount("Infinity", 2), "Infinity");
        assert_eq!(format_balance_amount("-Infinity", 2), "-Infinity");
        assert_eq!(format_balance_amount("1e400", 2), "Infinity");
    }

    #[test]
    fn test_format_balance_large_magnitude() {
        assert_eq!(format_balance_amount("1e21", 2), "1e+21");
        assert_eq!(format_balance_amount("1.5e40", 2), "1.5e+40");
    }

    #[test]
    fn test_format_compact_currency() {
        assert_eq!(format_compact_currency(Decimal::from(2_450_000)), "$2.5M");
        assert_eq!(format_compact_currency(Decimal::from(12_340)), "$12.3K");
        assert_eq!(format_compact_currency(Decimal::from(999)), "$999");
        assert_eq!(format_compact_currency(Decimal::new(4995, 1)), "$500");
    }
}
