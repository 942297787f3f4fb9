/// Significant digits shown in adaptive mode.
pub const SIGNIFICANT_DIGITS: usize = 10;
/// Mantissa decimals for exponential output.
const EXPONENT_DECIMALS: usize = 9;
/// Largest fixed-point precision; larger requests are clamped.
pub const MAX_DECIMALS: usize = 100;

/// Adaptive rendering switches to exponential outside `[1e-9, 1e10)`.
const LARGE: f64 = 1e10;
const SMALL: f64 = 1e-9;

/// Enough fractional digits to print any f64 exactly (the smallest subnormal
/// has 1074).
const EXACT_DIGITS: usize = 1100;

/// Render `value` the way the calculator would show it.
///
/// With `decimals`, the value is printed with exactly that many places, ties
/// rounding away from zero (`2.5` at zero places is `3`), and a rounded
/// negative zero loses its sign (`-0.001` at two places is `0.00`).
/// Without, ten significant digits are shown, trailing zeros dropped, and very
/// large or very small magnitudes use `E` notation (`1E11`, `-1E-8`).
pub fn format_number(value: f64, decimals: Option<usize>) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }

    if let Some(places) = decimals {
        return drop_negative_zero(to_fixed(value, places.min(MAX_DECIMALS)));
    }

    let abs = value.abs();
    let output = if abs != 0.0 && (abs >= LARGE || abs < SMALL) {
        format!("{:.*e}", EXPONENT_DECIMALS, value)
    } else {
        to_precision(value, SIGNIFICANT_DIGITS)
    };

    if let Some((mantissa, exponent)) = output.split_once('e') {
        let mantissa = drop_negative_zero(strip_trailing_zeros(mantissa));
        let exponent = exponent.strip_prefix('+').unwrap_or(exponent);
        return format!("{}E{}", mantissa, exponent);
    }

    drop_negative_zero(strip_trailing_zeros(&output))
}

/// Remove trailing fractional zeros and a dangling decimal point.
/// Strings without a `.` are returned unchanged.
pub fn strip_trailing_zeros(mantissa: &str) -> String {
    if !mantissa.contains('.') {
        return mantissa.to_string();
    }
    let stripped = mantissa.trim_end_matches('0');
    let stripped = stripped.strip_suffix('.').unwrap_or(stripped);
    if stripped.is_empty() {
        "0".to_string()
    } else {
        stripped.to_string()
    }
}

/// `digits` significant digits; exponential when the rounded decimal exponent
/// is below -6 or at least `digits`.
fn to_precision(value: f64, digits: usize) -> String {
    if value == 0.0 {
        return format!("{:.*}", digits - 1, 0.0);
    }

    let scientific = format!("{:.*e}", digits - 1, value);
    let exponent: i32 = scientific
        .split_once('e')
        .and_then(|(_, e)| e.parse().ok())
        .unwrap_or(0);

    if exponent < -6 || exponent >= digits as i32 {
        return scientific;
    }
    let places = (digits as i32 - 1 - exponent) as usize;
    to_fixed(value, places)
}

/// Fixed-point rendering that rounds half away from zero.
///
/// Rounds the exact decimal expansion by its first dropped digit, so exact
/// binary ties (`2.5`, `0.125`) go up in magnitude where `format!` picks the
/// even digit.
fn to_fixed(value: f64, places: usize) -> String {
    let exact = format!("{:.*}", EXACT_DIGITS, value.abs());
    let Some((int_part, frac_part)) = exact.split_once('.') else {
        return format!("{:.*}", places, value);
    };

    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().take(places))
        .collect();
    let mut int_len = int_part.len();

    if frac_part.as_bytes().get(places).is_some_and(|d| *d >= b'5') {
        let mut carry = true;
        for digit in digits.iter_mut().rev() {
            if *digit == b'9' {
                *digit = b'0';
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            digits.insert(0, b'1');
            int_len += 1;
        }
    }

    let mut output = String::with_capacity(digits.len() + 2);
    if value.is_sign_negative() {
        output.push('-');
    }
    output.extend(digits[..int_len].iter().map(|d| *d as char));
    if places > 0 {
        output.push('.');
        output.extend(digits[int_len..].iter().map(|d| *d as char));
    }
    output
}

fn drop_negative_zero(output: String) -> String {
    match output.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => output,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adaptive_plain_values() {
        assert_eq!(format_number(0.5, None), "0.5");
        assert_eq!(format_number(2.0, None), "2");
        assert_eq!(format_number(-4.0, None), "-4");
        assert_eq!(format_number(1.0 / 3.0, None), "0.3333333333");
        assert_eq!(format_number(-24.26649916142160, None), "-24.26649916");
        assert_eq!(format_number(123456.789, None), "123456.789");
        assert_eq!(format_number(0.000001, None), "0.000001");
    }

    #[test]
    fn adaptive_exponential_values() {
        assert_eq!(format_number(1e11, None), "1E11");
        assert_eq!(format_number(1e10, None), "1E10");
        assert_eq!(format_number(-1e-8, None), "-1E-8");
        assert_eq!(format_number(1e-7, None), "1E-7");
        assert_eq!(format_number(2.5e-12, None), "2.5E-12");
        assert_eq!(format_number(-3.25e15, None), "-3.25E15");
    }

    #[test]
    fn rounding_up_to_ten_digits_switches_to_exponential() {
        assert_eq!(format_number(9_999_999_999.9, None), "1E10");
    }

    #[test]
    fn zero_has_no_sign() {
        assert_eq!(format_number(0.0, None), "0");
        assert_eq!(format_number(-0.0, None), "0");
    }

    #[test]
    fn fixed_decimals() {
        assert_eq!(format_number(1.0 / 3.0, Some(2)), "0.33");
        assert_eq!(format_number(2.0, Some(3)), "2.000");
        assert_eq!(format_number(-0.001, Some(2)), "0.00");
        assert_eq!(format_number(-1.256, Some(1)), "-1.3");
        assert_eq!(format_number(7.6, Some(0)), "8");
        assert_eq!(format_number(9.96, Some(1)), "10.0");
    }

    #[test]
    fn fixed_decimals_round_ties_away_from_zero() {
        assert_eq!(format_number(2.5, Some(0)), "3");
        assert_eq!(format_number(0.5, Some(0)), "1");
        assert_eq!(format_number(-2.5, Some(0)), "-3");
        assert_eq!(format_number(0.125, Some(2)), "0.13");
        assert_eq!(format_number(-0.375, Some(2)), "-0.38");
        // 1.005 is stored just below the tie
        assert_eq!(format_number(1.005, Some(2)), "1.00");
    }

    #[test]
    fn adaptive_rounds_ties_away_from_zero() {
        assert_eq!(format_number(1_234_567_890.5, None), "1234567891");
        assert_eq!(format_number(-1_234_567_890.5, None), "-1234567891");
        assert_eq!(format_number(0.00048828125, None), "0.00048828125");
    }

    #[test]
    fn non_finite_values() {
        assert_eq!(format_number(f64::INFINITY, None), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY, Some(2)), "-Infinity");
        assert_eq!(format_number(f64::NAN, None), "NaN");
    }

    #[test]
    fn trailing_zero_stripping() {
        assert_eq!(strip_trailing_zeros("1.500"), "1.5");
        assert_eq!(strip_trailing_zeros("2.000"), "2");
        assert_eq!(strip_trailing_zeros("100"), "100");
        assert_eq!(strip_trailing_zeros("0.000"), "0");
        assert_eq!(strip_trailing_zeros(".000"), "0");
    }
}
