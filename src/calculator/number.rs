//! Conversions between the display text and numeric operands.

/// Parse the display text into an operand.
///
/// Never fails: anything that is not a number reads as `0.0`.
pub fn parse_number(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(0.0)
}

/// Convert a result back into display text.
///
/// Uses the shortest decimal that round-trips, switching to exponent form
/// for very large and very small magnitudes. Results are never rounded, so
/// floating-point artifacts such as `0.30000000000000004` are shown as-is.
pub fn stringify(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }
    if value == 0.0 {
        // Covers -0.0 as well.
        return "0".to_string();
    }

    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        signed_exponent(&format!("{:e}", value))
    } else {
        format!("{}", value)
    }
}

/// Enough fraction digits to print any `f64` mantissa exactly.
const EXACT_DIGITS: usize = 800;

/// Format `value` in exponent notation with a fixed number of fraction digits.
///
/// Rounds half away from zero on the exact binary value, so
/// `1234568500000` becomes `1.234569e+12`.
pub fn to_exponential(value: f64, fraction_digits: usize) -> String {
    if !value.is_finite() {
        return stringify(value);
    }

    let exact = format!(
        "{:.*e}",
        EXACT_DIGITS.max(fraction_digits + 1),
        value.abs()
    );
    let Some((mantissa, exponent)) = exact.split_once('e') else {
        return signed_exponent(&format!("{:.*e}", fraction_digits, value));
    };
    let mut exponent: i32 = exponent.parse().unwrap_or(0);

    let all_digits: Vec<u8> = mantissa
        .bytes()
        .filter(u8::is_ascii_digit)
        .map(|b| b - b'0')
        .collect();
    let mut digits = all_digits[..=fraction_digits].to_vec();

    let next = all_digits.get(fraction_digits + 1).copied().unwrap_or(0);
    if next >= 5 && round_up(&mut digits) {
        digits.insert(0, 1);
        digits.pop();
        exponent += 1;
    }

    let mut out = String::new();
    if value < 0.0 {
        out.push('-');
    }
    out.push(char::from(b'0' + digits[0]));
    if fraction_digits > 0 {
        out.push('.');
        out.extend(digits[1..].iter().map(|d| char::from(b'0' + d)));
    }
    out.push('e');
    if exponent >= 0 {
        out.push('+');
    }
    out.push_str(&exponent.to_string());
    out
}

/// Add one unit in the last place. Returns true when the carry overflows.
fn round_up(digits: &mut [u8]) -> bool {
    for digit in digits.iter_mut().rev() {
        if *digit == 9 {
            *digit = 0;
        } else {
            *digit += 1;
            return false;
        }
    }
    true
}

/// Rewrite Rust's `1.5e21` / `1.5e-7` exponent into `1.5e+21` / `1.5e-7`.
fn signed_exponent(formatted: &str) -> String {
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{}e+{}", mantissa, exponent)
        }
        _ => formatted.to_string(),
    }
}
