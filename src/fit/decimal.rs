//! Decimal rendering that matches the reference renderer's numeral output.
//!
//! Three rounding behaviours are reproduced:
//! - locale output rounds the shortest round-trip representation half away
//!   from zero;
//! - fixed-point output rounds the exact binary value, ties to the larger
//!   magnitude;
//! - scientific output rounds the exact value, ties to the larger magnitude.
//!
//! Rust's own `{:.N}` formatting does not round exact ties toward the larger
//! magnitude, so ties are detected and resolved here before falling back to it.

use super::numeric::DigitGrouping;

/// Locale-style fixed-point string with grouped integer digits.
pub(crate) fn to_locale_fixed(value: f64, places: usize, grouping: DigitGrouping) -> String {
    // Display for f64 is the shortest round-trip form and never uses an exponent.
    let repr = format!("{}", value.abs());
    let (int_part, frac_part) = match repr.split_once('.') {
        Some((i, f)) => (i, f),
        None => (repr.as_str(), ""),
    };
    let (int_digits, frac_digits) = round_half_up(int_part, frac_part, places);

    let mut out = String::new();
    if value.is_sign_negative() {
        out.push('-');
    }
    out.push_str(&group_digits(&int_digits, grouping));
    if places > 0 {
        out.push('.');
        out.push_str(&frac_digits);
    }
    out
}

/// Fixed-point string without grouping, rounding the exact value.
pub(crate) fn to_fixed(value: f64, places: u32) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    match tie_ceiling(abs, places) {
        Some(n) => format!("{}{}", sign, insert_point(&n.to_string(), places as usize)),
        None => format!("{}{:.*}", sign, places as usize, abs),
    }
}

/// Scientific notation with `places` mantissa fraction digits and a signed
/// exponent, e.g. `1.2e+6`.
///
/// Exact for integer-valued input. Non-integer input goes through Rust's
/// correctly rounded formatter, which only differs on exact ties; those are
/// always integer-valued once `value >= 10^(places + 1)`.
pub(crate) fn to_exponential(value: f64, places: usize) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();
    if abs == 0.0 {
        return format!("{}{}e+0", sign, insert_point(&"0".repeat(places + 1), places));
    }

    let (mantissa, exponent) = if abs.fract() == 0.0 {
        let digits = format!("{:.0}", abs);
        let mut exponent = digits.len() as i32 - 1;
        let keep = (places + 1).min(digits.len());
        let (mut head, _) = round_half_up(&digits[..keep], &digits[keep..], 0);
        if head.len() > keep {
            // Carry added a digit, e.g. 9.96e4 -> 10.0e4.
            head.pop();
            exponent += 1;
        }
        while head.len() < places + 1 {
            head.push('0');
        }
        (insert_point(&head, places), exponent)
    } else {
        let formatted = format!("{:.*e}", places, abs);
        match formatted.split_once('e') {
            Some((m, e)) => (m.to_string(), e.parse::<i32>().unwrap_or(0)),
            None => (formatted.clone(), 0),
        }
    };

    let exp_sign = if exponent < 0 { '-' } else { '+' };
    format!("{}{}e{}{}", sign, mantissa, exp_sign, exponent.abs())
}

/// Insert digit-group separators into a run of integer digits.
pub(crate) fn group_digits(digits: &str, grouping: DigitGrouping) -> String {
    let len = digits.len();
    if len <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(len - 3);
    let step = match grouping {
        DigitGrouping::Indian => 2,
        DigitGrouping::Western => 3,
    };

    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(step);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    groups.push(tail);
    groups.join(",")
}

/// Round `int.frac` to `places` fraction digits, half away from zero.
///
/// Returns the integer and fraction digit strings; the fraction is padded
/// with zeros to exactly `places` digits.
fn round_half_up(int_part: &str, frac_part: &str, places: usize) -> (String, String) {
    if frac_part.len() <= places {
        let mut frac = frac_part.to_string();
        while frac.len() < places {
            frac.push('0');
        }
        return (int_part.to_string(), frac);
    }

    let round_up = frac_part.as_bytes()[places] >= b'5';
    let mut digits: Vec<u8> = int_part
        .bytes()
        .chain(frac_part[..places].bytes())
        .collect();

    if round_up {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let split = digits.len() - places;
    let int_digits = String::from_utf8_lossy(&digits[..split]).into_owned();
    let frac_digits = String::from_utf8_lossy(&digits[split..]).into_owned();
    (int_digits, frac_digits)
}

/// If `abs * 10^places` lies exactly halfway between two integers, return
/// the larger one.
fn tie_ceiling(abs: f64, places: u32) -> Option<u128> {
    if !abs.is_finite() || places > 20 {
        return None;
    }
    let bits = abs.to_bits();
    let exp_bits = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    let (mantissa, exponent) = if exp_bits == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), exp_bits - 1075)
    };
    if mantissa == 0 || exponent >= 0 {
        return None;
    }

    // abs * 10^places * 2 == mantissa * 2 * 10^places / 2^shift must be odd.
    let shift = (-exponent) as u32;
    if shift >= 127 {
        return None;
    }
    let scaled = u128::from(mantissa) * 2 * 10u128.pow(places);
    let denominator = 1u128 << shift;
    if scaled % denominator != 0 {
        return None;
    }
    let doubled = scaled / denominator;
    (doubled % 2 == 1).then(|| (doubled + 1) / 2)
}

fn insert_point(digits: &str, places: usize) -> String {
    if places == 0 {
        return digits.to_string();
    }
    let padded = if digits.len() <= places {
        format!("{}{}", "0".repeat(places + 1 - digits.len()), digits)
    } else {
        digits.to_string()
    };
    let (int_part, frac_part) = padded.split_at(padded.len() - places);
    format!("{}.{}", int_part, frac_part)
}
