//! Terbilang - Indonesian number-to-words conversion.
//!
//! Converts a monetary amount into its spelled-out Indonesian form, e.g.
//! `1_500_000` becomes `"Satu juta lima ratus ribu rupiah"`. This is the
//! single shared core used by both the invoice rendering path and the
//! terbilang preview endpoint.

use thiserror::Error;

/// Names for 0-19. Teens are irregular words, not composed from tens + ones.
const ONES: [&str; 20] = [
    "",
    "satu",
    "dua",
    "tiga",
    "empat",
    "lima",
    "enam",
    "tujuh",
    "delapan",
    "sembilan",
    "sepuluh",
    "sebelas",
    "dua belas",
    "tiga belas",
    "empat belas",
    "lima belas",
    "enam belas",
    "tujuh belas",
    "delapan belas",
    "sembilan belas",
];

/// Names for the tens digit in 20-99. Indices 0 and 1 are unused.
const TENS: [&str; 10] = [
    "",
    "",
    "dua puluh",
    "tiga puluh",
    "empat puluh",
    "lima puluh",
    "enam puluh",
    "tujuh puluh",
    "delapan puluh",
    "sembilan puluh",
];

/// Scale names per 3-digit group, lowest tier first. The base group carries
/// no scale word.
const SCALES: [&str; 5] = ["", "ribu", "juta", "miliar", "triliun"];

const CURRENCY_UNIT: &str = "rupiah";

/// First magnitude that falls outside the scale table (10^15).
const SCALE_LIMIT: f64 = 1_000_000_000_000_000.0;

/// Errors raised by the converter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TerbilangError {
    #[error("nominal {0} berada di luar jangkauan skala terbilang (maksimum 999.999.999.999.999)")]
    OutOfRange(f64),
}

/// Convert a monetary amount to Indonesian words, with a trailing currency
/// unit and the first letter capitalized.
///
/// The fractional part is truncated toward zero; whole rupiah only. Negative
/// amounts are prefixed with `"Minus "`. Amounts whose truncated magnitude
/// reaches 10^15, as well as non-finite inputs, report
/// [`TerbilangError::OutOfRange`] instead of producing a truncated string.
pub fn terbilang(amount: f64) -> Result<String, TerbilangError> {
    if !amount.is_finite() {
        return Err(TerbilangError::OutOfRange(amount));
    }

    let truncated = amount.trunc();
    if truncated == 0.0 {
        return Ok(format!("Nol {CURRENCY_UNIT}"));
    }
    if truncated < 0.0 {
        let positive = terbilang(-amount)?;
        return Ok(format!("Minus {positive}"));
    }
    if truncated >= SCALE_LIMIT {
        return Err(TerbilangError::OutOfRange(amount));
    }

    // All in-range amounts fit losslessly in u64 (10^15 - 1 < 2^53).
    let mut remaining = truncated as u64;
    let mut fragments: Vec<String> = Vec::new();
    let mut tier = 0;

    while remaining > 0 {
        let group = (remaining % 1000) as u16;
        if group > 0 {
            let fragment = if tier == 1 && group == 1 {
                // Irregular contraction: "seribu", never "satu ribu".
                "seribu".to_string()
            } else if tier == 0 {
                render_group(group)
            } else {
                format!("{} {}", render_group(group), SCALES[tier])
            };
            fragments.push(fragment);
        }
        remaining /= 1000;
        tier += 1;
    }

    // Groups were extracted low-to-high; output is most significant first.
    fragments.reverse();
    let joined = fragments.join(" ");
    let words = joined.split_whitespace().collect::<Vec<_>>().join(" ");

    Ok(format!("{} {CURRENCY_UNIT}", capitalize_first(&words)))
}

/// Render one 3-digit group (1..=999) without any scale word.
fn render_group(group: u16) -> String {
    let mut words = String::new();
    let hundreds = group / 100;
    let remainder = group % 100;

    if hundreds == 1 {
        // Irregular: "seratus", never "satu ratus".
        words.push_str("seratus");
    } else if hundreds > 1 {
        words.push_str(ONES[hundreds as usize]);
        words.push_str(" ratus");
    }

    if remainder > 0 {
        if !words.is_empty() {
            words.push(' ');
        }
        if remainder < 20 {
            words.push_str(ONES[remainder as usize]);
        } else {
            words.push_str(TENS[(remainder / 10) as usize]);
            if remainder % 10 > 0 {
                words.push(' ');
                words.push_str(ONES[(remainder % 10) as usize]);
            }
        }
    }

    words
}

fn capitalize_first(words: &str) -> String {
    let mut chars = words.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_group_units_and_teens() {
        assert_eq!(render_group(1), "satu");
        assert_eq!(render_group(10), "sepuluh");
        assert_eq!(render_group(11), "sebelas");
        assert_eq!(render_group(19), "sembilan belas");
    }

    #[test]
    fn test_render_group_tens() {
        assert_eq!(render_group(20), "dua puluh");
        assert_eq!(render_group(25), "dua puluh lima");
        assert_eq!(render_group(99), "sembilan puluh sembilan");
    }

    #[test]
    fn test_render_group_hundreds() {
        assert_eq!(render_group(100), "seratus");
        assert_eq!(render_group(101), "seratus satu");
        assert_eq!(render_group(111), "seratus sebelas");
        assert_eq!(render_group(200), "dua ratus");
        assert_eq!(render_group(999), "sembilan ratus sembilan puluh sembilan");
    }

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("satu juta"), "Satu juta");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_seribu_contraction_only_for_thousands_group_of_one() {
        assert_eq!(terbilang(1_000.0).unwrap(), "Seribu rupiah");
        assert_eq!(terbilang(2_000.0).unwrap(), "Dua ribu rupiah");
        // The contraction does not apply to other tiers.
        assert_eq!(terbilang(1_000_000.0).unwrap(), "Satu juta rupiah");
    }
}
