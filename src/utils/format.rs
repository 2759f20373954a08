//! Format - Formatting Utilities

use serde::{Deserialize, Serialize};

/// Currency display rules
///
/// Configured once at the application boundary and handed to every view
/// that prints money. The default is Brazilian real in pt-BR notation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    /// Currency symbol, placed before the amount
    pub symbol: String,
    /// Digit group separator
    pub thousands_separator: char,
    /// Separator between integer and fraction digits
    pub decimal_separator: char,
    /// Number of fraction digits
    pub fraction_digits: u8,
    /// Put a space between the symbol and the digits
    pub symbol_spacing: bool,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::brl()
    }
}

impl CurrencyFormat {
    /// Brazilian real, pt-BR conventions: `R$ 1.234,56`
    pub fn brl() -> Self {
        Self {
            symbol: "R$".to_string(),
            thousands_separator: '.',
            decimal_separator: ',',
            fraction_digits: 2,
            symbol_spacing: true,
        }
    }

    /// Format an amount
    ///
    /// Rounds the amount's shortest decimal form half away from zero, so
    /// `1.005` prints as `1,01`. Negative amounts get a leading minus
    /// before the symbol; amounts that round to zero are never negative.
    pub fn format(&self, amount: f64) -> String {
        let prefix = if self.symbol_spacing {
            format!("{} ", self.symbol)
        } else {
            self.symbol.clone()
        };

        if amount.is_nan() {
            return format!("{prefix}NaN");
        }
        if amount.is_infinite() {
            let sign = if amount < 0.0 { "-" } else { "" };
            return format!("{sign}{prefix}∞");
        }

        let digits = usize::from(self.fraction_digits);
        let (int_part, frac_part) = round_half_away(&amount.abs().to_string(), digits);

        let negative = amount < 0.0 && !(is_all_zeros(&int_part) && is_all_zeros(&frac_part));
        let mut out = String::with_capacity(int_part.len() + digits + prefix.len() + 8);
        if negative {
            out.push('-');
        }
        out.push_str(&prefix);
        out.push_str(&group_digits(&int_part, self.thousands_separator));
        if digits > 0 {
            out.push(self.decimal_separator);
            out.push_str(&frac_part);
        }
        out
    }
}

/// Format an amount as Brazilian real
pub fn format_currency(amount: f64) -> String {
    CurrencyFormat::brl().format(amount)
}

/// Round a non-negative decimal string to `digits` fraction digits
///
/// Works on the decimal text rather than the binary value, so `1.005`
/// rounds to `1.01`. Ties go away from zero. Returns the integer and
/// fraction digits.
fn round_half_away(text: &str, digits: usize) -> (String, String) {
    let (int_text, frac_text) = text.split_once('.').unwrap_or((text, ""));

    let mut kept: Vec<u8> = int_text
        .bytes()
        .chain(frac_text.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .map(|b| b - b'0')
        .collect();

    if frac_text.as_bytes().get(digits).is_some_and(|&b| b >= b'5') {
        let mut carry = true;
        for digit in kept.iter_mut().rev() {
            if *digit == 9 {
                *digit = 0;
            } else {
                *digit += 1;
                carry = false;
                break;
            }
        }
        if carry {
            kept.insert(0, 1);
        }
    }

    let text: String = kept.iter().map(|&d| char::from(b'0' + d)).collect();
    let (int_part, frac_part) = text.split_at(text.len() - digits);
    (int_part.to_string(), frac_part.to_string())
}

fn is_all_zeros(digits: &str) -> bool {
    digits.bytes().all(|b| b == b'0')
}

/// Insert a separator every three digits, counting from the right
fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(separator);
        }
        result.push(c);
    }

    result
}
