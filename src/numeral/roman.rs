//! Roman numeral symbol table and conversions

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// A Roman numeral building block and the value it stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RomanPair {
    pub value: i64,
    pub symbol: &'static str,
}

/// Canonical building blocks, largest value first.
///
/// Both conversion directions walk this table in order.
pub const ROMAN_PAIRS: [RomanPair; 13] = [
    RomanPair { value: 1000, symbol: "M" },
    RomanPair { value: 900, symbol: "CM" },
    RomanPair { value: 500, symbol: "D" },
    RomanPair { value: 400, symbol: "CD" },
    RomanPair { value: 100, symbol: "C" },
    RomanPair { value: 90, symbol: "XC" },
    RomanPair { value: 50, symbol: "L" },
    RomanPair { value: 40, symbol: "XL" },
    RomanPair { value: 10, symbol: "X" },
    RomanPair { value: 9, symbol: "IX" },
    RomanPair { value: 5, symbol: "V" },
    RomanPair { value: 4, symbol: "IV" },
    RomanPair { value: 1, symbol: "I" },
];

/// Characters that may appear in a Roman-form token
pub const ROMAN_CHARS: &str = "IVXLCDM";

static SYMBOL_VALUES: Lazy<HashMap<&'static str, i64>> = Lazy::new(|| {
    ROMAN_PAIRS
        .iter()
        .map(|pair| (pair.symbol, pair.value))
        .collect()
});

/// Returns true when the token is non-empty and made only of Roman
/// numeral characters. Says nothing about well-formedness: `IIII` and `VV`
/// both pass.
pub fn is_roman(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| ROMAN_CHARS.contains(c))
}

/// Converts an integer to canonical Roman form using the greedy algorithm.
///
/// Values below 1 produce an empty string.
pub fn to_roman(mut value: i64) -> String {
    let mut result = String::new();
    for pair in &ROMAN_PAIRS {
        while value >= pair.value {
            result.push_str(pair.symbol);
            value -= pair.value;
        }
    }
    result
}

/// Converts a Roman numeral to an integer.
///
/// Scans left to right, preferring a two-character subtractive pair when
/// one matches. The input is not checked for well-formedness and characters
/// outside the table contribute zero.
pub fn from_roman(roman: &str) -> i64 {
    let bytes = roman.as_bytes();
    let mut result: i64 = 0;
    let mut i = 0;

    while i < bytes.len() {
        if let Some(value) = bytes.get(i..i + 2).and_then(symbol_value) {
            result = result.saturating_add(value);
            i += 2;
        } else {
            let value = symbol_value(&bytes[i..i + 1]).unwrap_or(0);
            result = result.saturating_add(value);
            i += 1;
        }
    }

    result
}

fn symbol_value(bytes: &[u8]) -> Option<i64> {
    let symbol = std::str::from_utf8(bytes).ok()?;
    SYMBOL_VALUES.get(symbol).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_is_descending() {
        assert!(ROMAN_PAIRS.windows(2).all(|w| w[0].value > w[1].value));
        assert_eq!(ROMAN_PAIRS.last().map(|p| p.value), Some(1));
    }

    #[test]
    fn test_canonical_form_one_to_ten() {
        let expected = ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];
        for (n, roman) in (1..=10).zip(expected) {
            assert_eq!(to_roman(n), roman);
        }
    }

    #[test]
    fn test_round_trip_one_to_ten() {
        for n in 1..=10 {
            assert_eq!(from_roman(&to_roman(n)), n);
        }
    }

    #[test]
    fn test_larger_values() {
        assert_eq!(to_roman(100), "C");
        assert_eq!(to_roman(1994), "MCMXCIV");
        assert_eq!(from_roman("MCMXCIV"), 1994);
        assert_eq!(from_roman("XLII"), 42);
    }

    #[test]
    fn test_to_roman_non_positive_is_empty() {
        assert_eq!(to_roman(0), "");
        assert_eq!(to_roman(-3), "");
    }

    // Conversion is permissive: malformed numerals still yield a number.
    #[test]
    fn test_from_roman_is_permissive() {
        assert_eq!(from_roman("IIII"), 4);
        assert_eq!(from_roman("VV"), 10);
        assert_eq!(from_roman("VX"), 15);
        assert_eq!(from_roman("IVIV"), 8);
        assert_eq!(from_roman("IIX"), 10);
    }

    #[test]
    fn test_from_roman_unknown_chars_add_zero() {
        assert_eq!(from_roman("XAV"), 15);
        assert_eq!(from_roman("x"), 0);
        assert_eq!(from_roman("Vé"), 5);
        assert_eq!(from_roman(""), 0);
    }

    #[test]
    fn test_is_roman() {
        assert!(is_roman("XIV"));
        assert!(is_roman("IIII"));
        assert!(!is_roman(""));
        assert!(!is_roman("iv"));
        assert!(!is_roman("5"));
        assert!(!is_roman("X1"));
    }
}
