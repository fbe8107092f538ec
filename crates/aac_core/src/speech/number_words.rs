//! English number-to-words conversion.
//!
//! # Responsibility
//! - Render integers as spoken English for composed numeric tokens.
//!
//! # Invariants
//! - Conversion is total, deterministic and side-effect free.
//! - Output never carries leading/trailing whitespace.

use super::sentence::is_pure_digit;

const ONES: [&str; 10] = [
    "", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];
const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];
const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];
const DIGIT_NAMES: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

const BILLION: u64 = 1_000_000_000;
const MILLION: u64 = 1_000_000;
const THOUSAND: u64 = 1_000;

/// Converts a signed integer to English words.
///
/// `0` is `"zero"`; negative values are prefixed with `"negative "`.
pub fn number_to_words(n: i64) -> String {
    if n < 0 {
        return format!("negative {}", unsigned_to_words(n.unsigned_abs()));
    }
    unsigned_to_words(n.unsigned_abs())
}

/// Converts an unsigned integer to English words.
pub fn unsigned_to_words(n: u64) -> String {
    if n == 0 {
        return "zero".to_string();
    }
    if n < THOUSAND {
        return convert_hundreds(n);
    }

    let billions = n / BILLION;
    let millions = (n % BILLION) / MILLION;
    let thousands = (n % MILLION) / THOUSAND;
    let remainder = n % THOUSAND;

    let mut result = String::new();
    if billions > 0 {
        // Groups past 999 billion recurse instead of indexing out of the tables.
        let group = if billions < THOUSAND {
            convert_hundreds(billions)
        } else {
            unsigned_to_words(billions)
        };
        result.push_str(&group);
        result.push_str(" billion ");
    }
    if millions > 0 {
        result.push_str(&convert_hundreds(millions));
        result.push_str(" million ");
    }
    if thousands > 0 {
        result.push_str(&convert_hundreds(thousands));
        result.push_str(" thousand ");
    }
    if remainder > 0 {
        result.push_str(&convert_hundreds(remainder));
    }

    result.trim().to_string()
}

/// Spoken form of a pure-digit token, `None` for anything else.
///
/// Tokens beyond `u64` range are read out digit by digit.
pub fn digits_to_words(token: &str) -> Option<String> {
    if !is_pure_digit(token) {
        return None;
    }
    match token.parse::<u64>() {
        Ok(value) => Some(unsigned_to_words(value)),
        Err(_) => Some(
            token
                .bytes()
                .map(|digit| DIGIT_NAMES[usize::from(digit - b'0')])
                .collect::<Vec<_>>()
                .join(" "),
        ),
    }
}

fn convert_hundreds(n: u64) -> String {
    debug_assert!(n < THOUSAND);
    let mut rest = n as usize;
    let mut result = String::new();

    if rest >= 100 {
        result.push_str(ONES[rest / 100]);
        result.push_str(" hundred ");
        rest %= 100;
    }

    if rest >= 20 {
        result.push_str(TENS[rest / 10]);
        if rest % 10 != 0 {
            result.push('-');
            result.push_str(ONES[rest % 10]);
        }
    } else if rest >= 10 {
        result.push_str(TEENS[rest - 10]);
    } else if rest > 0 {
        result.push_str(ONES[rest]);
    }

    result.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::{digits_to_words, number_to_words, unsigned_to_words};

    #[test]
    fn converts_small_numbers() {
        assert_eq!(number_to_words(0), "zero");
        assert_eq!(number_to_words(7), "seven");
        assert_eq!(number_to_words(15), "fifteen");
        assert_eq!(number_to_words(20), "twenty");
        assert_eq!(number_to_words(42), "forty-two");
        assert_eq!(number_to_words(100), "one hundred");
        assert_eq!(number_to_words(110), "one hundred ten");
        assert_eq!(number_to_words(999), "nine hundred ninety-nine");
    }

    #[test]
    fn converts_scaled_groups() {
        assert_eq!(number_to_words(1001), "one thousand one");
        assert_eq!(number_to_words(12_000), "twelve thousand");
        assert_eq!(
            number_to_words(1_234_567),
            "one million two hundred thirty-four thousand five hundred sixty-seven"
        );
        assert_eq!(number_to_words(2_000_000_005), "two billion five");
        assert_eq!(
            number_to_words(999_999_999_999),
            "nine hundred ninety-nine billion nine hundred ninety-nine million \
             nine hundred ninety-nine thousand nine hundred ninety-nine"
        );
    }

    #[test]
    fn converts_negative_numbers() {
        assert_eq!(number_to_words(-7), "negative seven");
        assert_eq!(number_to_words(-1_000), "negative one thousand");
        assert!(number_to_words(i64::MIN).starts_with("negative nine"));
    }

    #[test]
    fn billions_group_above_999_recurses() {
        assert_eq!(unsigned_to_words(1_000_000_000_000), "one thousand billion");
        let max = unsigned_to_words(u64::MAX);
        assert!(max.starts_with("eighteen billion four hundred forty-six million"));
        assert!(max.ends_with("five hundred fifty-one thousand six hundred fifteen"));
    }

    #[test]
    fn digit_tokens_convert_and_overflow_spells_digits() {
        assert_eq!(digits_to_words("123").as_deref(), Some("one hundred twenty-three"));
        assert_eq!(digits_to_words("007").as_deref(), Some("seven"));
        assert_eq!(digits_to_words("12a"), None);
        assert_eq!(digits_to_words(""), None);
        assert_eq!(
            digits_to_words("99999999999999999999").as_deref(),
            Some(
                "nine nine nine nine nine nine nine nine nine nine \
                 nine nine nine nine nine nine nine nine nine nine"
            )
        );
    }

    #[test]
    fn output_is_trimmed_for_sampled_range() {
        let mut n: u64 = 1;
        while n < 999_999_999_999 {
            let words = unsigned_to_words(n);
            assert_eq!(words.trim(), words, "untrimmed output for {n}");
            assert!(!words.contains("  "), "double space for {n}");
            n = n * 7 + 3;
        }
    }
}
