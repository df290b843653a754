use once_cell::sync::Lazy;
use regex::Regex;

static DIGIT_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("digit run pattern"));

// Anchored so the captured run is the one nearest the end of the string,
// with only non-digit text allowed after it: "13~15장" captures 15, not 13.
static TRAILING_DIGIT_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+)\D*$").expect("trailing digit run pattern"));

/// First maximal run of decimal digits anywhere in `text`.
pub fn first_integer(text: &str) -> Option<u32> {
    DIGIT_RUN.find(text).and_then(|m| m.as_str().parse().ok())
}

/// Last maximal run of decimal digits in `text` — the upper bound of a range
/// expression like "13~15장". Not interchangeable with [`first_integer`].
pub fn last_integer(text: &str) -> Option<u32> {
    TRAILING_DIGIT_RUN
        .captures(text)
        .and_then(|captures| captures.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Drops every non-digit character and parses what remains, so currency
/// strings like "1,000원" come out as plain integers. Nothing left means
/// there was no amount.
pub fn digits_only(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
