//! Utility functions and helpers.

pub mod csv;
pub mod http;
pub mod log;

/// Parse the leading decimal integer of a cell.
///
/// Leading whitespace and one sign are accepted, then the longest run of
/// ASCII digits; anything after it is ignored (`"12a"` is 12). Returns
/// `None` when no digit follows. Digit runs too long for `i64` saturate.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let text = text.trim_start();
    let (negative, rest) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let value = rest.as_bytes()[..digits_len]
        .iter()
        .fold(0i64, |acc, digit| {
            acc.saturating_mul(10)
                .saturating_add(i64::from(digit - b'0'))
        });
    Some(if negative { -value } else { value })
}
