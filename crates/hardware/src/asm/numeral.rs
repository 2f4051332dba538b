//! Numeral parsing.
//!
//! `0x`/`0X` selects hexadecimal, `0b`/`0B` binary, anything else decimal.
//! Signs are not accepted.

/// Parses a numeral token. Returns `None` if the token is empty, signed,
/// contains digits invalid for its radix, or overflows `u32`.
pub fn parse_numeral(token: &str) -> Option<u32> {
    let hex = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"));
    let bin = token
        .strip_prefix("0b")
        .or_else(|| token.strip_prefix("0B"));
    let (digits, radix) = hex.map_or_else(
        || bin.map_or((token, 10), |digits| (digits, 2)),
        |digits| (digits, 16),
    );

    if digits.is_empty() || digits.starts_with(['+', '-']) {
        return None;
    }
    u32::from_str_radix(digits, radix).ok()
}
