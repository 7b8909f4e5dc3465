//! Text input boundary: comma-separated heights typed by the user.
//!
//! Each token is trimmed and read as a leading integer, so `"12px"` reads as
//! 12 and `"4.7"` as 4. A `0x` prefix switches to hexadecimal (`"0x1A"` is
//! 26). Tokens without a leading integer are dropped, and so are negative
//! values, which cannot be column heights.

use crate::height_profile::HeightProfile;

/// Parse `text` into a profile, silently dropping tokens that are not
/// non-negative integers.
pub fn parse_heights(text: &str) -> HeightProfile {
    text.split(',').filter_map(parse_token).collect()
}

/// Replace `current` with the profile parsed from `text`.
///
/// Returns `false` and leaves `current` untouched when nothing parses.
pub fn apply_profile_text(current: &mut HeightProfile, text: &str) -> bool {
    let parsed = parse_heights(text);
    if parsed.is_empty() {
        return false;
    }
    *current = parsed;
    true
}

fn parse_token(token: &str) -> Option<u32> {
    let token = token.trim();
    let (negative, rest) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let digits_end = rest
        .find(|c: char| !c.is_digit(radix))
        .unwrap_or(rest.len());
    if digits_end == 0 {
        return None;
    }
    let value = u32::from_str_radix(&rest[..digits_end], radix).ok()?;
    if negative && value > 0 {
        return None;
    }
    Some(value)
}
