//! Character-level fallback for tokens wider than the row they must go on.

use crate::metrics::MetricsProvider;

/// Byte length of the longest prefix of `token` that measures `<= max_width`.
///
/// The prefix always covers at least one character of a non-empty token, even
/// when that character alone is wider than `max_width`; the wrapper relies on
/// this to make progress on every row. Returns 0 only for an empty token.
pub fn fit_within_width<M: MetricsProvider + ?Sized>(
    metrics: &M,
    token: &str,
    max_width: i32,
    scale: u8,
) -> usize {
    let mut fitted = 0;
    for (i, c) in token.char_indices() {
        let end = i + c.len_utf8();
        let width = metrics.measure(&token[..end], scale).width;
        if i64::from(width) > i64::from(max_width) {
            return if fitted == 0 { end } else { fitted };
        }
        fitted = end;
    }
    fitted
}

/// Longest prefix of `text` that fits in `capacity` bytes without splitting a character.
pub fn clip_to_capacity(
    text: &str,
    capacity: usize,
) -> &str {
    if text.len() <= capacity {
        return text;
    }
    let mut end = capacity;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FixedAdvance;

    #[test]
    fn test_takes_longest_fitting_prefix() {
        let m = FixedAdvance::GFX;
        // 12px per glyph at scale 2: 3 glyphs = 36 <= 44, 4 glyphs = 48 > 44
        assert_eq!(fit_within_width(&m, "EVT:BOOT", 44, 2), 3);
        assert_eq!(fit_within_width(&m, "EVT:BOOT", 48, 2), 4);
    }

    #[test]
    fn test_whole_token_when_it_fits() {
        let m = FixedAdvance::GFX;
        assert_eq!(fit_within_width(&m, ":BOOT", 120, 2), 5);
    }

    #[test]
    fn test_always_makes_progress() {
        let m = FixedAdvance::GFX;
        assert_eq!(fit_within_width(&m, "WIDE", 5, 2), 1);
        assert_eq!(fit_within_width(&m, "WIDE", 0, 2), 1);
        assert_eq!(fit_within_width(&m, "WIDE", -10, 2), 1);
    }

    #[test]
    fn test_multibyte_prefix_stays_on_char_boundary() {
        let m = FixedAdvance::GFX;
        let token = "ÄÖÜ";
        let len = fit_within_width(&m, token, 30, 2);
        assert_eq!(&token[..len], "ÄÖ");
        assert_eq!(fit_within_width(&m, token, 1, 2), 'Ä'.len_utf8());
    }

    #[test]
    fn test_empty_token() {
        assert_eq!(fit_within_width(&FixedAdvance::GFX, "", 100, 2), 0);
    }

    #[test]
    fn test_clip_to_capacity() {
        assert_eq!(clip_to_capacity("abcdef", 4), "abcd");
        assert_eq!(clip_to_capacity("abc", 4), "abc");
        // 'é' is two bytes; clipping at 2 would split it
        assert_eq!(clip_to_capacity("aé", 2), "a");
    }
}
