//! Backslash-run lookback.
//!
//! A delimiter-matching character is only a real terminator when the run of
//! `\` characters immediately before it has even length. Both quoted-string
//! scanning and the block recognizer's in-string tracking share this rule;
//! it is a pure function of the text, independent of any recognizer state.

/// Count the maximal run of `\` bytes immediately preceding `pos`.
///
/// `pos` is a byte offset; the run is counted backwards from `pos - 1`.
/// Backslash is ASCII, so byte-wise scanning is UTF-8 safe.
#[inline]
pub fn escape_run(text: &str, pos: usize) -> usize {
    let bytes = text.as_bytes();
    let mut run = 0;
    while run < pos && bytes[pos - run - 1] == b'\\' {
        run += 1;
    }
    run
}

/// Returns `true` when the character at `pos` is escaped: preceded by an
/// odd-length backslash run.
#[inline]
pub fn is_escaped(text: &str, pos: usize) -> bool {
    escape_run(text, pos) % 2 == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_preceding_backslash() {
        assert_eq!(escape_run(r#"ab""#, 2), 0);
        assert!(!is_escaped(r#"ab""#, 2));
    }

    #[test]
    fn single_backslash_escapes() {
        assert_eq!(escape_run(r#"a\""#, 2), 1);
        assert!(is_escaped(r#"a\""#, 2));
    }

    #[test]
    fn double_backslash_does_not_escape() {
        assert_eq!(escape_run(r#"a\\""#, 3), 2);
        assert!(!is_escaped(r#"a\\""#, 3));
    }

    #[test]
    fn triple_backslash_escapes() {
        assert_eq!(escape_run(r#"a\\\""#, 4), 3);
        assert!(is_escaped(r#"a\\\""#, 4));
    }

    #[test]
    fn run_stops_at_start_of_text() {
        assert_eq!(escape_run(r#"\\"#, 2), 2);
        assert!(!is_escaped(r#"\\"#, 2));
        assert_eq!(escape_run(r#"\"#, 1), 1);
        assert!(is_escaped(r#"\"#, 1));
    }

    #[test]
    fn position_zero_has_no_run() {
        assert_eq!(escape_run("anything", 0), 0);
        assert!(!is_escaped("anything", 0));
    }

    #[test]
    fn run_independent_of_following_character() {
        // The character at `pos` itself is never inspected.
        assert_eq!(escape_run(r#"\\x"#, 2), 2);
        assert_eq!(escape_run(r#"\\'"#, 2), 2);
    }
}
