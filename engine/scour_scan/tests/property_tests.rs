#![allow(clippy::unwrap_used)]
//! Property tests for the rewrite guarantees.

use proptest::prelude::*;
use scour_scan::Scanner;

proptest! {
    /// Inputs with no whitespace, strings, or comment markers pass through
    /// untouched.
    #[test]
    fn identity_on_plain_words(input in "[a-z0-9_]{1,40}") {
        let scanner = Scanner::with_defaults();
        prop_assert_eq!(scanner.minify(&input).unwrap(), input);
    }

    /// Every character of a terminated string literal survives verbatim,
    /// delimiters included, however much whitespace it contains.
    #[test]
    fn string_contents_survive(content in "[a-z ]{1,20}") {
        let scanner = Scanner::with_defaults();
        let source = format!("x = \"{content}\" ;");
        let out = scanner.minify(&source).unwrap();
        let needle = format!("\"{content}\"");
        prop_assert!(out.contains(&needle));
    }

    /// Comment bodies never reach the output, for either comment kind.
    #[test]
    fn comment_bodies_vanish(body in "q[a-z]{0,16}") {
        let scanner = Scanner::with_defaults();
        let line = format!("x;//{body}\ny");
        prop_assert_eq!(scanner.minify(&line).unwrap(), "x;\ny");
        let block = format!("a/*{body}*/b");
        prop_assert_eq!(scanner.minify(&block).unwrap(), "ab");
    }

    /// Fixed-point behavior over inputs that cannot assemble new comment
    /// markers.
    #[test]
    fn idempotent_on_marker_free_inputs(input in "[ a-z;=(){}\n.]{1,64}") {
        let scanner = Scanner::with_defaults();
        let once = scanner.minify(&input).unwrap();
        if !once.is_empty() {
            let twice = scanner.minify(&once).unwrap();
            prop_assert_eq!(once, twice);
        }
    }
}
