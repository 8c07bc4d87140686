//! The enumerable scan configuration.
//!
//! A config lists the markers and character classes the registries are
//! built from. It is plain data with serde derives so host applications
//! can load it from their own settings formats; validation happens in
//! [`Scanner::new`](crate::Scanner::new), never at scan time.

use serde::{Deserialize, Serialize};

/// Static configuration for one [`Scanner`](crate::Scanner).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Markers opening a comment that runs to the next line terminator.
    pub line_comments: Vec<String>,
    /// `(begin, end)` marker pairs for bracketed comments.
    pub block_comments: Vec<(String, String)>,
    /// Separator-class characters: tokenized as single-character tokens,
    /// and the class whitespace collapses toward when minifying.
    pub separators: Vec<char>,
    /// String literal delimiters. Must be ASCII.
    pub string_delimiters: Vec<char>,
    /// `(open, close)` pairs delimiting recursively tokenized blocks.
    pub blocks: Vec<(char, char)>,
}

impl ScanConfig {
    /// The JavaScript-flavored configuration the engine ships with:
    /// `//` and legacy `<!--` line comments, `/* */` block comments,
    /// `"`/`'` strings, the usual punctuation separators, and `{}` blocks.
    pub fn javascript() -> Self {
        Self {
            line_comments: vec!["//".to_owned(), "<!--".to_owned()],
            block_comments: vec![("/*".to_owned(), "*/".to_owned())],
            separators: vec![
                '{', '}', '(', ')', '[', ']', ';', ',', '.', '=', '+', '-', '*', '/', '%', '<',
                '>', '!', '&', '|', '?', ':', '^', '~',
            ],
            string_delimiters: vec!['"', '\''],
            blocks: vec![('{', '}')],
        }
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self::javascript()
    }
}
