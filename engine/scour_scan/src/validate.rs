//! Construction-time configuration validation.
//!
//! Conflicting or empty recognizer definitions are rejected here, when the
//! registries are built — a scan never fails because of its configuration.

use thiserror::Error;

use crate::config::ScanConfig;

/// A configuration rejected at registry-construction time.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no string delimiters configured")]
    NoStringDelimiters,
    #[error("string delimiter `{0}` is not ASCII")]
    NonAsciiStringDelimiter(char),
    #[error("duplicate string delimiter `{0}`")]
    DuplicateStringDelimiter(char),
    #[error("string delimiter `{0}` is also listed as a separator")]
    DelimiterIsSeparator(char),
    #[error("comment marker may not be empty")]
    EmptyCommentMarker,
    #[error("comment marker `{0}` contains a line terminator")]
    MarkerContainsLineBreak(String),
    #[error("duplicate comment marker `{0}`")]
    DuplicateCommentMarker(String),
    #[error("comment marker `{marker}` begins with string delimiter `{delimiter}`")]
    MarkerBeginsWithDelimiter { marker: String, delimiter: char },
    #[error("line comment marker `{line}` shadows block comment marker `{block}`")]
    MarkerShadowsBlockComment { line: String, block: String },
    #[error("block pair has identical open and close delimiter `{0}`")]
    BlockPairIdentical(char),
    #[error("block delimiter `{0}` is also a string delimiter")]
    BlockDelimiterIsStringDelimiter(char),
}

/// Check every cross-definition constraint the registries rely on.
pub(crate) fn validate(config: &ScanConfig) -> Result<(), ConfigError> {
    if config.string_delimiters.is_empty() {
        return Err(ConfigError::NoStringDelimiters);
    }
    for (i, &delim) in config.string_delimiters.iter().enumerate() {
        if !delim.is_ascii() {
            return Err(ConfigError::NonAsciiStringDelimiter(delim));
        }
        if config.string_delimiters[..i].contains(&delim) {
            return Err(ConfigError::DuplicateStringDelimiter(delim));
        }
        if config.separators.contains(&delim) {
            return Err(ConfigError::DelimiterIsSeparator(delim));
        }
    }

    let begin_markers: Vec<&String> = config
        .line_comments
        .iter()
        .chain(config.block_comments.iter().map(|(begin, _)| begin))
        .collect();
    let all_markers = begin_markers
        .iter()
        .copied()
        .chain(config.block_comments.iter().map(|(_, end)| end));
    for marker in all_markers {
        if marker.is_empty() {
            return Err(ConfigError::EmptyCommentMarker);
        }
        if marker.contains(['\n', '\r']) {
            return Err(ConfigError::MarkerContainsLineBreak(marker.clone()));
        }
    }
    for (i, marker) in begin_markers.iter().enumerate() {
        if begin_markers[..i].contains(marker) {
            return Err(ConfigError::DuplicateCommentMarker((*marker).clone()));
        }
        if let Some(first) = marker.chars().next() {
            if config.string_delimiters.contains(&first) {
                return Err(ConfigError::MarkerBeginsWithDelimiter {
                    marker: (*marker).clone(),
                    delimiter: first,
                });
            }
        }
    }
    // Line comments precede block comments in registry order, so a line
    // marker that prefixes a block begin marker would always win.
    for line in &config.line_comments {
        for (begin, _) in &config.block_comments {
            if begin.starts_with(line.as_str()) {
                return Err(ConfigError::MarkerShadowsBlockComment {
                    line: line.clone(),
                    block: begin.clone(),
                });
            }
        }
    }

    for &(open, close) in &config.blocks {
        if open == close {
            return Err(ConfigError::BlockPairIdentical(open));
        }
        for c in [open, close] {
            if config.string_delimiters.contains(&c) {
                return Err(ConfigError::BlockDelimiterIsStringDelimiter(c));
            }
        }
    }

    Ok(())
}
