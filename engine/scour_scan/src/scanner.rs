//! The scanning facade: one validated config, two registries, two modes.

use scour_scan_core::{
    rewrite, tokenize, CharSet, DefaultPolicy, Node, Recognizer, Registry, ScanError,
};
use thiserror::Error;
use tracing::{debug, trace};

use crate::config::ScanConfig;
use crate::validate::{validate, ConfigError};

/// Failure surface of [`Scanner`] operations.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Scan(#[from] ScanError),
}

/// A validated scanning engine.
///
/// Construction validates the config and builds both registries once; the
/// value is immutable afterwards and can be shared by reference across
/// threads — concurrent scans never contend, because all mutable scan
/// state is per-call.
#[derive(Clone, Debug)]
pub struct Scanner {
    tokenizer: Registry,
    minifier: Registry,
}

impl Scanner {
    /// Validate `config` and build the registries.
    pub fn new(config: ScanConfig) -> Result<Self, ConfigError> {
        validate(&config)?;
        Ok(Self::from_validated(&config))
    }

    /// The shipped JavaScript-flavored engine. Infallible: the default
    /// config is known-good (asserted by test).
    pub fn with_defaults() -> Self {
        Self::from_validated(&ScanConfig::default())
    }

    fn from_validated(config: &ScanConfig) -> Self {
        debug!(
            line_markers = config.line_comments.len(),
            block_markers = config.block_comments.len(),
            separators = config.separators.len(),
            delimiters = ?config.string_delimiters,
            "building scan registries"
        );
        Self {
            tokenizer: tokenizer_registry(config),
            minifier: minifier_registry(config),
        }
    }

    /// Tokenize `source` into a node tree.
    pub fn tokenize(&self, source: &str) -> Result<Node, Error> {
        Ok(tokenize(source, &self.tokenizer)?)
    }

    /// Minify `source`: comments deleted, strings verbatim, whitespace
    /// collapsed.
    pub fn minify(&self, source: &str) -> Result<String, Error> {
        trace!(input_len = source.len(), "minify");
        let out = rewrite(source, &self.minifier)?;
        debug!(
            input_len = source.len(),
            output_len = out.len(),
            "minified"
        );
        Ok(out)
    }

    /// The tokenizing registry, for callers embedding the core driver
    /// directly (for example via `scour_scan_core::tokenize_fragment`).
    pub fn tokenizer(&self) -> &Registry {
        &self.tokenizer
    }

    /// The minifying registry.
    pub fn minifier(&self) -> &Registry {
        &self.minifier
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::with_defaults()
    }
}

/// Tokenizer registry: whitespace, blocks, strings, comments, one
/// single-character token per separator; unclaimed characters become text
/// runs.
fn tokenizer_registry(config: &ScanConfig) -> Registry {
    let mut entries = vec![Recognizer::Whitespace];
    for &(open, close) in &config.blocks {
        entries.push(Recognizer::Block {
            open,
            close,
            string_delimiters: config.string_delimiters.clone(),
        });
    }
    for &delimiter in &config.string_delimiters {
        entries.push(Recognizer::QuotedString { delimiter });
    }
    if !config.line_comments.is_empty() {
        entries.push(Recognizer::LineComment {
            markers: config.line_comments.clone(),
        });
    }
    for (begin, end) in &config.block_comments {
        entries.push(Recognizer::BlockComment {
            begin: begin.clone(),
            end: end.clone(),
        });
    }
    for &sep in &config.separators {
        entries.push(Recognizer::CharToken(sep));
    }
    Registry::new(entries, DefaultPolicy::TextRun)
}

/// Minifier registry: strings and comments only — whitespace is left to
/// the collapsing default so separators swallow the space around them.
fn minifier_registry(config: &ScanConfig) -> Registry {
    let mut entries = Vec::new();
    for &delimiter in &config.string_delimiters {
        entries.push(Recognizer::QuotedString { delimiter });
    }
    if !config.line_comments.is_empty() {
        entries.push(Recognizer::LineComment {
            markers: config.line_comments.clone(),
        });
    }
    for (begin, end) in &config.block_comments {
        entries.push(Recognizer::BlockComment {
            begin: begin.clone(),
            end: end.clone(),
        });
    }
    Registry::new(
        entries,
        DefaultPolicy::Collapse(CharSet::from_chars(config.separators.iter().copied())),
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use scour_scan_core::NodeKind;

    #[test]
    fn default_config_builds() {
        let scanner = Scanner::new(ScanConfig::default());
        assert!(scanner.is_ok());
    }

    #[test]
    fn invalid_config_is_rejected_at_construction() {
        let mut config = ScanConfig::default();
        config.separators.push('"');
        assert_eq!(
            Scanner::new(config).map(|_| ()),
            Err(ConfigError::DelimiterIsSeparator('"'))
        );
    }

    #[test]
    fn minify_smoke() {
        let scanner = Scanner::with_defaults();
        assert_eq!(scanner.minify("a   ;   b").unwrap(), "a;b");
    }

    #[test]
    fn tokenize_smoke() {
        let scanner = Scanner::with_defaults();
        let root = scanner.tokenize("x = 1;").unwrap();
        assert_eq!(root.kind, NodeKind::Root);
        assert_eq!(root.children.len(), 6);
    }

    #[test]
    fn registries_are_exposed_for_embedding() {
        let scanner = Scanner::with_defaults();
        let nodes =
            scour_scan_core::tokenize_fragment("a;", scanner.tokenizer()).unwrap();
        assert_eq!(nodes.len(), 2);
        assert!(!scanner.minifier().entries().is_empty());
    }

    #[test]
    fn scanner_error_requires_partial_eq() {
        // Scan errors convert into the facade error.
        let scanner = Scanner::with_defaults();
        let err = scanner.minify("").unwrap_err();
        assert_eq!(err, Error::Scan(ScanError::EmptyInput));
    }

    #[test]
    fn one_scanner_shared_across_threads() {
        let scanner = Scanner::with_defaults();
        let source = "var a = 1; // one\nvar b = 2;";
        let expected = scanner.minify(source).unwrap();
        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| scanner.minify(source).unwrap()))
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }
}
