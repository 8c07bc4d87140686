//! Configuration surface and scanning facade for scour.
//!
//! [`ScanConfig`] is the enumerable configuration the engine exposes: which
//! markers open comments, which characters are separators, which are string
//! delimiters, which pairs delimit blocks. [`Scanner::new`] validates a
//! config once, builds the two canonical recognizer registries (tokenizer
//! and minifier), and the resulting value is immutable and freely shared
//! across threads — every scan call gets fresh per-scan state from
//! `scour_scan_core`.
//!
//! ```
//! use scour_scan::Scanner;
//!
//! let scanner = Scanner::with_defaults();
//! let out = scanner.minify("var x = 1;  // answer\n")?;
//! assert_eq!(out, "var x=1;\n");
//! # Ok::<(), scour_scan::Error>(())
//! ```

pub mod config;
pub mod scanner;
pub mod validate;

pub use config::ScanConfig;
pub use scanner::{Error, Scanner};
pub use validate::ConfigError;

// Result types callers consume, re-exported from the core engine.
pub use scour_scan_core::{LiteralKind, Node, NodeKind, ScanError, Span};
