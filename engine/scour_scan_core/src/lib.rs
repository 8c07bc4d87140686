//! Recognizer-driven text scanning for scour.
//!
//! One left-to-right pass over an immutable `&str`, driven by an ordered
//! [`Registry`] of [`Recognizer`] strategies. Each strategy decides whether
//! it begins at a position, where its claim ends, and what (if anything) it
//! contributes to rewritten output. The same pass serves two sinks:
//!
//! - [`tokenize`] builds a hierarchical [`Node`] tree;
//! - [`rewrite`] produces minified text — comment spans are deleted, string
//!   literals pass through verbatim, and runs of whitespace collapse under
//!   the registry's default policy.
//!
//! The registry is immutable after construction and safe to share across
//! concurrent scans: all per-claim state (a string's opening position, a
//! block's nesting depth) lives in a [`Claim`] record owned by one scan
//! invocation.
//!
//! This crate is standalone (zero `scour_*` dependencies). Canonical
//! registry construction and configuration validation live in `scour_scan`.

pub mod cursor;
pub mod error;
pub mod escape;
pub mod node;
pub mod recognizer;
pub mod registry;
pub mod scan;

pub use cursor::Cursor;
pub use error::{LiteralKind, ScanError};
pub use escape::{escape_run, is_escaped};
pub use node::{Node, NodeKind, Span};
pub use recognizer::{Claim, EmitPolicy, Recognizer};
pub use registry::{CharSet, DefaultPolicy, Registry};
pub use scan::{rewrite, tokenize, tokenize_fragment};
