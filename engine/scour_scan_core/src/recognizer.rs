//! Recognizer strategies and the per-claim state they thread through a scan.
//!
//! A recognizer decides three things: whether it begins at a position
//! ([`Recognizer::begin`]), whether its claim ends at a position
//! ([`Recognizer::is_end`]), and what its span contributes to rewritten
//! output ([`Recognizer::emit_policy`]). Recognizer values themselves are
//! immutable configuration — anything mutable during a scan (a string's
//! opening position, a block's nesting depth) lives in the [`Claim`] record
//! returned by `begin`, so one registry is safely shared across concurrent
//! scans.
//!
//! # End conditions and `is_absolute_end`
//!
//! `is_end(p)` conditions come in two families. *Peeking* conditions look at
//! the character **at** `p`, which stays unowned: whitespace ends at the
//! first non-whitespace character, a line comment at its line terminator,
//! and that character is rescanned and may immediately begin a new claim —
//! these report `is_absolute_end() == false`. *Consuming* conditions look at
//! characters **before** `p`, which are owned: a string's closing delimiter,
//! a block comment's end marker — the ending character can never begin
//! another claim, and these report `is_absolute_end() == true`. Either way
//! the driver resumes at `p`; the flag records which side of the boundary
//! the deciding character fell on.

use crate::cursor::{char_at, char_before};
use crate::escape::is_escaped;
use crate::node::NodeKind;

/// What a recognizer's span contributes to rewrite output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmitPolicy {
    /// The owned span passes through unchanged, delimiters included.
    Verbatim,
    /// The owned span is deleted entirely.
    Elide,
}

/// Per-claim mutable state, created by [`Recognizer::begin`] and owned by
/// one scan invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Claim {
    /// Byte offset where the claim began.
    pub start: usize,
    state: ClaimState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum ClaimState {
    None,
    /// Delimiter-tracking state for a block claim: nesting depth plus the
    /// string delimiter currently suspending depth counting, if any.
    Block { depth: usize, in_string: Option<char> },
}

impl Claim {
    fn plain(start: usize) -> Self {
        Self {
            start,
            state: ClaimState::None,
        }
    }

    fn block(start: usize) -> Self {
        Self {
            start,
            state: ClaimState::Block {
                depth: 0,
                in_string: None,
            },
        }
    }
}

/// One scanning strategy. The registry holds these in priority order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Recognizer {
    /// A run of Unicode whitespace.
    Whitespace,
    /// One exact separator character.
    CharToken(char),
    /// A quoted string literal. The delimiter must be ASCII.
    QuotedString { delimiter: char },
    /// A comment running from any of `markers` to the next line terminator
    /// (which is not owned by the comment).
    LineComment { markers: Vec<String> },
    /// A comment bracketed by `begin` and `end` markers.
    BlockComment { begin: String, end: String },
    /// A delimited block whose interior is re-tokenized recursively.
    /// Occurrences of `open`/`close` inside a string literal (per
    /// `string_delimiters`) do not perturb the nesting depth.
    Block {
        open: char,
        close: char,
        string_delimiters: Vec<char>,
    },
}

impl Recognizer {
    /// Returns a fresh [`Claim`] if this recognizer takes ownership at
    /// `pos`, or `None` if it does not begin there.
    pub fn begin(&self, text: &str, pos: usize) -> Option<Claim> {
        match self {
            Recognizer::Whitespace => {
                char_at(text, pos).filter(|c| c.is_whitespace())?;
                Some(Claim::plain(pos))
            }
            Recognizer::CharToken(token) => {
                char_at(text, pos).filter(|c| c == token)?;
                Some(Claim::plain(pos))
            }
            Recognizer::QuotedString { delimiter } => {
                char_at(text, pos).filter(|c| c == delimiter)?;
                Some(Claim::plain(pos))
            }
            Recognizer::LineComment { markers } => {
                let rest = text.get(pos..)?;
                markers
                    .iter()
                    .any(|m| rest.starts_with(m.as_str()))
                    .then(|| Claim::plain(pos))
            }
            Recognizer::BlockComment { begin, .. } => {
                let rest = text.get(pos..)?;
                rest.starts_with(begin.as_str()).then(|| Claim::plain(pos))
            }
            Recognizer::Block { open, .. } => {
                char_at(text, pos).filter(|c| c == open)?;
                Some(Claim::block(pos))
            }
        }
    }

    /// Returns `true` when the claim that began at `claim.start` ends at
    /// `pos`. The driver calls this exactly once per position, in order,
    /// after consuming the character ending at `pos`.
    pub fn is_end(&self, text: &str, pos: usize, claim: &mut Claim) -> bool {
        match self {
            Recognizer::Whitespace => char_at(text, pos).is_none_or(|c| !c.is_whitespace()),
            Recognizer::CharToken(_) => true,
            Recognizer::QuotedString { delimiter } => {
                // Candidate close is the character ending at `pos`. The
                // opening delimiter and the position immediately after it
                // are never a close, so a zero-length literal cannot be
                // terminated by the very next character.
                let Some(candidate) = pos.checked_sub(delimiter.len_utf8()) else {
                    return false;
                };
                candidate > claim.start + delimiter.len_utf8()
                    && char_at(text, candidate) == Some(*delimiter)
                    && !is_escaped(text, candidate)
            }
            Recognizer::LineComment { .. } => {
                matches!(text.as_bytes().get(pos), Some(b'\n' | b'\r'))
            }
            Recognizer::BlockComment { begin, end } => {
                pos >= claim.start + begin.len() + end.len()
                    && text
                        .get(..pos)
                        .is_some_and(|head| head.ends_with(end.as_str()))
            }
            Recognizer::Block {
                open,
                close,
                string_delimiters,
            } => {
                let Some(c) = char_before(text, pos) else {
                    return false;
                };
                let ClaimState::Block { depth, in_string } = &mut claim.state else {
                    return false;
                };
                if let Some(delim) = *in_string {
                    if c == delim && !is_escaped(text, pos - c.len_utf8()) {
                        *in_string = None;
                    }
                    false
                } else if c == *open {
                    *depth += 1;
                    false
                } else if c == *close {
                    *depth -= 1;
                    *depth == 0
                } else if string_delimiters.contains(&c) {
                    *in_string = Some(c);
                    false
                } else {
                    false
                }
            }
        }
    }

    /// Whether the character satisfying the end condition was owned by the
    /// claim (consuming end) rather than peeked at (see module docs).
    pub fn is_absolute_end(&self) -> bool {
        match self {
            Recognizer::Whitespace | Recognizer::CharToken(_) | Recognizer::LineComment { .. } => {
                false
            }
            Recognizer::QuotedString { .. }
            | Recognizer::BlockComment { .. }
            | Recognizer::Block { .. } => true,
        }
    }

    /// Rewrite contribution of the owned span.
    pub fn emit_policy(&self) -> EmitPolicy {
        match self {
            Recognizer::LineComment { .. } | Recognizer::BlockComment { .. } => EmitPolicy::Elide,
            Recognizer::Whitespace
            | Recognizer::CharToken(_)
            | Recognizer::QuotedString { .. }
            | Recognizer::Block { .. } => EmitPolicy::Verbatim,
        }
    }

    /// Node kind produced in tokenizing mode.
    pub fn node_kind(&self) -> NodeKind {
        match self {
            Recognizer::Whitespace => NodeKind::Whitespace,
            Recognizer::CharToken(_) => NodeKind::Token,
            Recognizer::QuotedString { .. } => NodeKind::Str,
            Recognizer::LineComment { .. } => NodeKind::LineComment,
            Recognizer::BlockComment { .. } => NodeKind::BlockComment,
            Recognizer::Block { .. } => NodeKind::Block,
        }
    }

}
