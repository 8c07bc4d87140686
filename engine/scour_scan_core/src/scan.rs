//! The single-pass scan driver.
//!
//! One left-to-right traversal serves both modes. From the idle state the
//! driver asks the registry who owns the current position; an owning
//! recognizer's claim is scanned to its end condition, then the driver
//! resumes at the boundary. Characters nobody claims fall to the registry's
//! default policy, one character at a time.
//!
//! - [`tokenize`] collects claims into a [`Node`] tree under a root node.
//! - [`rewrite`] appends each claim's emitted fragment to an output string
//!   in emission order; fragments are never reordered or buffered out of
//!   sequence.
//!
//! Literal bodies (strings, comments) are skipped with memchr rather than
//! walked character by character; the end positions found this way satisfy
//! the recognizer's own `is_end` predicate, which remains the contract.
//!
//! A claim still open at end of input fails the whole scan — callers never
//! receive a truncated tree or a half-rewritten string.

use crate::cursor::{char_at, next_pos, Cursor};
use crate::error::{LiteralKind, ScanError};
use crate::escape::is_escaped;
use crate::node::{Node, NodeKind, Span};
use crate::recognizer::{Claim, EmitPolicy, Recognizer};
use crate::registry::{CharSet, DefaultPolicy, Registry};

/// Tokenize `text` into a root node whose children cover the input in
/// order. Rejects empty input.
pub fn tokenize(text: &str, registry: &Registry) -> Result<Node, ScanError> {
    if text.is_empty() {
        return Err(ScanError::EmptyInput);
    }
    let children = tokenize_fragment(text, registry)?;
    Ok(Node {
        kind: NodeKind::Root,
        span: Span::new(0, text.len()),
        children,
    })
}

/// Tokenize a slice into a flat node list.
///
/// This is the driver entry point recognizers use to tokenize their own
/// interior (block recursion); it is a plain function of text and registry,
/// so no recognizer needs to know about tree depth. An empty slice yields
/// an empty list.
pub fn tokenize_fragment(text: &str, registry: &Registry) -> Result<Vec<Node>, ScanError> {
    let mut nodes: Vec<Node> = Vec::new();
    let mut cursor = Cursor::new(text);
    while !cursor.is_eof() {
        let start = cursor.pos();
        if let Some((rec, mut claim)) = registry.match_at(text, start) {
            let end = claim_end(text, &cursor, rec, &mut claim)?;
            let mut node = Node::leaf(rec.node_kind(), Span::new(start, end));
            if let Recognizer::Block { open, close, .. } = rec {
                let interior = Span::new(start + open.len_utf8(), end - close.len_utf8());
                let mut children =
                    tokenize_fragment(&text[interior.start..interior.end], registry)
                        .map_err(|err| err.rebase(interior.start))?;
                for child in &mut children {
                    child.shift(interior.start);
                }
                node.children = children;
            }
            nodes.push(node);
            cursor.seek(end);
        } else {
            // The default owns exactly one character; adjacent unclaimed
            // characters coalesce into a single text node.
            let end = next_pos(text, start);
            match nodes.last_mut() {
                Some(prev) if prev.kind == NodeKind::Text && prev.span.end == start => {
                    prev.span.end = end;
                }
                _ => nodes.push(Node::leaf(NodeKind::Text, Span::new(start, end))),
            }
            cursor.seek(end);
        }
    }
    Ok(nodes)
}

/// Rewrite `text` in one pass: claimed spans emit per their recognizer's
/// policy, unclaimed characters per the registry's default policy. Rejects
/// empty input.
pub fn rewrite(text: &str, registry: &Registry) -> Result<String, ScanError> {
    if text.is_empty() {
        return Err(ScanError::EmptyInput);
    }
    let mut out = String::with_capacity(text.len());
    let mut last: Option<char> = None;
    let mut cursor = Cursor::new(text);
    while !cursor.is_eof() {
        let start = cursor.pos();
        if let Some((rec, mut claim)) = registry.match_at(text, start) {
            let end = claim_end(text, &cursor, rec, &mut claim)?;
            match rec.emit_policy() {
                EmitPolicy::Verbatim => {
                    out.push_str(&text[start..end]);
                    last = text[start..end].chars().next_back().or(last);
                }
                EmitPolicy::Elide => {}
            }
            cursor.seek(end);
        } else {
            let end = next_pos(text, start);
            match registry.default_policy() {
                DefaultPolicy::TextRun => {
                    out.push_str(&text[start..end]);
                    last = text[start..end].chars().next_back().or(last);
                }
                DefaultPolicy::Collapse(separators) => {
                    collapse_step(text, start, end, separators, &mut out, &mut last);
                }
            }
            cursor.seek(end);
        }
    }
    Ok(out)
}

/// Scan an owned claim to its end position.
///
/// Literal kinds take memchr fast paths; the generic per-character loop
/// handles stateful and non-ASCII claims. Either way the returned position
/// is the one at which the recognizer's `is_end` fires.
fn claim_end(
    text: &str,
    cursor: &Cursor<'_>,
    rec: &Recognizer,
    claim: &mut Claim,
) -> Result<usize, ScanError> {
    let start = claim.start;
    match rec {
        Recognizer::Whitespace => {
            let mut pos = next_pos(text, start);
            while !rec.is_end(text, pos, claim) {
                pos = next_pos(text, pos);
            }
            Ok(pos)
        }
        Recognizer::CharToken(_) => Ok(next_pos(text, start)),
        Recognizer::QuotedString { delimiter } if delimiter.is_ascii() => {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "guard restricts the delimiter to ASCII"
            )]
            let byte = *delimiter as u8;
            // Candidates at the opener or the first interior position are
            // never a close; escaped candidates are skipped.
            for candidate in cursor.byte_positions(byte, start + 2) {
                if !is_escaped(text, candidate) {
                    let end = candidate + 1;
                    debug_assert!(rec.is_end(text, end, claim));
                    return Ok(end);
                }
            }
            Err(ScanError::UnterminatedLiteral {
                kind: LiteralKind::Str,
                start,
            })
        }
        Recognizer::QuotedString { .. } => scan_until_end(text, rec, claim, LiteralKind::Str),
        Recognizer::LineComment { .. } => match cursor.find_line_break(start) {
            Some(pos) => {
                debug_assert!(rec.is_end(text, pos, claim));
                Ok(pos)
            }
            None => Err(ScanError::UnterminatedLiteral {
                kind: LiteralKind::LineComment,
                start,
            }),
        },
        Recognizer::BlockComment { begin, end } => {
            match cursor.find_str(end, start + begin.len()) {
                Some(found) => {
                    let end_pos = found + end.len();
                    debug_assert!(rec.is_end(text, end_pos, claim));
                    Ok(end_pos)
                }
                None => Err(ScanError::UnterminatedLiteral {
                    kind: LiteralKind::BlockComment,
                    start,
                }),
            }
        }
        Recognizer::Block { .. } => scan_until_end(text, rec, claim, LiteralKind::Block),
    }
}

/// Generic owned-phase loop: consult `is_end` once per character boundary,
/// in order, until it fires or the input runs out.
fn scan_until_end(
    text: &str,
    rec: &Recognizer,
    claim: &mut Claim,
    kind: LiteralKind,
) -> Result<usize, ScanError> {
    let mut pos = next_pos(text, claim.start);
    loop {
        if rec.is_end(text, pos, claim) {
            return Ok(pos);
        }
        if pos >= text.len() {
            return Err(ScanError::UnterminatedLiteral {
                kind,
                start: claim.start,
            });
        }
        pos = next_pos(text, pos);
    }
}

/// Whitespace-collapsing emit for one unclaimed character.
///
/// `last` (the most recently emitted character) and `next` (the raw input
/// character after this one) decide the fate of a whitespace character. A
/// whitespace character adjacent to a separator, a whitespace character,
/// or an input/output boundary is collapsible and is swallowed — except
/// that a line break (`\n`) directly after a separator or at output start
/// emits exactly one line-replacement `\n`. Non-collapsible whitespace
/// becomes a single plain space.
///
/// Break emission is justified only by the previously *emitted* character:
/// anything on the input side (a following separator, a run of spaces) may
/// be swallowed or belong to a deleted comment, so a break justified by it
/// would not survive a second pass. Justifying from the output side makes
/// rewrite output a fixed point, and also deduplicates consecutive breaks
/// (`\n` is not separator-class).
fn collapse_step(
    text: &str,
    pos: usize,
    end: usize,
    separators: &CharSet,
    out: &mut String,
    last: &mut Option<char>,
) {
    let Some(ch) = char_at(text, pos) else {
        return;
    };
    if !ch.is_whitespace() {
        out.push(ch);
        *last = Some(ch);
        return;
    }
    let after_separator = last.is_none_or(|c| separators.contains(c));
    let next = char_at(text, end);
    let collapsible = after_separator
        || next.is_none_or(|c| separators.contains(c))
        || last.is_some_and(char::is_whitespace)
        || next.is_some_and(char::is_whitespace);
    if collapsible {
        if ch == '\n' && after_separator {
            out.push('\n');
            *last = Some('\n');
        }
    } else {
        out.push(' ');
        *last = Some(' ');
    }
}

impl ScanError {
    /// Rebase an interior-relative error position onto the original input.
    fn rebase(self, delta: usize) -> Self {
        match self {
            ScanError::UnterminatedLiteral { kind, start } => ScanError::UnterminatedLiteral {
                kind,
                start: start + delta,
            },
            ScanError::EmptyInput => ScanError::EmptyInput,
        }
    }
}
