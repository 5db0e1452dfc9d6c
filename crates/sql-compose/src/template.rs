//! Template scanning for [`Literal::format`](crate::Literal::format).
//!
//! A template is plain SQL text with `{name}` fields marking substitution
//! points. `{{` and `}}` stand for literal braces. Field text is an opaque
//! lookup key: it is never parsed further, so `{t.col}` is the single key
//! `"t.col"`. Format specifications (`{n:spec}`) and conversion flags
//! (`{n!r}`) have no meaning in SQL and are rejected outright.

use crate::error::{ComposeError, ComposeResult};

/// One parsed piece of a template string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Piece<'a> {
    /// A run of literal template text, borrowed from the input.
    ///
    /// A doubled brace ends the run after its first brace; every run is a
    /// contiguous slice of the input. Empty runs are not emitted.
    Text(&'a str),
    /// A `{...}` field naming a substitution key.
    Field(&'a str),
}

/// Split `template` into literal runs and substitution fields.
///
/// Scanning works on bytes. Every boundary byte (`{`, `}`, `:`, `!`) is
/// ASCII, so the borrowed slices always fall on UTF-8 char boundaries.
pub(crate) fn scan(template: &str) -> ComposeResult<Vec<Piece<'_>>> {
    let bytes = template.as_bytes();
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        match bytes[pos] {
            b'{' if bytes.get(pos + 1) == Some(&b'{') => {
                // Escape: the run keeps the first brace, the second is dropped.
                pieces.push(Piece::Text(&template[start..pos + 1]));
                pos += 2;
                start = pos;
            }
            b'}' if bytes.get(pos + 1) == Some(&b'}') => {
                pieces.push(Piece::Text(&template[start..pos + 1]));
                pos += 2;
                start = pos;
            }
            b'}' => return Err(ComposeError::StrayBrace(pos)),
            b'{' => {
                if start < pos {
                    pieces.push(Piece::Text(&template[start..pos]));
                }
                let field_start = pos + 1;
                pos = field_start;
                loop {
                    match bytes.get(pos) {
                        Some(&b'}') => break,
                        Some(&b':') => {
                            let name = &template[field_start..pos];
                            return Err(ComposeError::FormatSpec(name.to_owned()));
                        }
                        Some(&b'!') => {
                            let name = &template[field_start..pos];
                            return Err(ComposeError::Conversion(name.to_owned()));
                        }
                        Some(&b'{') => return Err(ComposeError::NestedBrace(pos)),
                        Some(_) => pos += 1,
                        None => return Err(ComposeError::UnterminatedField),
                    }
                }
                pieces.push(Piece::Field(&template[field_start..pos]));
                pos += 1;
                start = pos;
            }
            _ => pos += 1,
        }
    }

    if start < bytes.len() {
        pieces.push(Piece::Text(&template[start..]));
    }

    Ok(pieces)
}
