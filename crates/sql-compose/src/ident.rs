//! Safe SQL identifier handling.
//!
//! This module provides [`Identifier`] which represents a SQL identifier
//! (schema/table/column), built from one or more dot-joined parts.
//!
//! - Every part renders quoted: `"part"`, with embedded `"` escaped as `""`
//! - Parts may contain any characters; quoting is what makes them safe
//!
//! # Example
//! ```
//! use sql_compose::{Composable, Identifier};
//!
//! let t = Identifier::new(["public", "users"])?;
//! assert_eq!(t.to_sql(), r#""public"."users""#);
//! # Ok::<(), sql_compose::ComposeError>(())
//! ```

use std::fmt;

use crate::error::{ComposeError, ComposeResult};
use crate::fragment::Composable;

/// A SQL identifier (column, table, or schema name).
///
/// Holds one or more name parts; rendering joins them with `.` and quotes
/// each one, so the output is never interpreted as a keyword or operator.
/// Values that arrive from outside the program (user input, config files)
/// belong here rather than in [`Literal`](crate::Literal) text.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "Vec<String>", into = "Vec<String>"))]
pub struct Identifier {
    parts: Vec<String>,
}

impl Identifier {
    /// Create an identifier from one or more name parts.
    ///
    /// Returns [`ComposeError::EmptyIdentifier`] when `parts` yields nothing.
    /// Individual parts are taken as-is; an empty part renders as `""`.
    pub fn new<I, S>(parts: I) -> ComposeResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let parts: Vec<String> = parts.into_iter().map(Into::into).collect();
        if parts.is_empty() {
            return Err(ComposeError::EmptyIdentifier);
        }
        Ok(Self { parts })
    }

    /// Create a single-part identifier.
    ///
    /// One part always satisfies the non-empty rule, so this cannot fail.
    pub fn single(part: impl Into<String>) -> Self {
        Self {
            parts: vec![part.into()],
        }
    }

    /// The name parts this identifier was built from.
    pub fn parts(&self) -> &[String] {
        &self.parts
    }
}

impl Composable for Identifier {
    fn write_sql(&self, out: &mut String) {
        for (i, part) in self.parts.iter().enumerate() {
            if i > 0 {
                out.push('.');
            }
            out.push('"');
            for ch in part.chars() {
                if ch == '"' {
                    out.push('"');
                    out.push('"');
                } else {
                    out.push(ch);
                }
            }
            out.push('"');
        }
    }

    fn to_sql(&self) -> String {
        let mut cap = self.parts.len().saturating_sub(1); // dots
        for part in &self.parts {
            cap += part.len() + 2; // surrounding quotes (escapes may add more)
        }
        let mut out = String::with_capacity(cap);
        self.write_sql(&mut out);
        out
    }
}

impl fmt::Debug for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut t = f.debug_tuple("Identifier");
        for part in &self.parts {
            t.field(part);
        }
        t.finish()
    }
}

impl TryFrom<Vec<String>> for Identifier {
    type Error = ComposeError;

    fn try_from(parts: Vec<String>) -> ComposeResult<Self> {
        Self::new(parts)
    }
}

impl From<Identifier> for Vec<String> {
    fn from(ident: Identifier) -> Self {
        ident.parts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ident_single() {
        let ident = Identifier::new(["users"]).unwrap();
        assert_eq!(ident.to_sql(), r#""users""#);
    }

    #[test]
    fn ident_dotted() {
        let ident = Identifier::new(["public", "users"]).unwrap();
        assert_eq!(ident.to_sql(), r#""public"."users""#);
    }

    #[test]
    fn ident_three_parts() {
        let ident = Identifier::new(["db", "schema", "col"]).unwrap();
        assert_eq!(ident.to_sql(), r#""db"."schema"."col""#);
    }

    #[test]
    fn ident_quote_doubling() {
        let ident = Identifier::new([r#"has"quote"#]).unwrap();
        assert_eq!(ident.to_sql(), r#""has""quote""#);
    }

    #[test]
    fn ident_keyword_stays_quoted() {
        // Quoting is unconditional, so reserved words are fine as names.
        let ident = Identifier::new(["select"]).unwrap();
        assert_eq!(ident.to_sql(), r#""select""#);
    }

    #[test]
    fn ident_empty_part_renders_empty_quotes() {
        let ident = Identifier::new([""]).unwrap();
        assert_eq!(ident.to_sql(), r#""""#);
    }

    #[test]
    fn ident_rejects_no_parts() {
        let err = Identifier::new(Vec::<String>::new()).unwrap_err();
        assert_eq!(err, ComposeError::EmptyIdentifier);
    }

    #[test]
    fn ident_single_matches_one_part_new() {
        let a = Identifier::single("users");
        let b = Identifier::new(["users"]).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_sql(), r#""users""#);
    }

    #[test]
    fn ident_debug_lists_parts() {
        let ident = Identifier::new(["a", "b"]).unwrap();
        assert_eq!(format!("{ident:?}"), r#"Identifier("a", "b")"#);
    }

    #[test]
    fn ident_parts_roundtrip() {
        let ident = Identifier::new(["a", "b"]).unwrap();
        assert_eq!(ident.parts(), ["a", "b"]);
        assert_eq!(Vec::<String>::from(ident), vec!["a", "b"]);
    }
}
