//! The render capability and the closed set of fragment kinds.

use std::fmt;

use crate::ident::Identifier;
use crate::literal::Literal;
use crate::placeholder::Placeholder;
use crate::sequence::Sequence;

/// Render a value as SQL text.
///
/// Implemented by every fragment kind. [`write_sql`](Composable::write_sql)
/// appends to an existing buffer so composite fragments render without
/// intermediate allocations; [`to_sql`](Composable::to_sql) is the
/// convenience entry point. Rendering is pure: the same fragment always
/// produces the same text.
pub trait Composable {
    /// Append this value's SQL to `out`.
    fn write_sql(&self, out: &mut String);

    /// Render this value as a standalone SQL string.
    fn to_sql(&self) -> String {
        let mut out = String::new();
        self.write_sql(&mut out);
        out
    }
}

/// Any one of the four fragment kinds.
///
/// The set is closed, so matches on `Fragment` are exhaustive. Plain strings
/// do not convert into `Fragment`; raw text must be wrapped as [`Literal`]
/// at the call site, which keeps the trusted-text boundary visible in code.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Fragment {
    /// Raw, trusted SQL text.
    Literal(Literal),
    /// A quoted, dot-joined name.
    Identifier(Identifier),
    /// A named bind-parameter marker.
    Placeholder(Placeholder),
    /// An ordered collection rendered by concatenation.
    Sequence(Sequence),
}

impl Composable for Fragment {
    fn write_sql(&self, out: &mut String) {
        match self {
            Fragment::Literal(lit) => lit.write_sql(out),
            Fragment::Identifier(ident) => ident.write_sql(out),
            Fragment::Placeholder(ph) => ph.write_sql(out),
            Fragment::Sequence(seq) => seq.write_sql(out),
        }
    }

    fn to_sql(&self) -> String {
        match self {
            Fragment::Literal(lit) => lit.to_sql(),
            Fragment::Identifier(ident) => ident.to_sql(),
            Fragment::Placeholder(ph) => ph.to_sql(),
            Fragment::Sequence(seq) => seq.to_sql(),
        }
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Fragment::Literal(lit) => lit.fmt(f),
            Fragment::Identifier(ident) => ident.fmt(f),
            Fragment::Placeholder(ph) => ph.fmt(f),
            Fragment::Sequence(seq) => seq.fmt(f),
        }
    }
}

impl From<Literal> for Fragment {
    fn from(lit: Literal) -> Self {
        Fragment::Literal(lit)
    }
}

impl From<Identifier> for Fragment {
    fn from(ident: Identifier) -> Self {
        Fragment::Identifier(ident)
    }
}

impl From<Placeholder> for Fragment {
    fn from(ph: Placeholder) -> Self {
        Fragment::Placeholder(ph)
    }
}

impl From<Sequence> for Fragment {
    fn from(seq: Sequence) -> Self {
        Fragment::Sequence(seq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_renders_each_kind() {
        let cases: Vec<(Fragment, &str)> = vec![
            (Literal::new("SELECT 1").into(), "SELECT 1"),
            (Identifier::new(["t"]).unwrap().into(), r#""t""#),
            (Placeholder::new("x").unwrap().into(), ":x"),
            (
                Sequence::new([Literal::new("a"), Literal::new("b")]).into(),
                "ab",
            ),
        ];
        for (fragment, expected) in cases {
            assert_eq!(fragment.to_sql(), expected);
            let mut out = String::from(">> ");
            fragment.write_sql(&mut out);
            assert_eq!(out, format!(">> {expected}"));
        }
    }

    #[test]
    fn fragment_debug_delegates_to_inner() {
        let fragment = Fragment::from(Placeholder::new("id").unwrap());
        assert_eq!(format!("{fragment:?}"), r#"Placeholder("id")"#);
    }
}
