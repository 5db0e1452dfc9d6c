//! Raw SQL text and the composition operations built on top of it.

use std::collections::HashMap;
use std::fmt;

use crate::error::{ComposeError, ComposeResult};
use crate::fragment::{Composable, Fragment};
use crate::sequence::Sequence;
use crate::template::{self, Piece};

/// A fragment of raw, already-safe SQL text.
///
/// `Literal` is both the leaf for fixed statement text and the entry point
/// for composition: [`format`](Literal::format) expands `{name}` template
/// fields into other fragments, and [`join`](Literal::join) splices the
/// literal between fragments as a separator.
///
/// # Safety
///
/// The wrapped text is rendered verbatim, with no quoting or escaping. Only
/// author-controlled strings belong here. Anything that originates outside
/// the program (user input, config, request data) must arrive as an
/// [`Identifier`](crate::Identifier) or a [`Placeholder`](crate::Placeholder)
/// instead; pasting it into literal text is an injection hole.
///
/// # Example
/// ```
/// use sql_compose::{Composable, Identifier, Literal};
///
/// let q = Literal::new("SELECT {c} FROM {t}").format([
///     ("c", Identifier::new(["x"])?),
///     ("t", Identifier::new(["tbl"])?),
/// ])?;
/// assert_eq!(q.to_sql(), r#"SELECT "x" FROM "tbl""#);
/// # Ok::<(), sql_compose::ComposeError>(())
/// ```
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Literal {
    text: String,
}

impl Literal {
    /// Create a literal from trusted SQL text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The wrapped SQL text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Expand `{name}` fields in this literal's text into fragments.
    ///
    /// The text is scanned as a template: literal runs become new [`Literal`]
    /// fragments, and each `{name}` field is replaced by the fragment bound
    /// to `name` in `fields`. `{{` and `}}` stand for literal braces. Field
    /// text is an opaque key, so `{t.col}` looks up the key `"t.col"`.
    ///
    /// Fails with a template-syntax error for malformed text (stray braces,
    /// `{n:spec}`, `{n!r}`) and with [`ComposeError::MissingField`] when a
    /// field has no binding. Unused bindings are not an error.
    pub fn format<I, K, V>(&self, fields: I) -> ComposeResult<Sequence>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Fragment>,
    {
        let fields: HashMap<String, Fragment> = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        let pieces = template::scan(&self.text)?;
        let mut items = Vec::with_capacity(pieces.len());
        for piece in pieces {
            match piece {
                Piece::Text(text) => items.push(Fragment::Literal(Literal::new(text))),
                Piece::Field(name) => match fields.get(name) {
                    Some(fragment) => items.push(fragment.clone()),
                    None => return Err(ComposeError::MissingField(name.to_owned())),
                },
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "sql_compose",
            template = %self.text,
            items = items.len(),
            "expanded template"
        );

        Ok(Sequence::from(items))
    }

    /// Join fragments with this literal as the separator.
    ///
    /// Produces a sequence alternating input fragments and copies of `self`:
    /// empty input gives an empty sequence, a single fragment passes through
    /// alone, and N fragments yield `2N - 1` items. The input is consumed in
    /// a single pass, so any iterator works.
    #[must_use]
    pub fn join<I>(&self, fragments: I) -> Sequence
    where
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        let mut iter = fragments.into_iter();
        let Some(first) = iter.next() else {
            return Sequence::default();
        };

        let (lower, _) = iter.size_hint();
        // First item plus a separator/item pair for each remaining one.
        let mut items = Vec::with_capacity(1 + lower.saturating_mul(2));
        items.push(first.into());
        for fragment in iter {
            items.push(Fragment::Literal(self.clone()));
            items.push(fragment.into());
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(target: "sql_compose", items = items.len(), "joined fragments");

        Sequence::from(items)
    }
}

impl Composable for Literal {
    fn write_sql(&self, out: &mut String) {
        out.push_str(&self.text);
    }

    fn to_sql(&self) -> String {
        self.text.clone()
    }
}

impl fmt::Debug for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Literal").field(&self.text).finish()
    }
}

impl From<&str> for Literal {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Literal {
    fn from(text: String) -> Self {
        Self { text }
    }
}

impl From<Literal> for String {
    fn from(literal: Literal) -> Self {
        literal.text
    }
}
