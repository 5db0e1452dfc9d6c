//! Ordered collections of fragments.

use std::fmt;

use crate::fragment::{Composable, Fragment};

/// An ordered, immutable collection of fragments, rendered by concatenation.
///
/// A `Sequence` owns its children outright. It is normally produced by
/// [`Literal::format`](crate::Literal::format) and
/// [`Literal::join`](crate::Literal::join) rather than built by hand,
/// though nothing stops direct construction.
///
/// # Example
/// ```
/// use sql_compose::{Composable, Fragment, Identifier, Literal, Sequence};
///
/// let seq = Sequence::new([
///     Fragment::from(Literal::new("SELECT * FROM ")),
///     Fragment::from(Identifier::new(["users"])?),
/// ]);
/// assert_eq!(seq.to_sql(), r#"SELECT * FROM "users""#);
/// # Ok::<(), sql_compose::ComposeError>(())
/// ```
#[derive(Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Sequence {
    items: Vec<Fragment>,
}

impl Sequence {
    /// Create a sequence from an ordered collection of fragments.
    pub fn new<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Fragment>,
    {
        Self {
            items: items.into_iter().map(Into::into).collect(),
        }
    }

    /// The child fragments, in render order.
    pub fn items(&self) -> &[Fragment] {
        &self.items
    }

    /// Get the current fragment count.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the child fragments.
    pub fn iter(&self) -> std::slice::Iter<'_, Fragment> {
        self.items.iter()
    }
}

impl Composable for Sequence {
    fn write_sql(&self, out: &mut String) {
        for item in &self.items {
            item.write_sql(out);
        }
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Sequence").field(&self.items).finish()
    }
}

impl From<Vec<Fragment>> for Sequence {
    fn from(items: Vec<Fragment>) -> Self {
        Self { items }
    }
}

impl FromIterator<Fragment> for Sequence {
    fn from_iter<I: IntoIterator<Item = Fragment>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl From<Sequence> for Vec<Fragment> {
    fn from(seq: Sequence) -> Self {
        seq.items
    }
}

impl IntoIterator for Sequence {
    type Item = Fragment;
    type IntoIter = std::vec::IntoIter<Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = &'a Fragment;
    type IntoIter = std::slice::Iter<'a, Fragment>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
