//! Named bind-parameter markers.
//!
//! This module provides [`Placeholder`] which renders as `:name`, the named
//! parameter-marker convention. The caller binds a value for `name` through
//! the driver when the statement is executed; the value never appears in the
//! SQL text itself.
//!
//! - Names are ASCII: `[A-Za-z_][A-Za-z0-9_]*`. Unicode letters are rejected
//!   so that accepted names are valid under every driver's binding rules.
//!
//! # Example
//! ```
//! use sql_compose::{Composable, Placeholder};
//!
//! let p = Placeholder::new("user_id")?;
//! assert_eq!(p.to_sql(), ":user_id");
//! # Ok::<(), sql_compose::ComposeError>(())
//! ```

use std::fmt;

use crate::error::{ComposeError, ComposeResult};
use crate::fragment::Composable;

/// A named parameter marker (`:name`).
///
/// Use one wherever a runtime value belongs in the statement. The rendered
/// marker carries only the name; supplying the value at execution time is
/// the caller's side of the contract.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct Placeholder {
    name: String,
}

impl Placeholder {
    /// Create a placeholder for the given bind-parameter name.
    ///
    /// Returns [`ComposeError::InvalidPlaceholder`] unless `name` matches
    /// `[A-Za-z_][A-Za-z0-9_]*`.
    pub fn new(name: impl Into<String>) -> ComposeResult<Self> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(ComposeError::InvalidPlaceholder(name));
        }
        Ok(Self { name })
    }

    /// The bind-parameter name, without the leading `:`.
    pub fn name(&self) -> &str {
        &self.name
    }
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        // First char: letter or underscore.
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    // Subsequent chars: letter, digit, or underscore.
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

impl Composable for Placeholder {
    fn write_sql(&self, out: &mut String) {
        out.push(':');
        out.push_str(&self.name);
    }

    fn to_sql(&self) -> String {
        let mut out = String::with_capacity(1 + self.name.len());
        self.write_sql(&mut out);
        out
    }
}

impl fmt::Debug for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Placeholder").field(&self.name).finish()
    }
}

impl TryFrom<String> for Placeholder {
    type Error = ComposeError;

    fn try_from(name: String) -> ComposeResult<Self> {
        Self::new(name)
    }
}

impl TryFrom<&str> for Placeholder {
    type Error = ComposeError;

    fn try_from(name: &str) -> ComposeResult<Self> {
        Self::new(name)
    }
}

impl From<Placeholder> for String {
    fn from(placeholder: Placeholder) -> Self {
        placeholder.name
    }
}
