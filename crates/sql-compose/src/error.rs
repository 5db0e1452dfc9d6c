//! Error types for sql-compose.

use thiserror::Error;

/// Result type alias for composition operations.
pub type ComposeResult<T> = Result<T, ComposeError>;

/// Error types for fragment construction and template composition.
///
/// Every variant signals a programming error at a call site, raised at the
/// earliest possible point: construction or substitution, never rendering.
/// None of them is transient, so there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComposeError {
    /// An identifier was constructed with zero parts.
    #[error("Identifier requires at least one part")]
    EmptyIdentifier,

    /// A placeholder name is not usable as a named bind-parameter key.
    #[error("Invalid placeholder name: {0:?}")]
    InvalidPlaceholder(String),

    /// A template field carries a format specification (`{name:spec}`).
    #[error("Format specification not supported in field {0:?}")]
    FormatSpec(String),

    /// A template field carries a conversion flag (`{name!r}`).
    #[error("Conversion flag not supported in field {0:?}")]
    Conversion(String),

    /// A single `}` appeared outside any field (use `}}` for a literal one).
    #[error("Single '}}' encountered at byte {0} of template")]
    StrayBrace(usize),

    /// A `{` appeared inside a field name.
    #[error("Unexpected '{{' in field name at byte {0} of template")]
    NestedBrace(usize),

    /// The template ended inside a `{...}` field.
    #[error("Expected '}}' before end of template")]
    UnterminatedField,

    /// A template field has no entry in the substitution map.
    #[error("No value supplied for field {0:?}")]
    MissingField(String),
}

impl ComposeError {
    /// Check if this is a template-syntax error (malformed template text,
    /// as opposed to a missing substitution value).
    pub fn is_template_syntax(&self) -> bool {
        matches!(
            self,
            Self::FormatSpec(_)
                | Self::Conversion(_)
                | Self::StrayBrace(_)
                | Self::NestedBrace(_)
                | Self::UnterminatedField
        )
    }

    /// Check if this is a missing-field binding error.
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField(_))
    }
}
