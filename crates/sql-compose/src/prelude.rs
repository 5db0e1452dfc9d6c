//! Convenient imports for typical `sql_compose` usage.
//!
//! The crate surface is small, so the prelude simply brings all of it into
//! scope:
//!
//! ```
//! use sql_compose::prelude::*;
//! ```

pub use crate::{
    Composable, ComposeError, ComposeResult, Fragment, Identifier, Literal, Placeholder, Sequence,
};
