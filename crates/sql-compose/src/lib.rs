//! # sql-compose
//!
//! Safe composition of SQL statements from typed fragments.
//!
//! Statements that need dynamic table, column, or parameter names cannot be
//! fully parameterized by the driver, and gluing names into strings by hand
//! is how injection holes happen. This crate builds such statements out of
//! typed pieces instead, where the type of each piece decides how it is
//! escaped when the statement is rendered.
//!
//! ## Features
//!
//! - **Typed fragments**: [`Literal`] for trusted text, [`Identifier`] for
//!   quoted names, [`Placeholder`] for named bind markers, [`Sequence`] for
//!   ordered composites
//! - **Template expansion**: `{name}` fields in literal text expand into
//!   other fragments via [`Literal::format`]
//! - **Separator joins**: [`Literal::join`] splices a literal between
//!   fragments, for column lists and `AND` chains
//! - **Early failure**: every invalid construction or substitution errors
//!   immediately; rendering itself cannot fail
//! - **Pure rendering**: fragments are immutable and [`to_sql`](Composable::to_sql)
//!   always produces the same text for the same fragment
//!
//! ## Composing a statement
//!
//! ```
//! use sql_compose::prelude::*;
//!
//! let assignment = Literal::new("{col} = {val}").format([
//!     ("col", Fragment::from(Identifier::new(["foo"])?)),
//!     ("val", Fragment::from(Placeholder::new("bar")?)),
//! ])?;
//!
//! let stmt = Literal::new("UPDATE {table} SET {set} WHERE {key} = {id}").format([
//!     ("table", Fragment::from(Identifier::new(["namespace", "tbl"])?)),
//!     ("set", Fragment::from(assignment)),
//!     ("key", Fragment::from(Identifier::new(["id"])?)),
//!     ("id", Fragment::from(Placeholder::new("id")?)),
//! ])?;
//!
//! assert_eq!(
//!     stmt.to_sql(),
//!     r#"UPDATE "namespace"."tbl" SET "foo" = :bar WHERE "id" = :id"#
//! );
//! # Ok::<(), sql_compose::ComposeError>(())
//! ```
//!
//! Joining builds the repetitive parts:
//!
//! ```
//! use sql_compose::prelude::*;
//!
//! let cols = Literal::new(", ").join([
//!     Identifier::new(["id"])?,
//!     Identifier::new(["name"])?,
//! ]);
//! assert_eq!(cols.to_sql(), r#""id", "name""#);
//! # Ok::<(), sql_compose::ComposeError>(())
//! ```

pub mod error;
pub mod fragment;
pub mod ident;
pub mod literal;
pub mod placeholder;
pub mod prelude;
pub mod sequence;
mod template;

pub use error::{ComposeError, ComposeResult};
pub use fragment::{Composable, Fragment};
pub use ident::Identifier;
pub use literal::Literal;
pub use placeholder::Placeholder;
pub use sequence::Sequence;
