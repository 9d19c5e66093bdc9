//! # pgfunc — PostgreSQL function expressions
//!
//! Composable expression nodes for PostgreSQL-specific SQL functions:
//! string manipulation, numeric rounding, text encoding and regex operators.
//!
//! Each builder maps a function name and argument arity to a rendered SQL
//! form. Raw scalars are lifted into typed literal nodes, arguments are
//! validated before any node is constructed, and the resulting tree renders
//! to SQL text via [`transpiler::ToSql`].
//!
//! ## Quick Example
//!
//! ```rust
//! use pgfunc::prelude::*;
//!
//! let hex = to_hex(255)?;
//! assert_eq!(hex.to_sql(), "TO_HEX(CAST(255 AS INTEGER))");
//!
//! let part = split_part(col("path"), "/", 2)?;
//! assert_eq!(part.to_sql(), "SPLIT_PART(path, '/', 2)");
//! # Ok::<(), pgfunc::error::PgFuncError>(())
//! ```
//!
//! Functions that are cataloged but not wired up yet (`FORMAT`, `ENCODE`,
//! the `REGEXP_*` family, ...) fail closed with
//! [`error::PgFuncError::NotSupported`] instead of building a possibly
//! incorrect node.

pub mod ast;
pub mod catalog;
pub mod error;
pub mod funcs;
pub mod transpiler;

pub mod prelude {
    pub use crate::ast::{Arg, Expr, Literal, SqlType};
    pub use crate::catalog::{CATALOG, FuncSpec, lookup};
    pub use crate::error::{PgFuncError, PgFuncResult};
    pub use crate::funcs::*;
    pub use crate::transpiler::ToSql;
}
