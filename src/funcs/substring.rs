//! Pattern-based substring extraction builders.
//!
//! Both `SUBSTRING` forms are cataloged but not wired up yet; they fail
//! closed with [`PgFuncError::NotSupported`] instead of constructing a node.

use crate::ast::{Arg, Expr};
use crate::error::{PgFuncError, PgFuncResult};

/// `SUBSTRING(string FROM pattern)` — POSIX regex extraction.
pub fn substring_posix(string: impl Into<Arg>, pattern: impl Into<Arg>) -> PgFuncResult<Expr> {
    let _ = (string.into(), pattern.into());
    Err(PgFuncError::not_supported("SUBSTRING"))
}

/// `SUBSTRING(string FROM pattern FOR escape)` — SQL regex extraction.
pub fn substring_sql(
    string: impl Into<Arg>,
    pattern: impl Into<Arg>,
    escape: impl Into<Arg>,
) -> PgFuncResult<Expr> {
    let _ = (string.into(), pattern.into(), escape.into());
    Err(PgFuncError::not_supported("SUBSTRING"))
}
