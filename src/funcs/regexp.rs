//! Regular expression function builders.
//!
//! The whole `REGEXP_*` family is cataloged but not wired up yet; every
//! builder fails closed with [`PgFuncError::NotSupported`].

use crate::ast::{Arg, Expr};
use crate::error::{PgFuncError, PgFuncResult};

/// `REGEXP_MATCH(string, pattern)` — first match as a text array.
pub fn regexp_match(string: impl Into<Arg>, pattern: impl Into<Arg>) -> PgFuncResult<Expr> {
    let _ = (string.into(), pattern.into());
    Err(PgFuncError::not_supported("REGEXP_MATCH"))
}

/// `REGEXP_MATCHES(string, pattern)` — set of all matches.
pub fn regexp_matches(string: impl Into<Arg>, pattern: impl Into<Arg>) -> PgFuncResult<Expr> {
    let _ = (string.into(), pattern.into());
    Err(PgFuncError::not_supported("REGEXP_MATCHES"))
}

/// `REGEXP_REPLACE(string, pattern, replacement)`.
pub fn regexp_replace(
    string: impl Into<Arg>,
    pattern: impl Into<Arg>,
    replacement: impl Into<Arg>,
) -> PgFuncResult<Expr> {
    let _ = (string.into(), pattern.into(), replacement.into());
    Err(PgFuncError::not_supported("REGEXP_REPLACE"))
}

/// `REGEXP_SPLIT_TO_ARRAY(string, pattern)`.
pub fn regexp_split_to_array(
    string: impl Into<Arg>,
    pattern: impl Into<Arg>,
) -> PgFuncResult<Expr> {
    let _ = (string.into(), pattern.into());
    Err(PgFuncError::not_supported("REGEXP_SPLIT_TO_ARRAY"))
}

/// `REGEXP_SPLIT_TO_TABLE(string, pattern)`.
pub fn regexp_split_to_table(
    string: impl Into<Arg>,
    pattern: impl Into<Arg>,
) -> PgFuncResult<Expr> {
    let _ = (string.into(), pattern.into());
    Err(PgFuncError::not_supported("REGEXP_SPLIT_TO_TABLE"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::funcs::col;

    #[test]
    fn test_every_regexp_builder_fails_closed() {
        assert!(regexp_match(col("s"), "a+").is_err());
        assert!(regexp_matches(col("s"), "a+").is_err());
        assert!(regexp_replace(col("s"), "a+", "b").is_err());
        assert!(regexp_split_to_array(col("s"), ",").is_err());
        assert!(regexp_split_to_table(col("s"), ",").is_err());
    }

    #[test]
    fn test_regexp_stub_names_surface_in_error() {
        let err = regexp_replace(col("s"), "a+", "b").unwrap_err();
        assert_eq!(
            err.to_string(),
            "REGEXP_REPLACE is not implemented in the current version"
        );
    }
}
