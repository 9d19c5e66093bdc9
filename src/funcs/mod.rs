//! Ergonomic builder functions for PostgreSQL function expressions.
//!
//! This module provides convenient helper functions to construct AST nodes
//! without the verbosity of creating structs directly.
//!
//! # Modules
//!
//! - `string` - String functions (BIT_LENGTH, OVERLAY, SPLIT_PART, etc.)
//! - `encoding` - Text encoding and conversion (CONVERT_TO, TO_ASCII, etc.)
//! - `substring` - Pattern-based substring extraction
//! - `regexp` - Regular expression functions
//! - `math` - Mathematical functions (CBRT, DIV, TRUNC)
//!
//! # Example
//! ```rust
//! use pgfunc::prelude::*;
//!
//! let expr = strpos(col("email"), "@");
//! assert_eq!(expr.to_sql(), "STRPOS(email, '@')");
//! ```

use rust_decimal::Decimal;

use crate::ast::{Arg, Expr, Literal, SqlType};

pub mod encoding;
pub mod math;
pub mod regexp;
pub mod string;
pub mod substring;

// String functions
pub use string::{
    bit_length, btrim, btrim_chars, char_length, format, initcap, octet_length, overlay, position,
    quote_ident, quote_literal, quote_nullable, split_part, strpos, to_hex, translate,
};

// Encoding
pub use encoding::{
    TO_ASCII_ENCODINGS, client_encoding, convert, convert_from, convert_to, decode, encode,
    to_ascii, to_ascii_any,
};

// Substring extraction
pub use substring::{substring_posix, substring_sql};

// Regex
pub use regexp::{
    regexp_match, regexp_matches, regexp_replace, regexp_split_to_array, regexp_split_to_table,
};

// Math
pub use math::{cbrt, div, trunc, trunc_places};

/// A named column reference
pub fn col(name: &str) -> Expr {
    Expr::Column(name.to_string())
}

/// A text literal
pub fn text(value: &str) -> Expr {
    Expr::Literal(Literal::Text(value.to_string()))
}

/// An integer literal
pub fn int(value: i64) -> Expr {
    Expr::Literal(Literal::Int(value))
}

/// A decimal literal
pub fn dec(value: Decimal) -> Expr {
    Expr::Literal(Literal::Decimal(value))
}

/// Shared constructor for plain calls. Builders delegate here instead of
/// inheriting coercion behavior.
pub(crate) fn call(name: &str, args: Vec<Expr>, output: Option<SqlType>) -> Expr {
    Expr::Call {
        name: name.to_string(),
        args,
        output,
    }
}

/// Shared constructor for unary calls.
pub(crate) fn unary(name: &str, arg: Arg, output: Option<SqlType>) -> Expr {
    call(name, vec![arg.into_expr()], output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transpiler::ToSql;

    #[test]
    fn test_col() {
        assert_eq!(col("id").to_sql(), "id");
    }

    #[test]
    fn test_leaf_literals() {
        assert_eq!(text("a'b").to_sql(), "'a''b'");
        assert_eq!(int(9).to_sql(), "9");
        assert_eq!(dec(Decimal::new(314, 2)).to_sql(), "3.14");
    }
}
