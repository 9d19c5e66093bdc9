//! Caller-supplied arguments and scalar coercion.
//!
//! Builders accept `impl Into<Arg>` so callers can pass columns, prebuilt
//! expression nodes, or raw scalars interchangeably. An [`Arg`] is a tagged
//! variant: either an opaque expression used as-is, or a scalar that gets
//! lifted into a typed literal node. All coercion failures surface before
//! any node is constructed.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::ast::{Expr, Literal};
use crate::error::{PgFuncError, PgFuncResult};

/// A function argument: an expression node or a raw scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    /// Already an expression node, used unchanged
    Expr(Expr),
    /// Raw string scalar
    Text(String),
    /// Raw integer scalar
    Int(i64),
    /// Raw decimal scalar
    Decimal(Decimal),
}

impl Arg {
    /// Lift into an expression node; scalars become literals of their own type.
    pub fn into_expr(self) -> Expr {
        match self {
            Arg::Expr(e) => e,
            Arg::Text(s) => Expr::Literal(Literal::Text(s)),
            Arg::Int(n) => Expr::Literal(Literal::Int(n)),
            Arg::Decimal(d) => Expr::Literal(Literal::Decimal(d)),
        }
    }

    /// Lift into an expression node, forcing scalars into text literals.
    pub fn into_text_expr(self) -> Expr {
        match self {
            Arg::Expr(e) => e,
            Arg::Text(s) => Expr::Literal(Literal::Text(s)),
            Arg::Int(n) => Expr::Literal(Literal::Text(n.to_string())),
            Arg::Decimal(d) => Expr::Literal(Literal::Text(d.to_string())),
        }
    }

    /// Lift into an expression node, coercing scalars into integer literals.
    ///
    /// Opaque expressions pass through unchanged.
    pub fn into_int_expr(self, name: &str) -> PgFuncResult<Expr> {
        match self {
            Arg::Expr(e) => Ok(e),
            scalar => Ok(Expr::Literal(Literal::Int(scalar.as_int(name)?))),
        }
    }

    /// Coerce into a plain integer, rejecting opaque expressions.
    ///
    /// Used where the builder must compare argument values before it can
    /// construct a node.
    pub fn as_int(self, name: &str) -> PgFuncResult<i64> {
        match self {
            Arg::Int(n) => Ok(n),
            Arg::Text(s) => s.trim().parse::<i64>().map_err(|_| {
                PgFuncError::invalid(format!("'{name}' must be an integer, got '{s}'"))
            }),
            Arg::Decimal(d) if d.is_integer() => d
                .to_i64()
                .ok_or_else(|| PgFuncError::invalid(format!("'{name}' is out of integer range"))),
            Arg::Decimal(d) => Err(PgFuncError::invalid(format!(
                "'{name}' must be an integer, got {d}"
            ))),
            Arg::Expr(_) => Err(PgFuncError::invalid(format!(
                "'{name}' must be an integer literal, not an expression"
            ))),
        }
    }
}

impl From<Expr> for Arg {
    fn from(expr: Expr) -> Self {
        Arg::Expr(expr)
    }
}

impl From<&str> for Arg {
    fn from(s: &str) -> Self {
        Arg::Text(s.to_string())
    }
}

impl From<String> for Arg {
    fn from(s: String) -> Self {
        Arg::Text(s)
    }
}

impl From<i32> for Arg {
    fn from(n: i32) -> Self {
        Arg::Int(n as i64)
    }
}

impl From<i64> for Arg {
    fn from(n: i64) -> Self {
        Arg::Int(n)
    }
}

impl From<Decimal> for Arg {
    fn from(d: Decimal) -> Self {
        Arg::Decimal(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::SqlType;

    #[test]
    fn test_scalar_lifted_to_typed_literal() {
        let expr = Arg::from("abc").into_expr();
        assert_eq!(expr, Expr::Literal(Literal::Text("abc".to_string())));
        assert_eq!(expr.output_type(), Some(SqlType::Text));
    }

    #[test]
    fn test_expression_passes_through() {
        let col = Expr::Column("name".to_string());
        assert_eq!(Arg::from(col.clone()).into_expr(), col);
    }

    #[test]
    fn test_int_coercion_from_text() {
        assert_eq!(Arg::from("42").as_int("n").unwrap(), 42);
        assert!(Arg::from("4.2").as_int("n").is_err());
        assert!(Arg::from("abc").as_int("n").is_err());
    }

    #[test]
    fn test_int_coercion_from_decimal() {
        assert_eq!(Arg::from(Decimal::from(7)).as_int("n").unwrap(), 7);
        let err = Arg::from(Decimal::new(25, 1)).as_int("n").unwrap_err();
        assert!(err.to_string().contains("must be an integer"));
    }

    #[test]
    fn test_int_coercion_rejects_expression() {
        let arg = Arg::from(Expr::Column("x".to_string()));
        assert!(arg.as_int("start").is_err());
    }

    #[test]
    fn test_into_int_expr_keeps_expression() {
        let col = Expr::Column("pos".to_string());
        let expr = Arg::from(col.clone()).into_int_expr("pos").unwrap();
        assert_eq!(expr, col);
    }

    #[test]
    fn test_into_text_expr_stringifies_numbers() {
        let expr = Arg::from(5).into_text_expr();
        assert_eq!(expr, Expr::Literal(Literal::Text("5".to_string())));
    }
}
