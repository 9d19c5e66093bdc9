//! Mathematical function builders (CBRT, DIV, TRUNC).

use crate::ast::{Arg, Expr, Literal, SqlType};
use crate::error::PgFuncResult;

use super::{call, unary};

/// Cube root
pub fn cbrt(value: impl Into<Arg>) -> Expr {
    unary("CBRT", value.into(), None)
}

/// Integer quotient of `y / x`.
///
/// A literal zero divisor is not rejected here; the database reports it at
/// execution time.
pub fn div(y: impl Into<Arg>, x: impl Into<Arg>) -> Expr {
    call(
        "DIV",
        vec![y.into().into_expr(), x.into().into_expr()],
        Some(SqlType::Integer),
    )
}

/// Truncate toward zero, rendered `TRUNC(value, 0)`
pub fn trunc(value: impl Into<Arg>) -> Expr {
    call(
        "TRUNC",
        vec![value.into().into_expr(), Expr::Literal(Literal::Int(0))],
        Some(SqlType::Decimal),
    )
}

/// Truncate to `places` decimal places.
///
/// `places` must coerce to an integer; anything else fails with
/// [`crate::error::PgFuncError::InvalidArgument`].
pub fn trunc_places(value: impl Into<Arg>, places: impl Into<Arg>) -> PgFuncResult<Expr> {
    Ok(call(
        "TRUNC",
        vec![
            value.into().into_expr(),
            places.into().into_int_expr("places")?,
        ],
        Some(SqlType::Decimal),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::funcs::col;
    use crate::transpiler::ToSql;
    use rust_decimal::Decimal;

    #[test]
    fn test_cbrt() {
        assert_eq!(cbrt(col("volume")).to_sql(), "CBRT(volume)");
        assert_eq!(cbrt(27).to_sql(), "CBRT(27)");
    }

    #[test]
    fn test_div_keeps_zero_divisor() {
        // engine-side failure, not a construction error
        let expr = div(col("total"), 0);
        assert_eq!(expr.to_sql(), "DIV(total, 0)");
        assert_eq!(expr.output_type(), Some(SqlType::Integer));
    }

    #[test]
    fn test_trunc_defaults_to_zero_places() {
        assert_eq!(trunc(col("price")).to_sql(), "TRUNC(price, 0)");
    }

    #[test]
    fn test_trunc_places_coercion() {
        let expr = trunc_places(dec_expr(), 2).unwrap();
        assert_eq!(expr.to_sql(), "TRUNC(42.195, 2)");

        assert!(trunc_places(col("price"), "two").is_err());
        assert!(trunc_places(col("price"), "3").is_ok());
    }

    #[test]
    fn test_trunc_places_accepts_column_expression() {
        let expr = trunc_places(col("price"), col("scale")).unwrap();
        assert_eq!(expr.to_sql(), "TRUNC(price, scale)");
    }

    fn dec_expr() -> Expr {
        Expr::Literal(Literal::Decimal(Decimal::new(42195, 3)))
    }
}
