//! String function builders (BIT_LENGTH, OVERLAY, SPLIT_PART, etc.)

use crate::ast::{Arg, Expr, Literal, SqlType};
use crate::error::{PgFuncError, PgFuncResult};

use super::{call, unary};

/// Number of bits in string
pub fn bit_length(text: impl Into<Arg>) -> Expr {
    unary("BIT_LENGTH", text.into(), Some(SqlType::Integer))
}

/// Number of characters in string
///
/// # Example
/// ```rust
/// use pgfunc::prelude::*;
///
/// assert_eq!(char_length(col("title")).to_sql(), "CHAR_LENGTH(title)");
/// ```
pub fn char_length(text: impl Into<Arg>) -> Expr {
    unary("CHAR_LENGTH", text.into(), Some(SqlType::Integer))
}

/// Number of bytes in string
pub fn octet_length(text: impl Into<Arg>) -> Expr {
    unary("OCTET_LENGTH", text.into(), Some(SqlType::Integer))
}

/// Replace the substring covering the given position range.
///
/// Renders `OVERLAY(text PLACING placing FROM start FOR finish)`. `start`
/// and `finish` must be integer scalars and `finish` must be strictly
/// greater than `start`; the check runs before any node is built.
///
/// # Example
/// ```rust
/// use pgfunc::prelude::*;
///
/// let expr = overlay(col("phone"), "xxx", 2, 5)?;
/// assert_eq!(expr.to_sql(), "OVERLAY(phone PLACING 'xxx' FROM 2 FOR 5)");
/// # Ok::<(), pgfunc::error::PgFuncError>(())
/// ```
pub fn overlay(
    text: impl Into<Arg>,
    placing: impl Into<Arg>,
    start: impl Into<Arg>,
    finish: impl Into<Arg>,
) -> PgFuncResult<Expr> {
    let start = start.into().as_int("start")?;
    let finish = finish.into().as_int("finish")?;
    if start >= finish {
        return Err(PgFuncError::invalid("'finish' must be greater than 'start'"));
    }

    Ok(Expr::Keyword {
        name: "OVERLAY".to_string(),
        args: vec![
            (None, text.into().into_expr()),
            (Some("PLACING".to_string()), placing.into().into_expr()),
            (Some("FROM".to_string()), Expr::Literal(Literal::Int(start))),
            (Some("FOR".to_string()), Expr::Literal(Literal::Int(finish))),
        ],
        output: Some(SqlType::Text),
    })
}

/// Location of specified substring, rendered `POSITION(substr IN string)`
pub fn position(substr: impl Into<Arg>, string: impl Into<Arg>) -> Expr {
    Expr::Keyword {
        name: "POSITION".to_string(),
        args: vec![
            (None, substr.into().into_expr()),
            (Some("IN".to_string()), string.into().into_expr()),
        ],
        output: Some(SqlType::Integer),
    }
}

/// Remove leading and trailing spaces
pub fn btrim(text: impl Into<Arg>) -> Expr {
    btrim_chars(text, " ")
}

/// Remove the longest string consisting only of characters in `chars`
/// from the start and end of `text`
pub fn btrim_chars(text: impl Into<Arg>, chars: impl Into<Arg>) -> Expr {
    call(
        "BTRIM",
        vec![text.into().into_expr(), chars.into().into_text_expr()],
        Some(SqlType::Text),
    )
}

/// `FORMAT(formatstr, ...)` — sprintf-style string formatting.
///
/// Not wired up yet; always fails with [`PgFuncError::NotSupported`].
pub fn format<A: Into<Arg>>(args: impl IntoIterator<Item = A>) -> PgFuncResult<Expr> {
    let _ = args;
    Err(PgFuncError::not_supported("FORMAT"))
}

/// Convert the first letter of each word to upper case and the rest to
/// lower case
pub fn initcap(text: impl Into<Arg>) -> Expr {
    unary("INITCAP", text.into(), Some(SqlType::Text))
}

/// Quote the given string for use as an identifier in an SQL statement
pub fn quote_ident(text: impl Into<Arg>) -> Expr {
    unary("QUOTE_IDENT", text.into(), Some(SqlType::Text))
}

/// Quote the given string for use as a string literal in an SQL statement
pub fn quote_literal(text: impl Into<Arg>) -> Expr {
    unary("QUOTE_LITERAL", text.into(), Some(SqlType::Text))
}

/// Like `QUOTE_LITERAL`, but returns NULL on null input
pub fn quote_nullable(text: impl Into<Arg>) -> Expr {
    unary("QUOTE_NULLABLE", text.into(), Some(SqlType::Text))
}

/// Split `text` on `delimiter` and return the field at `position`
/// (counting from one).
///
/// The delimiter is lifted into a text literal and the position into an
/// integer literal; a position that cannot be coerced to an integer fails
/// with [`PgFuncError::InvalidArgument`].
pub fn split_part(
    text: impl Into<Arg>,
    delimiter: impl Into<Arg>,
    position: impl Into<Arg>,
) -> PgFuncResult<Expr> {
    Ok(call(
        "SPLIT_PART",
        vec![
            text.into().into_expr(),
            delimiter.into().into_text_expr(),
            position.into().into_int_expr("position")?,
        ],
        Some(SqlType::Text),
    ))
}

/// Location of specified substring
/// (same as `position(substr, string)`, but note the reversed argument order)
pub fn strpos(text: impl Into<Arg>, substr: impl Into<Arg>) -> Expr {
    call(
        "STRPOS",
        vec![text.into().into_expr(), substr.into().into_text_expr()],
        Some(SqlType::Integer),
    )
}

/// Convert a number to its equivalent hexadecimal representation.
///
/// An opaque expression passes through unchanged; a scalar must coerce to
/// an integer and is wrapped in an explicit cast.
///
/// # Example
/// ```rust
/// use pgfunc::prelude::*;
///
/// let expr = to_hex(255)?;
/// assert_eq!(expr.to_sql(), "TO_HEX(CAST(255 AS INTEGER))");
/// # Ok::<(), pgfunc::error::PgFuncError>(())
/// ```
pub fn to_hex(number: impl Into<Arg>) -> PgFuncResult<Expr> {
    let arg = match number.into() {
        Arg::Expr(e) => e,
        scalar => Expr::Cast {
            expr: Box::new(Expr::Literal(Literal::Int(scalar.as_int("number")?))),
            target: SqlType::Integer,
        },
    };
    Ok(call("TO_HEX", vec![arg], Some(SqlType::Text)))
}

/// Replace each character in `text` that matches a character in `from`
/// with the corresponding character in `to`. Extra characters in `from`
/// are removed.
pub fn translate(text: impl Into<Arg>, from: impl Into<Arg>, to: impl Into<Arg>) -> Expr {
    call(
        "TRANSLATE",
        vec![
            text.into().into_expr(),
            from.into().into_text_expr(),
            to.into().into_text_expr(),
        ],
        Some(SqlType::Text),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::funcs::{col, text as text_lit};
    use crate::transpiler::ToSql;

    #[test]
    fn test_overlay_range_validation() {
        let err = overlay(col("phone"), "xxx", 5, 2).unwrap_err();
        assert!(matches!(err, PgFuncError::InvalidArgument(_)));

        // equal bounds are rejected too
        assert!(overlay(col("phone"), "xxx", 3, 3).is_err());
    }

    #[test]
    fn test_overlay_token_positions() {
        let expr = overlay(col("phone"), "xxx", 2, 5).unwrap();
        assert_eq!(expr.to_sql(), "OVERLAY(phone PLACING 'xxx' FROM 2 FOR 5)");
    }

    #[test]
    fn test_overlay_rejects_non_integer_bounds() {
        assert!(overlay(col("phone"), "xxx", "two", 5).is_err());
        assert!(overlay(col("phone"), "xxx", 1, col("n")).is_err());
    }

    #[test]
    fn test_overlay_coerces_text_bounds() {
        let expr = overlay(col("phone"), "xxx", "2", "5").unwrap();
        assert_eq!(expr.to_sql(), "OVERLAY(phone PLACING 'xxx' FROM 2 FOR 5)");
    }

    #[test]
    fn test_position_keyword_order() {
        let expr = position("om", col("name"));
        assert_eq!(expr.to_sql(), "POSITION('om' IN name)");
    }

    #[test]
    fn test_btrim_defaults_to_space() {
        assert_eq!(btrim(col("title")).to_sql(), "BTRIM(title, ' ')");
        assert_eq!(btrim_chars(col("title"), "-").to_sql(), "BTRIM(title, '-')");
    }

    #[test]
    fn test_format_is_a_stub() {
        let err = format([col("a"), col("b")]).unwrap_err();
        assert_eq!(err, PgFuncError::not_supported("FORMAT"));
    }

    #[test]
    fn test_split_part_coercion() {
        let expr = split_part(col("path"), "/", 2).unwrap();
        assert_eq!(expr.to_sql(), "SPLIT_PART(path, '/', 2)");

        assert!(split_part(col("path"), "/", "two").is_err());
    }

    #[test]
    fn test_strpos_raw_and_wrapped_substr_render_same() {
        let raw = strpos(col("email"), "@");
        let wrapped = strpos(col("email"), text_lit("@"));
        assert_eq!(raw.to_sql(), wrapped.to_sql());
    }

    #[test]
    fn test_to_hex_scalar_is_cast() {
        let expr = to_hex(255).unwrap();
        assert_eq!(expr.to_sql(), "TO_HEX(CAST(255 AS INTEGER))");
        assert_eq!(expr.output_type(), Some(SqlType::Text));
    }

    #[test]
    fn test_to_hex_expression_passes_through() {
        let expr = to_hex(col("flags")).unwrap();
        assert_eq!(expr.to_sql(), "TO_HEX(flags)");
    }

    #[test]
    fn test_to_hex_rejects_non_numeric_scalar() {
        let err = to_hex("ff").unwrap_err();
        assert!(matches!(err, PgFuncError::InvalidArgument(_)));
    }

    #[test]
    fn test_translate() {
        let expr = translate(col("title"), "aeiou", "_");
        assert_eq!(expr.to_sql(), "TRANSLATE(title, 'aeiou', '_')");
    }
}
