//! Text encoding and conversion builders (CONVERT_TO, TO_ASCII, etc.)

use crate::ast::{Arg, Expr, Literal, SqlType};
use crate::error::{PgFuncError, PgFuncResult};

use super::call;

/// Encodings `TO_ASCII` accepts as a source.
pub const TO_ASCII_ENCODINGS: [&str; 4] = ["LATIN1", "LATIN2", "LATIN9", "WIN1250"];

/// `CONVERT(string, src_encoding, dest_encoding)` — convert bytes between
/// encodings.
///
/// Not wired up yet; always fails with [`PgFuncError::NotSupported`].
pub fn convert(
    string: impl Into<Arg>,
    src_encoding: impl Into<Arg>,
    dest_encoding: impl Into<Arg>,
) -> PgFuncResult<Expr> {
    let _ = (string.into(), src_encoding.into(), dest_encoding.into());
    Err(PgFuncError::not_supported("CONVERT"))
}

/// `CONVERT_FROM(string, src_encoding)` — decode bytes into text.
///
/// Not wired up yet; always fails with [`PgFuncError::NotSupported`].
pub fn convert_from(string: impl Into<Arg>, src_encoding: impl Into<Arg>) -> PgFuncResult<Expr> {
    let _ = (string.into(), src_encoding.into());
    Err(PgFuncError::not_supported("CONVERT_FROM"))
}

/// Convert text into bytes in the destination encoding
pub fn convert_to(text: impl Into<Arg>, dest_encoding: impl Into<Arg>) -> Expr {
    call(
        "CONVERT_TO",
        vec![text.into().into_expr(), dest_encoding.into().into_text_expr()],
        Some(SqlType::Text),
    )
}

/// `DECODE(string, format)` — binary data from its textual representation.
///
/// Not wired up yet; always fails with [`PgFuncError::NotSupported`].
pub fn decode(string: impl Into<Arg>, format: impl Into<Arg>) -> PgFuncResult<Expr> {
    let _ = (string.into(), format.into());
    Err(PgFuncError::not_supported("DECODE"))
}

/// `ENCODE(data, format)` — textual representation of binary data.
///
/// Not wired up yet; always fails with [`PgFuncError::NotSupported`].
pub fn encode(data: impl Into<Arg>, format: impl Into<Arg>) -> PgFuncResult<Expr> {
    let _ = (data.into(), format.into());
    Err(PgFuncError::not_supported("ENCODE"))
}

/// Current client encoding, rendered `PG_CLIENT_ENCODING()`
pub fn client_encoding() -> Expr {
    call("PG_CLIENT_ENCODING", vec![], Some(SqlType::Text))
}

/// Convert text to ASCII from the given source encoding.
///
/// The encoding name is uppercased and checked against
/// [`TO_ASCII_ENCODINGS`]; an unrecognized name fails with
/// [`PgFuncError::InvalidArgument`]. Use [`to_ascii_any`] to skip the check.
pub fn to_ascii(text: impl Into<Arg>, encoding: &str) -> PgFuncResult<Expr> {
    let upper = encoding.to_ascii_uppercase();
    if !TO_ASCII_ENCODINGS.contains(&upper.as_str()) {
        return Err(PgFuncError::invalid(format!(
            "'encoding' must be one of {}",
            TO_ASCII_ENCODINGS.join(", ")
        )));
    }
    Ok(to_ascii_any(text, &upper))
}

/// Like [`to_ascii`], but accepts any encoding name unchecked.
pub fn to_ascii_any(text: impl Into<Arg>, encoding: &str) -> Expr {
    call(
        "TO_ASCII",
        vec![
            text.into().into_expr(),
            Expr::Literal(Literal::Text(encoding.to_ascii_uppercase())),
        ],
        Some(SqlType::Text),
    )
}
