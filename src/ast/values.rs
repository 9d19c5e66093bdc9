use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Semantic SQL type tag carried by literals, casts and output hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SqlType {
    /// Character data (TEXT / VARCHAR)
    Text,
    /// Integer numbers
    Integer,
    /// Arbitrary-precision numbers (NUMERIC)
    Decimal,
    /// Binary data
    Bytea,
}

impl SqlType {
    /// Type name as it appears in a CAST target.
    pub fn sql_name(&self) -> &'static str {
        match self {
            SqlType::Text => "TEXT",
            SqlType::Integer => "INTEGER",
            SqlType::Decimal => "NUMERIC",
            SqlType::Bytea => "BYTEA",
        }
    }
}

/// A constant scalar tagged with its semantic type.
///
/// The tag decides quoting at render time: text is single-quoted with
/// embedded quotes doubled, numbers render bare.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    /// String literal
    Text(String),
    /// Integer literal
    Int(i64),
    /// Decimal literal
    Decimal(Decimal),
}

impl Literal {
    /// The semantic type of this literal.
    pub fn sql_type(&self) -> SqlType {
        match self {
            Literal::Text(_) => SqlType::Text,
            Literal::Int(_) => SqlType::Integer,
            Literal::Decimal(_) => SqlType::Decimal,
        }
    }
}
