use serde::{Deserialize, Serialize};

use crate::ast::{Literal, SqlType};

/// A composable SQL expression node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// A named column reference
    Column(String),
    /// A typed constant scalar
    Literal(Literal),
    /// Type conversion (CAST(expr AS type))
    Cast { expr: Box<Expr>, target: SqlType },
    /// Plain function call with a comma-joined argument list
    Call {
        name: String,
        args: Vec<Expr>,
        output: Option<SqlType>,
    },
    /// Function call with SQL keyword separators between arguments,
    /// e.g. POSITION(needle IN haystack), OVERLAY(t PLACING s FROM 1 FOR 4)
    Keyword {
        name: String,
        /// Arguments as (optional_keyword, expr) pairs
        args: Vec<(Option<String>, Expr)>,
        output: Option<SqlType>,
    },
}

impl Expr {
    /// The declared output type hint, if any.
    pub fn output_type(&self) -> Option<SqlType> {
        match self {
            Expr::Column(_) => None,
            Expr::Literal(lit) => Some(lit.sql_type()),
            Expr::Cast { target, .. } => Some(*target),
            Expr::Call { output, .. } | Expr::Keyword { output, .. } => *output,
        }
    }
}
