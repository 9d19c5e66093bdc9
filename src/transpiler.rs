//! SQL rendering for expression nodes.
//!
//! Walks an [`Expr`] tree and emits PostgreSQL SQL text. Argument binding
//! and execution belong to whatever runs the query; this module only
//! produces the text form.

use crate::ast::{Expr, Literal};

/// Trait for converting AST nodes to SQL.
pub trait ToSql {
    /// Convert this node to a SQL string.
    fn to_sql(&self) -> String;
}

impl ToSql for Expr {
    fn to_sql(&self) -> String {
        match self {
            Expr::Column(name) => name.clone(),
            Expr::Literal(lit) => lit.to_sql(),
            Expr::Cast { expr, target } => {
                format!("CAST({} AS {})", expr.to_sql(), target.sql_name())
            }
            Expr::Call { name, args, .. } => {
                let rendered: Vec<String> = args.iter().map(|a| a.to_sql()).collect();
                format!("{}({})", name, rendered.join(", "))
            }
            Expr::Keyword { name, args, .. } => {
                let mut sql = format!("{}(", name);
                for (i, (keyword, expr)) in args.iter().enumerate() {
                    if i > 0 {
                        sql.push(' ');
                    }
                    if let Some(kw) = keyword {
                        sql.push_str(kw);
                        sql.push(' ');
                    }
                    sql.push_str(&expr.to_sql());
                }
                sql.push(')');
                sql
            }
        }
    }
}

impl ToSql for Literal {
    fn to_sql(&self) -> String {
        match self {
            Literal::Text(s) => format!("'{}'", escape_text(s)),
            Literal::Int(n) => n.to_string(),
            Literal::Decimal(d) => d.to_string(),
        }
    }
}

/// Double embedded single quotes for a SQL string literal.
pub fn escape_text(s: &str) -> String {
    s.replace('\'', "''")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::SqlType;

    #[test]
    fn test_text_literal_quoting() {
        let lit = Literal::Text("O'Brien".to_string());
        assert_eq!(lit.to_sql(), "'O''Brien'");
    }

    #[test]
    fn test_numeric_literals_render_bare() {
        assert_eq!(Literal::Int(-3).to_sql(), "-3");
        assert_eq!(
            Literal::Decimal(rust_decimal::Decimal::new(25, 1)).to_sql(),
            "2.5"
        );
    }

    #[test]
    fn test_cast_rendering() {
        let expr = Expr::Cast {
            expr: Box::new(Expr::Literal(Literal::Int(255))),
            target: SqlType::Integer,
        };
        assert_eq!(expr.to_sql(), "CAST(255 AS INTEGER)");
    }

    #[test]
    fn test_call_joins_args_with_commas() {
        let expr = Expr::Call {
            name: "TRANSLATE".to_string(),
            args: vec![
                Expr::Column("title".to_string()),
                Expr::Literal(Literal::Text("ab".to_string())),
                Expr::Literal(Literal::Text("xy".to_string())),
            ],
            output: Some(SqlType::Text),
        };
        assert_eq!(expr.to_sql(), "TRANSLATE(title, 'ab', 'xy')");
    }

    #[test]
    fn test_keyword_args_render_with_separators() {
        let expr = Expr::Keyword {
            name: "POSITION".to_string(),
            args: vec![
                (None, Expr::Literal(Literal::Text("om".to_string()))),
                (Some("IN".to_string()), Expr::Column("name".to_string())),
            ],
            output: Some(SqlType::Integer),
        };
        assert_eq!(expr.to_sql(), "POSITION('om' IN name)");
    }
}
