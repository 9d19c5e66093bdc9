//! Catalog of PostgreSQL function signatures exposed by this crate.
//!
//! Descriptors are immutable compile-time records. Functions whose builders
//! are still stubs appear here too, so the full documented surface stays
//! discoverable even where construction fails closed.

use crate::ast::SqlType;

/// Immutable descriptor for one SQL function wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuncSpec {
    /// Symbolic SQL function name
    pub name: &'static str,
    /// Minimum number of positional arguments
    pub min_args: usize,
    /// Maximum number of positional arguments; `None` means variadic
    pub max_args: Option<usize>,
    /// Declared output type hint, if the wrapper sets one
    pub output: Option<SqlType>,
    /// Whether the builder constructs a node or fails with `NotSupported`
    pub implemented: bool,
}

impl FuncSpec {
    /// Build an exact-arity descriptor.
    pub const fn exact(name: &'static str, arity: usize, output: Option<SqlType>) -> Self {
        Self {
            name,
            min_args: arity,
            max_args: Some(arity),
            output,
            implemented: true,
        }
    }

    /// Build a bounded arity-range descriptor.
    pub const fn range(
        name: &'static str,
        min_args: usize,
        max_args: usize,
        output: Option<SqlType>,
    ) -> Self {
        Self {
            name,
            min_args,
            max_args: Some(max_args),
            output,
            implemented: true,
        }
    }

    /// Build a variadic descriptor with a minimum arity.
    pub const fn variadic(name: &'static str, min_args: usize, output: Option<SqlType>) -> Self {
        Self {
            name,
            min_args,
            max_args: None,
            output,
            implemented: true,
        }
    }

    /// Mark the descriptor as an unimplemented stub.
    pub const fn stub(self) -> Self {
        Self {
            name: self.name,
            min_args: self.min_args,
            max_args: self.max_args,
            output: self.output,
            implemented: false,
        }
    }
}

/// Every function wrapper this crate knows about, stubs included.
pub const CATALOG: &[FuncSpec] = &[
    // String functions
    FuncSpec::exact("BIT_LENGTH", 1, Some(SqlType::Integer)),
    FuncSpec::exact("CHAR_LENGTH", 1, Some(SqlType::Integer)),
    FuncSpec::exact("OCTET_LENGTH", 1, Some(SqlType::Integer)),
    FuncSpec::exact("OVERLAY", 4, Some(SqlType::Text)),
    FuncSpec::exact("POSITION", 2, Some(SqlType::Integer)),
    FuncSpec::range("BTRIM", 1, 2, Some(SqlType::Text)),
    FuncSpec::variadic("FORMAT", 1, Some(SqlType::Text)).stub(),
    FuncSpec::exact("INITCAP", 1, Some(SqlType::Text)),
    FuncSpec::exact("QUOTE_IDENT", 1, Some(SqlType::Text)),
    FuncSpec::exact("QUOTE_LITERAL", 1, Some(SqlType::Text)),
    FuncSpec::exact("QUOTE_NULLABLE", 1, Some(SqlType::Text)),
    FuncSpec::exact("SPLIT_PART", 3, Some(SqlType::Text)),
    FuncSpec::exact("STRPOS", 2, Some(SqlType::Integer)),
    FuncSpec::exact("TO_HEX", 1, Some(SqlType::Text)),
    FuncSpec::exact("TRANSLATE", 3, Some(SqlType::Text)),
    // Encoding functions
    FuncSpec::exact("CONVERT", 3, Some(SqlType::Bytea)).stub(),
    FuncSpec::exact("CONVERT_FROM", 2, Some(SqlType::Text)).stub(),
    FuncSpec::exact("CONVERT_TO", 2, Some(SqlType::Text)),
    FuncSpec::exact("DECODE", 2, Some(SqlType::Bytea)).stub(),
    FuncSpec::exact("ENCODE", 2, Some(SqlType::Text)).stub(),
    FuncSpec::exact("PG_CLIENT_ENCODING", 0, Some(SqlType::Text)),
    FuncSpec::range("TO_ASCII", 1, 2, Some(SqlType::Text)),
    // Pattern-based substring extraction
    FuncSpec::range("SUBSTRING", 2, 3, Some(SqlType::Text)).stub(),
    // Regex functions
    FuncSpec::range("REGEXP_MATCH", 2, 3, None).stub(),
    FuncSpec::range("REGEXP_MATCHES", 2, 3, None).stub(),
    FuncSpec::range("REGEXP_REPLACE", 3, 4, Some(SqlType::Text)).stub(),
    FuncSpec::range("REGEXP_SPLIT_TO_ARRAY", 2, 3, None).stub(),
    FuncSpec::range("REGEXP_SPLIT_TO_TABLE", 2, 3, Some(SqlType::Text)).stub(),
    // Mathematical functions
    FuncSpec::exact("CBRT", 1, None),
    FuncSpec::exact("DIV", 2, Some(SqlType::Integer)),
    FuncSpec::range("TRUNC", 1, 2, Some(SqlType::Decimal)),
];

/// Look up a descriptor by function name, case-insensitively.
pub fn lookup(name: &str) -> Option<&'static FuncSpec> {
    CATALOG.iter().find(|spec| spec.name.eq_ignore_ascii_case(name))
}
