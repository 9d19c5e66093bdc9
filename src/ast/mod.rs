pub mod arg;
pub mod expr;
pub mod values;

pub use self::arg::Arg;
pub use self::expr::Expr;
pub use self::values::{Literal, SqlType};
