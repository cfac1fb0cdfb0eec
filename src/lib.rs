//! pgsql：可组合的 PostgreSQL 语句拼接库。
//!
//! 片段文本中的 `?` 在 build 时按全局出现顺序重写为 `$1`, `$2`, …，参数按同样顺序收集。
//!
//! ```
//! use pgsql::where_;
//!
//! let mut sb = where_("id=?", 2_i64);
//! sb.from("people").and("b=? OR c=?", (3_i64, 4_i64));
//! let (sql, args) = sb.build();
//! assert_eq!(sql, "select * from people where (id=$1) and (b=$2 OR c=$3)");
//! assert_eq!(args.len(), 3);
//! ```

pub mod args;
pub mod builder;
pub mod clause;
pub mod delete;
pub mod fragment;
pub mod insert;
pub mod interpolate;
#[cfg(test)]
mod interpolate_tests;
pub mod macros;
pub mod select;
pub mod string_builder;
pub mod update;
#[cfg(test)]
mod update_tests;
pub mod value;
pub mod valuer;

pub use crate::args::{Arg, Args, BuildError, IntoArgs};
pub use crate::builder::{
    Statement, build, delete, from, insert_into, order, replace_order, replace_select, select,
    try_build, update, where_,
};
pub use crate::clause::{ClauseKind, ClauseList};
pub use crate::delete::DeleteBuilder;
pub use crate::fragment::Fragment;
pub use crate::insert::InsertBuilder;
pub use crate::interpolate::{InterpolateError, interpolate};
pub use crate::select::SelectBuilder;
pub use crate::string_builder::StringBuilder;
pub use crate::update::UpdateBuilder;
pub use crate::value::{SqlDateTime, SqlValue};
pub use crate::valuer::{SqlValuer, ValuerError};
