//! Build：为任意语句分配新的参数收集器并写出最终 SQL；以及一行式构造函数。

use crate::args::{Arg, Args, BuildError, IntoArgs};
use crate::delete::DeleteBuilder;
use crate::insert::InsertBuilder;
use crate::select::SelectBuilder;
use crate::string_builder::StringBuilder;
use crate::update::UpdateBuilder;

/// 可以被写成 SQL 的语句。
pub trait Statement {
    /// 把语句写入 `buf`，参数按出现顺序压入 `args`。
    fn write_sql(&self, buf: &mut StringBuilder, args: &mut Args) -> Result<(), BuildError>;
}

/// TryBuild：返回 `(sql, args)`；片段参数个数不匹配时返回错误。
///
/// 每次调用都使用新的 [`Args`]，编号从 `$1` 重新开始，builder 本身不会被修改。
pub fn try_build<S>(stmt: &S) -> Result<(String, Vec<Arg>), BuildError>
where
    S: Statement + ?Sized,
{
    let mut buf = StringBuilder::new();
    let mut args = Args::new();

    if let Err(err) = stmt.write_sql(&mut buf, &mut args) {
        #[cfg(feature = "tracing")]
        tracing::debug!(target: "pgsql.build", error = %err, "statement build failed");
        return Err(err);
    }

    let sql = buf.into_string();
    #[cfg(feature = "tracing")]
    tracing::trace!(target: "pgsql.build", sql = %sql, args = args.len(), "statement built");
    Ok((sql, args.into_vec()))
}

/// Build：同 [`try_build`]，但参数个数不匹配时直接 panic。
///
/// 残缺的 SQL 比崩溃更糟，所以这里不做静默修复。
pub fn build<S>(stmt: &S) -> (String, Vec<Arg>)
where
    S: Statement + ?Sized,
{
    match try_build(stmt) {
        Ok(out) => out,
        Err(err) => panic!("pgsql: {err}"),
    }
}

/// `select <text>`。
pub fn select(text: impl Into<String>, args: impl IntoArgs) -> SelectBuilder {
    let mut sb = SelectBuilder::new();
    sb.select(text, args);
    sb
}

/// `select <text>`，并在 `apply` 时替换目标的 select 列表。
pub fn replace_select(text: impl Into<String>, args: impl IntoArgs) -> SelectBuilder {
    let mut sb = SelectBuilder::new();
    sb.replace_select(text, args);
    sb
}

/// `select * from <table>`。
pub fn from(table: impl Into<String>) -> SelectBuilder {
    let mut sb = SelectBuilder::new();
    sb.from(table);
    sb
}

pub fn where_(text: impl Into<String>, args: impl IntoArgs) -> SelectBuilder {
    let mut sb = SelectBuilder::new();
    sb.where_(text, args);
    sb
}

pub fn order(text: impl Into<String>, args: impl IntoArgs) -> SelectBuilder {
    let mut sb = SelectBuilder::new();
    sb.order(text, args);
    sb
}

pub fn replace_order(text: impl Into<String>, args: impl IntoArgs) -> SelectBuilder {
    let mut sb = SelectBuilder::new();
    sb.replace_order(text, args);
    sb
}

pub fn delete(table: impl Into<String>) -> DeleteBuilder {
    DeleteBuilder::new(table)
}

pub fn update(table: impl Into<String>) -> UpdateBuilder {
    UpdateBuilder::new(table)
}

pub fn insert_into(table: impl Into<String>) -> InsertBuilder {
    InsertBuilder::new(table)
}
