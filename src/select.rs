//! SelectBuilder：构建 SELECT 语句。
//!
//! 子句固定按 `select → from → where → group by → order by → limit → offset` 写出，
//! 与调用顺序无关。

use crate::args::{Arg, Args, BuildError, IntoArgs};
use crate::builder::{self, Statement};
use crate::clause::{ClauseKind, ClauseList};
use crate::fragment::Fragment;
use crate::string_builder::StringBuilder;

#[derive(Debug, Clone)]
pub struct SelectBuilder {
    distinct: bool,
    distinct_on: Vec<String>,
    select_list: ClauseList,
    from: Option<String>,
    where_list: ClauseList,
    group_by_list: ClauseList,
    order_list: ClauseList,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl Default for SelectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectBuilder {
    pub fn new() -> Self {
        Self {
            distinct: false,
            distinct_on: Vec::new(),
            select_list: ClauseList::new(ClauseKind::Select),
            from: None,
            where_list: ClauseList::new(ClauseKind::Where),
            group_by_list: ClauseList::new(ClauseKind::GroupBy),
            order_list: ClauseList::new(ClauseKind::OrderBy),
            limit: None,
            offset: None,
        }
    }

    /// 追加 select 列；select 列表为空时写出 `*`。
    pub fn select(&mut self, text: impl Into<String>, args: impl IntoArgs) -> &mut Self {
        self.select_list.push(Fragment::new(text, args));
        self
    }

    /// 清空 select 列表后再追加。
    pub fn replace_select(&mut self, text: impl Into<String>, args: impl IntoArgs) -> &mut Self {
        self.select_list.replace(Fragment::new(text, args));
        self
    }

    /// 设置 FROM（表名或 join 表达式），后写覆盖先写。
    pub fn from(&mut self, table: impl Into<String>) -> &mut Self {
        self.from = Some(table.into());
        self
    }

    pub fn where_(&mut self, text: impl Into<String>, args: impl IntoArgs) -> &mut Self {
        self.where_list.push(Fragment::new(text, args));
        self
    }

    /// 同 [`SelectBuilder::where_`]，用于链式调用时的可读性。
    pub fn and(&mut self, text: impl Into<String>, args: impl IntoArgs) -> &mut Self {
        self.where_(text, args)
    }

    pub fn distinct(&mut self, distinct: bool) -> &mut Self {
        self.distinct = distinct;
        self
    }

    /// 追加 `distinct on (...)` 列；只要存在就写出 `distinct on`，与 `distinct` 标志无关。
    pub fn distinct_on(&mut self, column: impl Into<String>) -> &mut Self {
        self.distinct_on.push(column.into());
        self
    }

    pub fn order(&mut self, text: impl Into<String>, args: impl IntoArgs) -> &mut Self {
        self.order_list.push(Fragment::new(text, args));
        self
    }

    pub fn replace_order(&mut self, text: impl Into<String>, args: impl IntoArgs) -> &mut Self {
        self.order_list.replace(Fragment::new(text, args));
        self
    }

    pub fn group_by(&mut self, text: impl Into<String>, args: impl IntoArgs) -> &mut Self {
        self.group_by_list.push(Fragment::new(text, args));
        self
    }

    /// `0` 表示不写 LIMIT。
    pub fn limit(&mut self, limit: u64) -> &mut Self {
        self.limit = (limit > 0).then_some(limit);
        self
    }

    /// `0` 表示不写 OFFSET。
    pub fn offset(&mut self, offset: u64) -> &mut Self {
        self.offset = (offset > 0).then_some(offset);
        self
    }

    /// 把 `others` 依次合并进来：片段总是追加；若对方的列表来自 `replace_*`，先清空本方对应列表。
    ///
    /// 对方已设置的 `from`/`limit`/`offset` 覆盖本方，`distinct` 取或，`distinct on` 列追加。
    pub fn apply<'a>(&mut self, others: impl IntoIterator<Item = &'a SelectBuilder>) -> &mut Self {
        for other in others {
            self.select_list.merge(&other.select_list);
            self.where_list.merge(&other.where_list);
            self.group_by_list.merge(&other.group_by_list);
            self.order_list.merge(&other.order_list);

            self.distinct |= other.distinct;
            self.distinct_on.extend(other.distinct_on.iter().cloned());
            if let Some(from) = &other.from {
                self.from = Some(from.clone());
            }
            if other.limit.is_some() {
                self.limit = other.limit;
            }
            if other.offset.is_some() {
                self.offset = other.offset;
            }
        }
        self
    }

    pub(crate) fn where_list(&self) -> &ClauseList {
        &self.where_list
    }

    pub fn build(&self) -> (String, Vec<Arg>) {
        builder::build(self)
    }

    pub fn try_build(&self) -> Result<(String, Vec<Arg>), BuildError> {
        builder::try_build(self)
    }
}

impl Statement for SelectBuilder {
    fn write_sql(&self, buf: &mut StringBuilder, args: &mut Args) -> Result<(), BuildError> {
        buf.write_str("select");

        if !self.distinct_on.is_empty() {
            buf.write_str(" distinct on (");
            buf.write_strings(&self.distinct_on, ", ");
            buf.write_char(')');
        } else if self.distinct {
            buf.write_str(" distinct");
        }

        buf.write_char(' ');
        if self.select_list.is_empty() {
            buf.write_char('*');
        } else {
            self.select_list.write_to(buf, args)?;
        }

        if let Some(from) = &self.from {
            buf.write_str(" from ");
            buf.write_str(from);
        }

        for list in [&self.where_list, &self.group_by_list, &self.order_list] {
            if !list.is_empty() {
                buf.write_char(' ');
                list.write_to(buf, args)?;
            }
        }

        if let Some(limit) = self.limit {
            buf.write_str(" limit ");
            buf.write_number(limit);
        }
        if let Some(offset) = self.offset {
            buf.write_str(" offset ");
            buf.write_number(offset);
        }

        Ok(())
    }
}
