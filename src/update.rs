//! UpdateBuilder：构建 `update <table>[ set ...][ where ...][ returning ...]`。

use crate::args::{Arg, Args, BuildError, IntoArgs};
use crate::builder::{self, Statement};
use crate::clause::{ClauseKind, ClauseList};
use crate::fragment::Fragment;
use crate::select::SelectBuilder;
use crate::string_builder::StringBuilder;

#[derive(Debug, Clone)]
pub struct UpdateBuilder {
    table: String,
    set_list: ClauseList,
    where_list: ClauseList,
    returning_list: ClauseList,
}

impl UpdateBuilder {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            set_list: ClauseList::new(ClauseKind::Set),
            where_list: ClauseList::new(ClauseKind::Where),
            returning_list: ClauseList::new(ClauseKind::Returning),
        }
    }

    /// 追加一个赋值，例如 `set("name = ?", "bob")` 或 `set("count = count + 1", ())`。
    pub fn set(&mut self, text: impl Into<String>, args: impl IntoArgs) -> &mut Self {
        self.set_list.push(Fragment::new(text, args));
        self
    }

    pub fn where_(&mut self, text: impl Into<String>, args: impl IntoArgs) -> &mut Self {
        self.where_list.push(Fragment::new(text, args));
        self
    }

    pub fn and(&mut self, text: impl Into<String>, args: impl IntoArgs) -> &mut Self {
        self.where_(text, args)
    }

    pub fn returning(&mut self, text: impl Into<String>, args: impl IntoArgs) -> &mut Self {
        self.returning_list.push(Fragment::new(text, args));
        self
    }

    /// 只合并 `others` 的 WHERE 条件。
    pub fn apply<'a>(&mut self, others: impl IntoIterator<Item = &'a SelectBuilder>) -> &mut Self {
        for other in others {
            self.where_list.merge(other.where_list());
        }
        self
    }

    pub fn build(&self) -> (String, Vec<Arg>) {
        builder::build(self)
    }

    pub fn try_build(&self) -> Result<(String, Vec<Arg>), BuildError> {
        builder::try_build(self)
    }
}

impl Statement for UpdateBuilder {
    fn write_sql(&self, buf: &mut StringBuilder, args: &mut Args) -> Result<(), BuildError> {
        buf.write_str("update ");
        buf.write_str(&self.table);

        for list in [&self.set_list, &self.where_list, &self.returning_list] {
            if !list.is_empty() {
                buf.write_char(' ');
                list.write_to(buf, args)?;
            }
        }
        Ok(())
    }
}
