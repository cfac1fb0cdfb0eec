//! DeleteBuilder：构建 `delete from <table>[ where ...][ returning ...]`。

use crate::args::{Arg, Args, BuildError, IntoArgs};
use crate::builder::{self, Statement};
use crate::clause::{ClauseKind, ClauseList};
use crate::fragment::Fragment;
use crate::select::SelectBuilder;
use crate::string_builder::StringBuilder;

#[derive(Debug, Clone)]
pub struct DeleteBuilder {
    table: String,
    where_list: ClauseList,
    returning_list: ClauseList,
}

impl DeleteBuilder {
    /// 表名不做校验，空表名会得到残缺的 SQL。
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            where_list: ClauseList::new(ClauseKind::Where),
            returning_list: ClauseList::new(ClauseKind::Returning),
        }
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

    /// 只合并 `others` 的 WHERE 条件，其余子句忽略。
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

impl Statement for DeleteBuilder {
    fn write_sql(&self, buf: &mut StringBuilder, args: &mut Args) -> Result<(), BuildError> {
        buf.write_str("delete from ");
        buf.write_str(&self.table);

        for list in [&self.where_list, &self.returning_list] {
            if !list.is_empty() {
                buf.write_char(' ');
                list.write_to(buf, args)?;
            }
        }
        Ok(())
    }
}
