//! InsertBuilder：构建 `insert into <table> (cols) values (...)[ returning ...]`。

use crate::args::{Arg, Args, BuildError, IntoArgs};
use crate::builder::{self, Statement};
use crate::clause::{ClauseKind, ClauseList};
use crate::fragment::Fragment;
use crate::string_builder::StringBuilder;

#[derive(Debug, Clone)]
pub struct InsertBuilder {
    table: String,
    columns: Vec<String>,
    values: Vec<Fragment>,
    returning_list: ClauseList,
}

impl InsertBuilder {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
            values: Vec::new(),
            returning_list: ClauseList::new(ClauseKind::Returning),
        }
    }

    /// 追加一列及其值。
    pub fn value(&mut self, column: impl Into<String>, value: impl Into<Arg>) -> &mut Self {
        self.value_expr(column, "?", value.into())
    }

    /// 追加一列及其值表达式，例如 `value_expr("email", "lower(?)", email)`。
    pub fn value_expr(
        &mut self,
        column: impl Into<String>,
        text: impl Into<String>,
        args: impl IntoArgs,
    ) -> &mut Self {
        self.columns.push(column.into());
        self.values.push(Fragment::new(text, args));
        self
    }

    pub fn returning(&mut self, text: impl Into<String>, args: impl IntoArgs) -> &mut Self {
        self.returning_list.push(Fragment::new(text, args));
        self
    }

    pub fn build(&self) -> (String, Vec<Arg>) {
        builder::build(self)
    }

    pub fn try_build(&self) -> Result<(String, Vec<Arg>), BuildError> {
        builder::try_build(self)
    }
}

impl Statement for InsertBuilder {
    fn write_sql(&self, buf: &mut StringBuilder, args: &mut Args) -> Result<(), BuildError> {
        buf.write_str("insert into ");
        buf.write_str(&self.table);

        if self.columns.is_empty() {
            buf.write_str(" default values");
        } else {
            buf.write_str(" (");
            buf.write_strings(&self.columns, ", ");
            buf.write_str(") values (");
            for (i, value) in self.values.iter().enumerate() {
                if i > 0 {
                    buf.write_str(", ");
                }
                value.write_to(buf, args)?;
            }
            buf.write_char(')');
        }

        if !self.returning_list.is_empty() {
            buf.write_char(' ');
            self.returning_list.write_to(buf, args)?;
        }
        Ok(())
    }
}
