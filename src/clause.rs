//! ClauseList：同一种子句的片段序列，以及每种子句的关键字/分隔符/包裹规则。

use crate::args::{Args, BuildError};
use crate::fragment::Fragment;
use crate::string_builder::StringBuilder;
use std::sync::Arc;

/// 子句种类。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClauseKind {
    /// 列表本身不带关键字，`select` 由语句写出。
    Select,
    Where,
    GroupBy,
    OrderBy,
    Returning,
    Set,
}

impl ClauseKind {
    fn keyword(self) -> &'static str {
        match self {
            Self::Select => "",
            Self::Where => "where ",
            Self::GroupBy => "group by ",
            Self::OrderBy => "order by ",
            Self::Returning => "returning ",
            Self::Set => "set ",
        }
    }

    fn separator(self) -> &'static str {
        match self {
            Self::Where => " and ",
            _ => ", ",
        }
    }

    /// WHERE 的每个片段都加括号，避免片段内的 `or` 与外层 `and` 的优先级问题。
    fn parenthesized(self) -> bool {
        matches!(self, Self::Where)
    }
}

/// 有序片段列表；空列表表示省略整个子句。
#[derive(Debug, Clone)]
pub struct ClauseList {
    kind: ClauseKind,
    fragments: Vec<Arc<Fragment>>,
    replaced: bool,
}

impl ClauseList {
    pub fn new(kind: ClauseKind) -> Self {
        Self {
            kind,
            fragments: Vec::new(),
            replaced: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }

    pub fn push(&mut self, fragment: Fragment) {
        self.fragments.push(Arc::new(fragment));
    }

    pub fn replace(&mut self, fragment: Fragment) {
        self.fragments.clear();
        self.fragments.push(Arc::new(fragment));
        self.replaced = true;
    }

    /// 把 `other` 的片段追加到末尾（复制引用，不共享列表）。
    ///
    /// `other` 由 `replace` 得到时先清空本方，并把本方也标记为 replaced。
    pub fn merge(&mut self, other: &ClauseList) {
        if other.replaced {
            self.fragments.clear();
            self.replaced = true;
        }
        self.fragments.extend(other.fragments.iter().cloned());
    }

    /// 写出 `<keyword><f1><sep><f2>...`；空列表什么都不写。
    pub fn write_to(&self, buf: &mut StringBuilder, args: &mut Args) -> Result<(), BuildError> {
        if self.fragments.is_empty() {
            return Ok(());
        }

        buf.write_str(self.kind.keyword());
        for (i, fragment) in self.fragments.iter().enumerate() {
            if i > 0 {
                buf.write_str(self.kind.separator());
            }
            if self.kind.parenthesized() {
                buf.write_char('(');
                fragment.write_to(buf, args)?;
                buf.write_char(')');
            } else {
                fragment.write_to(buf, args)?;
            }
        }
        Ok(())
    }
}
