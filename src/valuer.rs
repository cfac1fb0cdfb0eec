//! SqlValuer：调用方自定义的参数值。
//!
//! builder 只转发 valuer，不会调用它；只有 [`crate::interpolate`] 需要字面量时才求值。

use crate::value::SqlValue;

/// Valuer 求值失败。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("sql valuer error: {0}")]
pub struct ValuerError(pub String);

/// 可在插值阶段动态计算实际值的 trait。
pub trait SqlValuer: dyn_clone::DynClone + std::fmt::Debug + Send + Sync {
    fn value(&self) -> Result<SqlValue, ValuerError>;
}

dyn_clone::clone_trait_object!(SqlValuer);
