//! 宏集合：为片段参数提供 Go 式的不定长写法。

/// 把任意个可转换为 [`crate::Arg`] 的值收集为 `Vec<Arg>`，可直接作为片段参数。
///
/// ```
/// use pgsql::{Arg, args};
///
/// let values: Vec<Arg> = args![1_i64, "x", true];
/// assert_eq!(values.len(), 3);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        Vec::<$crate::Arg>::new()
    };
    ($($value:expr),+ $(,)?) => {
        vec![$($crate::Arg::from($value)),+]
    };
}

#[cfg(test)]
mod tests {
    use crate::{Arg, SqlValue};
    use pretty_assertions::assert_eq;

    #[test]
    fn args_macro_mixed_values() {
        let values = args![2_i64, "x", false, None::<i64>];
        assert_eq!(
            values,
            vec![
                Arg::from(2_i64),
                Arg::from("x"),
                Arg::from(false),
                Arg::Value(SqlValue::Null),
            ]
        );
    }

    #[test]
    fn args_macro_empty() {
        assert!(args![].is_empty());
    }
}
