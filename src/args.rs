//! Args：一次构建中的参数收集器，以及参数值 `Arg` 与可变参数包 `IntoArgs`。

use crate::value::{SqlDateTime, SqlValue};
use crate::valuer::SqlValuer;

/// 片段里 `?` 的个数与参数个数不一致。
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BuildError {
    #[error("fragment `{text}` has more placeholders than args (got {args} args)")]
    MissingArgs { text: String, args: usize },
    #[error("fragment `{text}` has {placeholders} placeholders but {args} args")]
    ExtraArgs {
        text: String,
        placeholders: usize,
        args: usize,
    },
}

/// builder 使用的参数类型：只被计数和转发，从不被解析。
#[derive(Clone)]
pub enum Arg {
    Value(SqlValue),
    Valuer(Box<dyn SqlValuer>),
}

impl std::fmt::Debug for Arg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Value(v) => f.debug_tuple("Value").field(v).finish(),
            Self::Valuer(v) => f.debug_tuple("Valuer").field(v).finish(),
        }
    }
}

impl PartialEq for Arg {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Value(a), Self::Value(b)) => a == b,
            _ => false,
        }
    }
}

impl From<SqlValue> for Arg {
    fn from(v: SqlValue) -> Self {
        Self::Value(v)
    }
}

impl From<Box<dyn SqlValuer>> for Arg {
    fn from(v: Box<dyn SqlValuer>) -> Self {
        Self::Valuer(v)
    }
}

macro_rules! impl_arg_from {
    ($($src:ty),+ $(,)?) => {
        $(
            impl From<$src> for Arg {
                fn from(v: $src) -> Self {
                    SqlValue::from(v).into()
                }
            }
        )+
    };
}

impl_arg_from!(
    bool,
    i8,
    i16,
    i32,
    i64,
    u8,
    u16,
    u32,
    u64,
    f32,
    f64,
    &'static str,
    String,
    time::OffsetDateTime,
    SqlDateTime,
);

impl<T> From<Option<T>> for Arg
where
    T: Into<SqlValue>,
{
    fn from(v: Option<T>) -> Self {
        SqlValue::from_option(v).into()
    }
}

/// 可变参数包：`where_("id = ?", 1)`、`and("a = ? OR b = ?", (1, "x"))`、`select("*", ())`。
///
/// 字节串请写成 `SqlValue::Bytes(..)`，`Vec<T>` 总是被视为参数列表。
pub trait IntoArgs {
    fn into_args(self, out: &mut Vec<Arg>);
}

impl<T: Into<Arg>> IntoArgs for T {
    fn into_args(self, out: &mut Vec<Arg>) {
        out.push(self.into());
    }
}

impl IntoArgs for () {
    fn into_args(self, _out: &mut Vec<Arg>) {}
}

impl<T: Into<Arg>> IntoArgs for Vec<T> {
    fn into_args(self, out: &mut Vec<Arg>) {
        out.extend(self.into_iter().map(Into::into));
    }
}

impl<T: Into<Arg>, const N: usize> IntoArgs for [T; N] {
    fn into_args(self, out: &mut Vec<Arg>) {
        out.extend(self.into_iter().map(Into::into));
    }
}

macro_rules! impl_into_args_tuple {
    ($($name:ident),+) => {
        impl<$($name: Into<Arg>),+> IntoArgs for ($($name,)+) {
            #[allow(non_snake_case)]
            fn into_args(self, out: &mut Vec<Arg>) {
                let ($($name,)+) = self;
                $(out.push($name.into());)+
            }
        }
    };
}

impl_into_args_tuple!(A);
impl_into_args_tuple!(A, B);
impl_into_args_tuple!(A, B, C);
impl_into_args_tuple!(A, B, C, D);
impl_into_args_tuple!(A, B, C, D, E);
impl_into_args_tuple!(A, B, C, D, E, F);
impl_into_args_tuple!(A, B, C, D, E, F, G);
impl_into_args_tuple!(A, B, C, D, E, F, G, H);

pub(crate) fn collect_args(args: impl IntoArgs) -> Vec<Arg> {
    let mut out = Vec::new();
    args.into_args(&mut out);
    out
}

/// Args 在一次 build 中按出现顺序收集参数，其长度决定下一个 `$n`。
#[derive(Debug, Default, Clone)]
pub struct Args {
    values: Vec<Arg>,
}

impl Args {
    pub fn new() -> Self {
        Self::default()
    }

    /// 追加一个参数，返回追加后的个数（即该参数的 `$n` 编号）。
    pub fn push(&mut self, arg: Arg) -> usize {
        self.values.push(arg);
        self.values.len()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_vec(self) -> Vec<Arg> {
        self.values
    }
}
