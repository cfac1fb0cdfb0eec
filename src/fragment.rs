//! Fragment：一段用户提供的 SQL 文本及其参数；写出时把 `?` 重写为全局递增的 `$n`。

use crate::args::{Arg, Args, BuildError, IntoArgs, collect_args};
use crate::string_builder::StringBuilder;

/// 用户文本中的参数占位符。
pub const PLACEHOLDER: char = '?';

/// 不可变的 SQL 片段：`text` 中每个 `?` 对应 `args` 中的一个值。
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    text: String,
    args: Vec<Arg>,
}

impl Fragment {
    pub fn new(text: impl Into<String>, args: impl IntoArgs) -> Self {
        Self {
            text: text.into(),
            args: collect_args(args),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn args(&self) -> &[Arg] {
        &self.args
    }

    /// 把片段写入 `buf`：逐个 `?` 取出下一个参数压入 `collector`，并输出 `$<count>`。
    ///
    /// 参数个数与 `?` 个数不一致时返回错误，不输出残缺的 SQL。
    pub fn write_to(&self, buf: &mut StringBuilder, collector: &mut Args) -> Result<(), BuildError> {
        let mut values = self.args.iter();
        let mut rest = self.text.as_str();

        while let Some(pos) = rest.find(PLACEHOLDER) {
            let Some(arg) = values.next() else {
                return Err(BuildError::MissingArgs {
                    text: self.text.clone(),
                    args: self.args.len(),
                });
            };
            buf.write_str(&rest[..pos]);
            let n = collector.push(arg.clone());
            buf.write_placeholder(n);
            rest = &rest[pos + PLACEHOLDER.len_utf8()..];
        }

        if values.next().is_some() {
            return Err(BuildError::ExtraArgs {
                text: self.text.clone(),
                placeholders: self.text.matches(PLACEHOLDER).count(),
                args: self.args.len(),
            });
        }

        buf.write_str(rest);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Fragment;
    use crate::args::{Arg, Args, BuildError};
    use crate::string_builder::StringBuilder;
    use pretty_assertions::assert_eq;

    fn render(f: &Fragment, collector: &mut Args) -> Result<String, BuildError> {
        let mut buf = StringBuilder::new();
        f.write_to(&mut buf, collector)?;
        Ok(buf.into_string())
    }

    #[test]
    fn text_without_placeholders_is_copied() {
        let mut collector = Args::new();
        let f = Fragment::new("a, b, c", ());
        assert_eq!(render(&f, &mut collector).unwrap(), "a, b, c");
        assert!(collector.is_empty());
    }

    #[test]
    fn numbering_continues_from_collector() {
        let mut collector = Args::new();
        collector.push(Arg::from("earlier"));

        let f = Fragment::new("b=? OR c=?", (3_i64, 4_i64));
        assert_eq!(render(&f, &mut collector).unwrap(), "b=$2 OR c=$3");
        assert_eq!(
            collector.into_vec(),
            vec![Arg::from("earlier"), Arg::from(3_i64), Arg::from(4_i64)]
        );
    }

    #[test]
    fn trailing_placeholder() {
        let mut collector = Args::new();
        let f = Fragment::new("id=?", 2_i64);
        assert_eq!(render(&f, &mut collector).unwrap(), "id=$1");
    }

    #[test]
    fn multi_digit_placeholders_and_multibyte_text() {
        let mut collector = Args::new();
        for i in 0..9_i64 {
            collector.push(Arg::from(i));
        }
        let f = Fragment::new("名字 = ? and é=?", ("x", "y"));
        assert_eq!(render(&f, &mut collector).unwrap(), "名字 = $10 and é=$11");
        assert_eq!(collector.len(), 11);
    }

    #[test]
    fn missing_args_is_an_error() {
        let mut collector = Args::new();
        let f = Fragment::new("a=? and b=?", 1_i64);
        assert_eq!(
            render(&f, &mut collector),
            Err(BuildError::MissingArgs {
                text: "a=? and b=?".to_string(),
                args: 1,
            })
        );
    }

    #[test]
    fn extra_args_is_an_error() {
        let mut collector = Args::new();
        let f = Fragment::new("a=?", (1_i64, 2_i64));
        assert_eq!(
            render(&f, &mut collector),
            Err(BuildError::ExtraArgs {
                text: "a=?".to_string(),
                placeholders: 1,
                args: 2,
            })
        );
    }
}
