//! 插值：把 `sql` 中的 `$n` 替换为 `args[n-1]` 的 PostgreSQL 字面量。
//!
//! 仅用于日志与调试输出；执行语句请始终使用参数化的 `(sql, args)`。

use crate::args::Arg;
use crate::value::{SqlDateTime, SqlValue};
use crate::valuer::ValuerError;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

const DATETIME_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond digits:6]");
const OFFSET_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[offset_hour sign:mandatory]:[offset_minute]");

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum InterpolateError {
    #[error("not enough args when interpolating ${0}")]
    MissingArgs(usize),
    #[error("unsupported placeholder `{0}` when interpolating")]
    UnsupportedArgs(String),
    #[error(transparent)]
    Valuer(#[from] ValuerError),
    #[error("cannot format datetime: {0}")]
    Format(String),
}

impl From<time::error::Format> for InterpolateError {
    fn from(err: time::error::Format) -> Self {
        Self::Format(err.to_string())
    }
}

/// Interpolate：引号、双引号与 `$tag$` 包裹的内容原样保留，其余 `$n` 被替换。
pub fn interpolate(sql: &str, args: &[Arg]) -> Result<String, InterpolateError> {
    let mut out = String::with_capacity(sql.len() + args.len() * 20);
    let mut quote: Option<char> = None; // '\'' | '"' | '$'(dollar-quote)
    let mut escaping = false;
    let mut dollar_quote: Option<&str> = None;

    let bytes = sql.as_bytes();
    let mut i = 0usize;
    while i < bytes.len() {
        let c = bytes[i];

        if escaping {
            i += push_char_at(&mut out, sql, i);
            escaping = false;
            continue;
        }

        match c {
            b'\\' if matches!(quote, Some('\'') | Some('"')) => {
                out.push('\\');
                escaping = true;
                i += 1;
            }
            b'\'' | b'"' if quote.is_none() || quote == Some(c as char) => {
                if quote.is_some() {
                    // '' 表示一个 '
                    if c == b'\'' && bytes.get(i + 1) == Some(&b'\'') {
                        out.push_str("''");
                        i += 2;
                        continue;
                    }
                    quote = None;
                } else {
                    quote = Some(c as char);
                }
                out.push(c as char);
                i += 1;
            }
            b'$' if quote == Some('$') => {
                if let Some(dq) = dollar_quote
                    && sql[i..].starts_with(dq)
                {
                    out.push_str(dq);
                    i += dq.len();
                    quote = None;
                    dollar_quote = None;
                    continue;
                }
                out.push('$');
                i += 1;
            }
            b'$' if quote.is_none() => {
                let mut j = i + 1;
                while j < bytes.len() && bytes[j].is_ascii_digit() {
                    j += 1;
                }
                if j > i + 1 {
                    let n: usize = sql[i + 1..j]
                        .parse()
                        .map_err(|_| InterpolateError::UnsupportedArgs(sql[i..j].to_string()))?;
                    let arg = n
                        .checked_sub(1)
                        .and_then(|idx| args.get(idx))
                        .ok_or(InterpolateError::MissingArgs(n))?;
                    encode_value(&mut out, arg)?;
                    i = j;
                    continue;
                }

                // $tag$ 开始一个 dollar-quoted 字符串
                let mut k = i + 1;
                while k < bytes.len() && (bytes[k].is_ascii_alphabetic() || bytes[k] == b'_') {
                    k += 1;
                }
                if k < bytes.len() && bytes[k] == b'$' {
                    let dq = &sql[i..=k];
                    out.push_str(dq);
                    quote = Some('$');
                    dollar_quote = Some(dq);
                    i = k + 1;
                    continue;
                }

                out.push('$');
                i += 1;
            }
            _ => i += push_char_at(&mut out, sql, i),
        }
    }

    Ok(out)
}

/// 写入 `sql[i..]` 的首个字符，返回其字节长度。
fn push_char_at(out: &mut String, sql: &str, i: usize) -> usize {
    match sql[i..].chars().next() {
        Some(ch) => {
            out.push(ch);
            ch.len_utf8()
        }
        None => 1,
    }
}

fn encode_value(out: &mut String, arg: &Arg) -> Result<(), InterpolateError> {
    match arg {
        Arg::Value(v) => encode_sql_value(out, v),
        Arg::Valuer(v) => {
            let resolved = v.value()?;
            encode_sql_value(out, &resolved)
        }
    }
}

fn encode_sql_value(out: &mut String, v: &SqlValue) -> Result<(), InterpolateError> {
    match v {
        SqlValue::Null => out.push_str("NULL"),
        SqlValue::Bool(b) => out.push_str(if *b { "TRUE" } else { "FALSE" }),
        SqlValue::I64(n) => out.push_str(&n.to_string()),
        SqlValue::U64(n) => out.push_str(&n.to_string()),
        SqlValue::F64(n) if n.is_nan() => out.push_str("'NaN'"),
        SqlValue::F64(n) if n.is_infinite() => {
            out.push_str(if *n > 0.0 { "'Infinity'" } else { "'-Infinity'" })
        }
        SqlValue::F64(n) => out.push_str(&n.to_string()),
        SqlValue::String(s) => quote_string(out, s.as_ref()),
        SqlValue::Bytes(b) => {
            out.push_str("E'\\\\x");
            push_hex(out, b);
            out.push_str("'::bytea");
        }
        SqlValue::DateTime(dt) => encode_datetime(out, dt)?,
    }
    Ok(())
}

fn push_hex(out: &mut String, data: &[u8]) {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    for &b in data {
        out.push(HEX[((b >> 4) & 0xF) as usize] as char);
        out.push(HEX[(b & 0xF) as usize] as char);
    }
}

fn quote_string(out: &mut String, s: &str) {
    out.push_str("E'");
    for ch in s.chars() {
        match ch {
            '\u{0000}' => out.push_str("\\0"),
            '\u{0008}' => out.push_str("\\b"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{001a}' => out.push_str("\\Z"),
            '\'' => out.push_str("\\'"),
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            _ => out.push(ch),
        }
    }
    out.push('\'');
}

fn encode_datetime(out: &mut String, v: &SqlDateTime) -> Result<(), InterpolateError> {
    // 四舍五入到微秒
    let dt = v.dt + time::Duration::nanoseconds(500);

    out.push('\'');
    out.push_str(&dt.format(DATETIME_FORMAT)?);
    out.push(' ');
    match &v.tz_abbr {
        Some(abbr) => out.push_str(abbr),
        None => out.push_str(&dt.format(OFFSET_FORMAT)?),
    }
    out.push('\'');
    Ok(())
}
