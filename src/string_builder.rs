//! 输出缓冲：一次 build 写入的 SQL 文本。

use std::fmt::Write;

#[derive(Debug, Default, Clone)]
pub struct StringBuilder {
    buf: String,
}

impl StringBuilder {
    pub fn new() -> Self {
        Self { buf: String::new() }
    }

    pub fn write_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    pub fn write_char(&mut self, c: char) {
        self.buf.push(c);
    }

    /// 用 `sep` 连接 `items`，跳过空串。
    pub fn write_strings(&mut self, items: &[String], sep: &str) {
        let mut first_added = false;
        for s in items {
            if s.is_empty() {
                continue;
            }
            if first_added {
                self.buf.push_str(sep);
            }
            self.buf.push_str(s);
            first_added = true;
        }
    }

    /// 写入 `$<n>`。
    pub fn write_placeholder(&mut self, n: usize) {
        self.buf.push('$');
        self.write_number(n as u64);
    }

    pub fn write_number(&mut self, n: u64) {
        // 写入 String 不会失败
        let _ = write!(self.buf, "{n}");
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}
