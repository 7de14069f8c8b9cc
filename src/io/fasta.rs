//! FASTA 导入：把多序列文件拆成待入库的 (标签, 序列) 对。
//!
//! 标签取整行 header（去掉 `>` 与首尾空白），序列行去掉空白后拼接。
//! 校验留给 [`Sequence::parse`](crate::model::Sequence::parse)。

use std::io::BufRead;

use crate::error::{Result, ToolkitError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FastaEntry {
    pub label: String,
    pub seq: String,
    /// header 所在行号（从 1 开始）
    pub line: usize,
}

pub struct FastaReader<R: BufRead> {
    reader: R,
    buf: String,
    lineno: usize,
    pending: Option<(String, usize)>,
    done: bool,
}

impl<R: BufRead> FastaReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, buf: String::new(), lineno: 0, pending: None, done: false }
    }

    fn read_line(&mut self) -> Result<bool> {
        self.buf.clear();
        let n = self.reader.read_line(&mut self.buf)?;
        if n == 0 {
            return Ok(false);
        }
        self.lineno += 1;
        Ok(true)
    }

    pub fn next_entry(&mut self) -> Result<Option<FastaEntry>> {
        if self.done {
            return Ok(None);
        }

        let (label, line) = match self.pending.take() {
            Some(h) => h,
            None => loop {
                if !self.read_line()? {
                    self.done = true;
                    return Ok(None);
                }
                let text = self.buf.trim();
                if text.is_empty() {
                    continue;
                }
                match text.strip_prefix('>') {
                    Some(h) => break (h.trim().to_string(), self.lineno),
                    None => {
                        return Err(ToolkitError::InvalidFasta {
                            line: self.lineno,
                            msg: "sequence data before the first FASTA header".to_string(),
                        })
                    }
                }
            },
        };

        let mut seq = String::new();
        loop {
            if !self.read_line()? {
                self.done = true;
                break;
            }
            if let Some(h) = self.buf.trim_start().strip_prefix('>') {
                self.pending = Some((h.trim().to_string(), self.lineno));
                break;
            }
            seq.extend(self.buf.chars().filter(|c| !c.is_whitespace()));
        }

        Ok(Some(FastaEntry { label, seq, line }))
    }
}

impl<R: BufRead> Iterator for FastaReader<R> {
    type Item = Result<FastaEntry>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_entry().transpose()
    }
}
