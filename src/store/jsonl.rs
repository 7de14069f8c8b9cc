//! JSON Lines 文件仓库：每行一条完整记录，任何修改都整体重写文件。
//!
//! 文件不存在视为空库。写入先落到同目录的临时文件，再原子地 rename
//! 覆盖原文件，中途失败不会留下半写的库。

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, warn};

use crate::error::{Result, ToolkitError};
use crate::model::SequenceRecord;
use crate::store::RecordStore;

/// 原服务使用的文件名
pub const DEFAULT_STORE_PATH: &str = "sequences.txt";

#[derive(Debug, Clone)]
pub struct JsonLinesStore {
    path: PathBuf,
}

impl JsonLinesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// 解析 JSON Lines；空行跳过，行号从 1 开始计
pub fn read_records<R: BufRead>(reader: R) -> Result<Vec<SequenceRecord>> {
    let mut records = Vec::new();
    let mut seen = HashSet::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let lineno = idx + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let record: SequenceRecord = serde_json::from_str(trimmed)
            .map_err(|e| ToolkitError::CorruptStore { line: lineno, msg: e.to_string() })?;
        if !seen.insert(record.id()) {
            return Err(ToolkitError::CorruptStore {
                line: lineno,
                msg: format!("duplicate record id {}", record.id()),
            });
        }
        records.push(record);
    }
    Ok(records)
}

pub fn write_records<W: Write>(mut w: W, records: &[SequenceRecord]) -> Result<()> {
    for record in records {
        serde_json::to_writer(&mut w, record)?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

impl RecordStore for JsonLinesStore {
    fn load_all(&self) -> Result<Vec<SequenceRecord>> {
        let fh = match File::open(&self.path) {
            Ok(fh) => fh,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "store file absent, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };
        let records = read_records(BufReader::new(fh))?;
        debug!(path = %self.path.display(), n = records.len(), "loaded records");
        Ok(records)
    }

    fn save_all(&mut self, records: &[SequenceRecord]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let tmp = NamedTempFile::new_in(dir)?;
        {
            let mut w = BufWriter::new(tmp.as_file());
            write_records(&mut w, records)?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| {
            warn!(path = %self.path.display(), error = %e.error, "failed to replace store file");
            ToolkitError::Io(e.error)
        })?;
        debug!(path = %self.path.display(), n = records.len(), "rewrote store");
        Ok(())
    }
}
