use std::io::BufRead;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;
use crate::io::fasta::FastaReader;
use crate::model::{RecordSummary, Sequence, SequenceRecord};
use crate::store::{next_id, RecordStore};
use crate::toolkit::Toolkit;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportRejection {
    pub line: usize,
    pub label: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportReport {
    pub created: Vec<RecordSummary>,
    pub rejected: Vec<ImportRejection>,
}

impl<S: RecordStore> Toolkit<S> {
    /// 逐条按 `create` 的规则校验 FASTA 记录；合格的一次性入库，
    /// 不合格的连同原因一起返回
    pub fn import_fasta<R: BufRead>(&mut self, reader: R) -> Result<ImportReport> {
        let mut records = self.store.list()?;
        let mut id = next_id(&records);
        let mut created = Vec::new();
        let mut rejected = Vec::new();

        for entry in FastaReader::new(reader) {
            let entry = entry?;
            let parsed =
                Sequence::parse(&entry.seq).and_then(|seq| SequenceRecord::new(id, &entry.label, seq));
            match parsed {
                Ok(record) => {
                    created.push(record.summary());
                    records.push(record);
                    id += 1;
                }
                Err(e) => {
                    warn!(line = entry.line, label = %entry.label, error = %e, "rejected FASTA entry");
                    rejected.push(ImportRejection { line: entry.line, label: entry.label, reason: e.to_string() });
                }
            }
        }

        if !created.is_empty() {
            self.store.save_all(&records)?;
        }
        info!(created = created.len(), rejected = rejected.len(), "imported FASTA");
        Ok(ImportReport { created, rejected })
    }
}
