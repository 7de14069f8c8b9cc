//! 批量分析：对全库并行计算，再一次性提交。

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::analysis;
use crate::error::{NotFoundError, Result, ValidationError};
use crate::model::SequenceRecord;
use crate::store::RecordStore;
use crate::toolkit::Toolkit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisKind {
    Nucleotide,
    AminoAcid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    pub kind: AnalysisKind,
    pub analysed: Vec<u64>,
    /// 翻译结果为空、未写入的记录
    pub skipped: Vec<u64>,
}

fn analyse_one(mut record: SequenceRecord, kind: AnalysisKind) -> (SequenceRecord, bool) {
    match kind {
        AnalysisKind::Nucleotide => {
            let metrics = analysis::analyze_nucleotide(record.sequence());
            record.set_nucleotide(metrics);
            (record, true)
        }
        AnalysisKind::AminoAcid => match analysis::translate(record.sequence()) {
            Ok(t) => {
                record.set_amino_acid(t);
                (record, true)
            }
            Err(ValidationError::EmptyTranslation) => (record, false),
            Err(e) => {
                warn!(id = record.id(), error = %e, "unexpected translation failure");
                (record, false)
            }
        },
    }
}

fn analyse_records(records: Vec<SequenceRecord>, kind: AnalysisKind) -> Vec<(SequenceRecord, bool)> {
    records.into_par_iter().map(|r| analyse_one(r, kind)).collect()
}

impl<S: RecordStore> Toolkit<S> {
    pub fn analyse_all(&mut self, kind: AnalysisKind) -> Result<BatchReport> {
        let records = self.store.list()?;
        if records.is_empty() {
            return Err(NotFoundError::NoRecords.into());
        }

        let n = records.len();
        let outcomes = match rayon::ThreadPoolBuilder::new().num_threads(self.opt.threads).build() {
            Ok(pool) => pool.install(|| analyse_records(records, kind)),
            Err(e) => {
                warn!(error = %e, "cannot build thread pool, using the global one");
                analyse_records(records, kind)
            }
        };

        let mut analysed = Vec::new();
        let mut skipped = Vec::new();
        let mut updated = Vec::with_capacity(n);
        for (record, ok) in outcomes {
            if ok {
                analysed.push(record.id());
            } else {
                skipped.push(record.id());
            }
            updated.push(record);
        }
        self.store.save_all(&updated)?;
        info!(?kind, analysed = analysed.len(), skipped = skipped.len(), "batch analysis stored");
        Ok(BatchReport { kind, analysed, skipped })
    }
}
