//! 工具箱服务：把分析引擎与记录仓库组合成面向调用方的操作。
//!
//! 每个操作都是“读取 → 计算完整结果 → 一次提交”，引擎失败时不写库。

pub mod batch;
pub mod import;

pub use batch::{AnalysisKind, BatchReport};
pub use import::{ImportReport, ImportRejection};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::analysis::{self, Composition, ResidueShare, SummaryStatistics};
use crate::error::{NotFoundError, Result};
use crate::model::{validate_label, RecordSummary, Sequence, SequenceRecord};
use crate::store::RecordStore;

#[derive(Clone, Copy, Debug)]
pub struct ToolkitOpt {
    /// 批量分析的线程数，0 表示交给 rayon 决定
    pub threads: usize,
}

impl Default for ToolkitOpt {
    fn default() -> Self {
        Self { threads: 1 }
    }
}

/// 列表过滤条件；两个条件可以同时生效
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub nuc_analysed: Option<bool>,
    pub aa_analysed: Option<bool>,
}

impl ListFilter {
    pub fn matches(&self, r: &SequenceRecord) -> bool {
        self.nuc_analysed.map_or(true, |want| r.nuc_analysed() == want)
            && self.aa_analysed.map_or(true, |want| r.aa_analysed() == want)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NucleotideReport {
    pub sequence_id: u64,
    pub label: String,
    pub length: usize,
    pub gc_content: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AminoAcidReport {
    pub sequence_id: u64,
    pub label: String,
    pub amino_acid_sequence: String,
    pub residue_count: usize,
    pub composition: Composition,
    pub top_3_residues: Vec<ResidueShare>,
}

pub struct Toolkit<S: RecordStore> {
    store: S,
    opt: ToolkitOpt,
}

impl<S: RecordStore> Toolkit<S> {
    pub fn new(store: S, opt: ToolkitOpt) -> Self {
        Self { store, opt }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// 先校验序列（空、过短、非法碱基），再校验标签
    pub fn create(&mut self, label: &str, sequence: &str) -> Result<SequenceRecord> {
        let sequence = Sequence::parse(sequence)?;
        validate_label(label)?;
        let record = self.store.insert(label, sequence)?;
        info!(id = record.id(), len = record.sequence().len(), "created sequence");
        Ok(record)
    }

    pub fn list(&self, filter: &ListFilter) -> Result<Vec<RecordSummary>> {
        let records = self.store.list()?;
        if records.is_empty() {
            return Err(NotFoundError::NoRecords.into());
        }
        let matched: Vec<RecordSummary> =
            records.iter().filter(|r| filter.matches(r)).map(SequenceRecord::summary).collect();
        debug!(total = records.len(), matched = matched.len(), ?filter, "listed sequences");
        if matched.is_empty() {
            return Err(NotFoundError::NoFilterMatch.into());
        }
        Ok(matched)
    }

    pub fn get(&self, id: u64) -> Result<SequenceRecord> {
        self.store.get(id)
    }

    /// ID 不存在优先于空标签报错
    pub fn relabel(&mut self, id: u64, label: &str) -> Result<SequenceRecord> {
        let mut record = self.store.get(id)?;
        record.set_label(label)?;
        self.store.put(record.clone())?;
        info!(id, "relabelled sequence");
        Ok(record)
    }

    pub fn delete(&mut self, id: u64) -> Result<SequenceRecord> {
        let removed = self.store.remove(id)?;
        info!(id, "deleted sequence");
        Ok(removed)
    }

    /// 返回删除的条数
    pub fn delete_all(&mut self) -> Result<usize> {
        let n = self.store.list()?.len();
        self.store.clear()?;
        info!(n, "deleted all sequences");
        Ok(n)
    }

    pub fn analyse_nucleotide(&mut self, id: u64) -> Result<NucleotideReport> {
        let mut record = self.store.get(id)?;
        let metrics = analysis::analyze_nucleotide(record.sequence());
        record.set_nucleotide(metrics);
        self.store.put(record.clone())?;
        info!(id, gc = metrics.gc_content, len = metrics.seq_length, "nucleotide analysis stored");
        Ok(NucleotideReport {
            sequence_id: id,
            label: record.label().to_string(),
            length: metrics.seq_length,
            gc_content: metrics.gc_content,
        })
    }

    pub fn analyse_amino_acid(&mut self, id: u64) -> Result<AminoAcidReport> {
        let mut record = self.store.get(id)?;
        let translation = analysis::translate(record.sequence())?;
        record.set_amino_acid(translation.clone());
        self.store.put(record.clone())?;
        info!(id, residues = translation.residue_count, "amino acid analysis stored");
        Ok(AminoAcidReport {
            sequence_id: id,
            label: record.label().to_string(),
            amino_acid_sequence: translation.amino_acid_sequence,
            residue_count: translation.residue_count,
            composition: translation.composition,
            top_3_residues: translation.top_3_residues,
        })
    }

    pub fn summary(&self) -> Result<SummaryStatistics> {
        let records = self.store.list()?;
        Ok(analysis::summarize(&records)?)
    }
}
