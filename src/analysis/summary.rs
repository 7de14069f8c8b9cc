//! 全库汇总统计。
//!
//! 核苷酸统计只看做过核苷酸分析的记录，氨基酸统计只看做过氨基酸分析的
//! 记录。两者对“没有数据”的处理不同：一条核苷酸分析都没有时报错，
//! 氨基酸分析缺失时 `average_amino_acid_length` 为 `null`。

use serde::{Deserialize, Serialize};

use crate::error::NotFoundError;
use crate::model::SequenceRecord;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryStatistics {
    pub total_sequences: usize,
    pub nuc_analysed_sequences: usize,
    pub aa_analysed_sequences: usize,
    pub average_gc_content: f64,
    pub average_nucleotide_length: f64,
    pub average_amino_acid_length: Option<f64>,
    pub longest_nucleotide_sequence: String,
    pub shortest_nucleotide_sequence: String,
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0f64, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 {
        None
    } else {
        Some(sum / n as f64)
    }
}

pub fn summarize(records: &[SequenceRecord]) -> Result<SummaryStatistics, NotFoundError> {
    if records.is_empty() {
        return Err(NotFoundError::NoRecords);
    }

    let nuc: Vec<(&SequenceRecord, usize, f64)> = records
        .iter()
        .filter_map(|r| r.nucleotide().map(|m| (r, m.seq_length, m.gc_content)))
        .collect();
    if nuc.is_empty() {
        return Err(NotFoundError::NoNucleotideAnalysis);
    }

    // 长度相同时保留先出现的记录
    let mut longest = nuc[0];
    let mut shortest = nuc[0];
    for &entry in &nuc[1..] {
        if entry.1 > longest.1 {
            longest = entry;
        }
        if entry.1 < shortest.1 {
            shortest = entry;
        }
    }

    let residue_counts: Vec<usize> =
        records.iter().filter_map(|r| r.amino_acid().map(|t| t.residue_count)).collect();

    Ok(SummaryStatistics {
        total_sequences: records.len(),
        nuc_analysed_sequences: nuc.len(),
        aa_analysed_sequences: residue_counts.len(),
        average_gc_content: mean(nuc.iter().map(|e| e.2)).unwrap_or_default(),
        average_nucleotide_length: mean(nuc.iter().map(|e| e.1 as f64)).unwrap_or_default(),
        average_amino_acid_length: mean(residue_counts.iter().map(|&n| n as f64)),
        longest_nucleotide_sequence: longest.0.label().to_string(),
        shortest_nucleotide_sequence: shortest.0.label().to_string(),
    })
}
