//! 序列记录。
//!
//! 内存中两组派生字段各自是一个 `Option`，`nuc_analysed` / `aa_analysed`
//! 由其是否存在推出；落盘时展开成扁平的 JSON 对象，未分析的字段省略。

use serde::{Deserialize, Serialize};

use crate::analysis::composition::Composition;
use crate::analysis::nucleotide::NucleotideMetrics;
use crate::analysis::rank::ResidueShare;
use crate::analysis::translate::Translation;
use crate::error::ValidationError;
use crate::model::sequence::{validate_label, Sequence};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RecordRepr", into = "RecordRepr")]
pub struct SequenceRecord {
    id: u64,
    label: String,
    sequence: Sequence,
    nucleotide: Option<NucleotideMetrics>,
    amino_acid: Option<Translation>,
}

impl SequenceRecord {
    pub fn new(id: u64, label: &str, sequence: Sequence) -> Result<Self, ValidationError> {
        let label = validate_label(label)?.to_string();
        Ok(Self { id, label, sequence, nucleotide: None, amino_acid: None })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn nucleotide(&self) -> Option<&NucleotideMetrics> {
        self.nucleotide.as_ref()
    }

    pub fn amino_acid(&self) -> Option<&Translation> {
        self.amino_acid.as_ref()
    }

    pub fn nuc_analysed(&self) -> bool {
        self.nucleotide.is_some()
    }

    pub fn aa_analysed(&self) -> bool {
        self.amino_acid.is_some()
    }

    /// 序列不可变，只有标签可以修改
    pub fn set_label(&mut self, label: &str) -> Result<(), ValidationError> {
        self.label = validate_label(label)?.to_string();
        Ok(())
    }

    /// 整组覆盖上一次的核苷酸分析结果
    pub fn set_nucleotide(&mut self, metrics: NucleotideMetrics) {
        self.nucleotide = Some(metrics);
    }

    /// 整组覆盖上一次的氨基酸分析结果
    pub fn set_amino_acid(&mut self, translation: Translation) {
        self.amino_acid = Some(translation);
    }

    pub fn summary(&self) -> RecordSummary {
        RecordSummary {
            id: self.id,
            label: self.label.clone(),
            sequence: self.sequence.to_string(),
            nuc_analysed: self.nuc_analysed(),
            aa_analysed: self.aa_analysed(),
        }
    }
}

/// 列表视图：不含分析结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSummary {
    pub id: u64,
    pub label: String,
    pub sequence: String,
    pub nuc_analysed: bool,
    pub aa_analysed: bool,
}

/// 落盘格式
#[derive(Serialize, Deserialize)]
struct RecordRepr {
    id: u64,
    label: String,
    sequence: Sequence,
    #[serde(default)]
    nuc_analysed: bool,
    #[serde(default)]
    aa_analysed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    gc_content: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    seq_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    amino_acid_sequence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    residue_count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    composition: Option<Composition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    top_3_residues: Option<Vec<ResidueShare>>,
}

impl From<SequenceRecord> for RecordRepr {
    fn from(r: SequenceRecord) -> Self {
        let nuc_analysed = r.nuc_analysed();
        let aa_analysed = r.aa_analysed();
        let (gc_content, seq_length) = match r.nucleotide {
            Some(m) => (Some(m.gc_content), Some(m.seq_length)),
            None => (None, None),
        };
        let (amino_acid_sequence, residue_count, composition, top_3_residues) = match r.amino_acid {
            Some(t) => (
                Some(t.amino_acid_sequence),
                Some(t.residue_count),
                Some(t.composition),
                Some(t.top_3_residues),
            ),
            None => (None, None, None, None),
        };
        RecordRepr {
            id: r.id,
            label: r.label,
            sequence: r.sequence,
            nuc_analysed,
            aa_analysed,
            gc_content,
            seq_length,
            amino_acid_sequence,
            residue_count,
            composition,
            top_3_residues,
        }
    }
}

impl TryFrom<RecordRepr> for SequenceRecord {
    type Error = String;

    fn try_from(r: RecordRepr) -> Result<Self, Self::Error> {
        let nucleotide = match (r.nuc_analysed, r.gc_content, r.seq_length) {
            (true, Some(gc_content), Some(seq_length)) => Some(NucleotideMetrics { seq_length, gc_content }),
            (false, None, None) => None,
            (true, ..) => return Err(format!("record {}: nuc_analysed is set but nucleotide fields are missing", r.id)),
            (false, ..) => return Err(format!("record {}: nucleotide fields present without nuc_analysed", r.id)),
        };
        let amino_acid = match (
            r.aa_analysed,
            r.amino_acid_sequence,
            r.residue_count,
            r.composition,
            r.top_3_residues,
        ) {
            (true, Some(amino_acid_sequence), Some(residue_count), Some(composition), Some(top_3_residues)) => {
                Some(Translation { amino_acid_sequence, residue_count, composition, top_3_residues })
            }
            (false, None, None, None, None) => None,
            (true, ..) => return Err(format!("record {}: aa_analysed is set but amino acid fields are missing", r.id)),
            (false, ..) => return Err(format!("record {}: amino acid fields present without aa_analysed", r.id)),
        };
        if r.label.trim().is_empty() {
            return Err(format!("record {}: empty label", r.id));
        }
        if let Some(m) = &nucleotide {
            if m.seq_length != r.sequence.len() {
                return Err(format!(
                    "record {}: seq_length {} disagrees with sequence length {}",
                    r.id,
                    m.seq_length,
                    r.sequence.len()
                ));
            }
            if !(0.0..=1.0).contains(&m.gc_content) {
                return Err(format!("record {}: gc_content {} outside [0, 1]", r.id, m.gc_content));
            }
        }
        if let Some(t) = &amino_acid {
            let residues = t.amino_acid_sequence.split('-').count();
            let classified: usize = t.composition.values().sum();
            if t.amino_acid_sequence.is_empty() || residues != t.residue_count || classified != t.residue_count {
                return Err(format!(
                    "record {}: residue_count {} disagrees with amino_acid_sequence or composition",
                    r.id, t.residue_count
                ));
            }
        }
        Ok(SequenceRecord { id: r.id, label: r.label, sequence: r.sequence, nucleotide, amino_acid })
    }
}
