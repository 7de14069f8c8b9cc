use serde::{Deserialize, Serialize};

use crate::analysis::composition::{composition, Composition};
use crate::analysis::rank::{top_residues, ResidueShare};
use crate::codon::{AminoAcid, CodonTable};
use crate::error::ValidationError;
use crate::model::Sequence;

/// 报告中保留的高频残基个数
pub const TOP_K: usize = 3;

pub const RESIDUE_SEPARATOR: &str = "-";

/// 氨基酸分析结果，四个字段总是一起产生
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Translation {
    pub amino_acid_sequence: String,
    pub residue_count: usize,
    pub composition: Composition,
    pub top_3_residues: Vec<ResidueShare>,
}

/// 从偏移 0 开始按不重叠三联体扫描；遇到终止密码子立即停止，
/// 末尾不足 3 个碱基的片段直接丢弃。
pub fn translate_residues(seq: &Sequence) -> Vec<AminoAcid> {
    let table = CodonTable::standard();
    let mut residues = Vec::with_capacity(seq.len() / 3);
    for codon in seq.codons() {
        match table.lookup(codon).and_then(|e| e.residue) {
            Some(aa) => residues.push(aa),
            // 终止密码子
            None => break,
        }
    }
    residues
}

pub fn join_residues(residues: &[AminoAcid]) -> String {
    residues
        .iter()
        .map(|aa| aa.short_name())
        .collect::<Vec<_>>()
        .join(RESIDUE_SEPARATOR)
}

/// 翻译并附带组成统计与 Top-3；没有产生任何残基时返回
/// [`ValidationError::EmptyTranslation`]。
pub fn translate(seq: &Sequence) -> Result<Translation, ValidationError> {
    let residues = translate_residues(seq);
    if residues.is_empty() {
        return Err(ValidationError::EmptyTranslation);
    }
    Ok(Translation {
        amino_acid_sequence: join_residues(&residues),
        residue_count: residues.len(),
        composition: composition(&residues),
        top_3_residues: top_residues(&residues, TOP_K),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codon::ChemicalClass;
    use AminoAcid::*;

    fn seq(s: &str) -> Sequence {
        Sequence::parse(s).unwrap()
    }

    #[test]
    fn reference_case_discards_trailing_fragment() {
        let t = translate(&seq("ATGGAGGCGAT")).unwrap();
        assert_eq!(t.amino_acid_sequence, "Met-Glu-Ala");
        assert_eq!(t.residue_count, 3);
        assert_eq!(t.composition.get(&ChemicalClass::Nonpolar), Some(&2));
        assert_eq!(t.composition.get(&ChemicalClass::NegativelyCharged), Some(&1));
        let names: Vec<&str> = t.top_3_residues.iter().map(|s| s.residue.short_name()).collect();
        assert_eq!(names, vec!["Ala", "Glu", "Met"]);
        assert!(t.top_3_residues.iter().all(|s| s.percentage == 33.33));
    }

    #[test]
    fn stop_codon_terminates() {
        assert_eq!(translate_residues(&seq("ATGTAAGGG")), vec![Met]);
        assert_eq!(translate_residues(&seq("GGGTGGTAGATG")), vec![Gly, Trp]);
        let t = translate(&seq("ATGTGAATGATG")).unwrap();
        assert_eq!(t.amino_acid_sequence, "Met");
        assert_eq!(t.residue_count, 1);
    }

    #[test]
    fn leading_stop_is_rejected() {
        assert_eq!(translate(&seq("TAA")), Err(ValidationError::EmptyTranslation));
        assert_eq!(translate(&seq("TAGAT")), Err(ValidationError::EmptyTranslation));
        assert_eq!(translate(&seq("TGAATGATG")), Err(ValidationError::EmptyTranslation));
    }

    #[test]
    fn idempotent() {
        let s = seq("ATGAAACCCGGGTTTAAAGGG");
        assert_eq!(translate(&s), translate(&s));
        let a = serde_json::to_string(&translate(&s).unwrap()).unwrap();
        let b = serde_json::to_string(&translate(&s).unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn sum_properties_hold() {
        let mut x: u32 = 99;
        for len in 3..150 {
            let s: String = (0..len)
                .map(|_| {
                    x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                    crate::util::dna::BASES[(x >> 16) as usize % 4] as char
                })
                .collect();
            let s = seq(&s);
            let residues = translate_residues(&s);
            match translate(&s) {
                Ok(t) => {
                    assert_eq!(t.composition.values().sum::<usize>(), t.residue_count);
                    let pct: f64 = t.top_3_residues.iter().map(|r| r.percentage).sum();
                    assert!(pct <= 100.0 + 0.01);
                    let mut distinct = residues.clone();
                    distinct.sort_unstable();
                    distinct.dedup();
                    assert_eq!(t.top_3_residues.len(), distinct.len().min(TOP_K));
                    assert_eq!(t.amino_acid_sequence.split('-').count(), t.residue_count);
                }
                Err(e) => {
                    assert_eq!(e, ValidationError::EmptyTranslation);
                    assert!(residues.is_empty());
                }
            }
        }
    }
}
