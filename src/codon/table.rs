//! 标准遗传密码（NCBI 表 1）。
//!
//! 64 个密码子按 T/C/A/G 顺序展开，第一位碱基变化最慢；索引由
//! [`dna::codon_index`] 计算。`None` 表示终止密码子（TAA、TAG、TGA）。

use crate::codon::residue::{AminoAcid, ChemicalClass};
use crate::util::dna;

use AminoAcid::*;

const STANDARD_CODE: [Option<AminoAcid>; 64] = [
    // Txx
    Some(Phe), Some(Phe), Some(Leu), Some(Leu),
    Some(Ser), Some(Ser), Some(Ser), Some(Ser),
    Some(Tyr), Some(Tyr), None, None,
    Some(Cys), Some(Cys), None, Some(Trp),
    // Cxx
    Some(Leu), Some(Leu), Some(Leu), Some(Leu),
    Some(Pro), Some(Pro), Some(Pro), Some(Pro),
    Some(His), Some(His), Some(Gln), Some(Gln),
    Some(Arg), Some(Arg), Some(Arg), Some(Arg),
    // Axx
    Some(Ile), Some(Ile), Some(Ile), Some(Met),
    Some(Thr), Some(Thr), Some(Thr), Some(Thr),
    Some(Asn), Some(Asn), Some(Lys), Some(Lys),
    Some(Ser), Some(Ser), Some(Arg), Some(Arg),
    // Gxx
    Some(Val), Some(Val), Some(Val), Some(Val),
    Some(Ala), Some(Ala), Some(Ala), Some(Ala),
    Some(Asp), Some(Asp), Some(Glu), Some(Glu),
    Some(Gly), Some(Gly), Some(Gly), Some(Gly),
];

static STANDARD: CodonTable = CodonTable { residues: STANDARD_CODE };

/// 单个密码子的查表结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodonEntry {
    pub codon: [u8; 3],
    pub residue: Option<AminoAcid>,
}

impl CodonEntry {
    #[inline]
    pub fn is_stop(&self) -> bool {
        self.residue.is_none()
    }

    pub fn class(&self) -> Option<ChemicalClass> {
        self.residue.map(AminoAcid::class)
    }

    pub fn codon_str(&self) -> &str {
        // 三个字节均来自 dna::BASES
        std::str::from_utf8(&self.codon).unwrap_or("???")
    }
}

/// 进程级只读密码子表
#[derive(Debug)]
pub struct CodonTable {
    residues: [Option<AminoAcid>; 64],
}

impl CodonTable {
    pub fn standard() -> &'static CodonTable {
        &STANDARD
    }

    /// 按 6-bit 索引取条目，`idx` 必须小于 64
    #[inline]
    fn entry(&self, idx: usize) -> CodonEntry {
        let codon = [
            dna::from_code((idx >> 4) as u8),
            dna::from_code((idx >> 2) as u8),
            dna::from_code(idx as u8),
        ];
        CodonEntry { codon, residue: self.residues[idx] }
    }

    /// 查找密码子（大小写不敏感）；长度不为 3 或含非 ATGC 字符时返回 None
    #[inline]
    pub fn lookup(&self, codon: &[u8]) -> Option<CodonEntry> {
        dna::codon_index(codon).map(|idx| self.entry(idx))
    }

    pub fn entries(&self) -> impl Iterator<Item = CodonEntry> + '_ {
        (0..self.residues.len()).map(move |idx| self.entry(idx))
    }

    pub fn stop_codons(&self) -> impl Iterator<Item = CodonEntry> + '_ {
        self.entries().filter(CodonEntry::is_stop)
    }
}
