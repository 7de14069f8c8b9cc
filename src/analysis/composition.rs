use std::collections::BTreeMap;

use crate::codon::{AminoAcid, ChemicalClass};

/// 化学性质 → 残基数；未出现的类别不写入
pub type Composition = BTreeMap<ChemicalClass, usize>;

pub fn composition(residues: &[AminoAcid]) -> Composition {
    let mut out = Composition::new();
    for aa in residues {
        *out.entry(aa.class()).or_insert(0) += 1;
    }
    out
}
