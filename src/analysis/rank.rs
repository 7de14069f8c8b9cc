//! Top-K 残基排序。
//!
//! 百分比 = 100 × count / total，保留两位小数，舍入方式为“远离零”
//! （`f64::round`，对非负值即四舍五入）。排序先按舍入后的百分比降序，
//! 相同时按三字母缩写升序。

use serde::{Deserialize, Serialize};

use crate::codon::AminoAcid;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ResidueShare {
    pub residue: AminoAcid,
    pub percentage: f64,
}

#[inline]
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// `residues` 为空时返回空列表
pub fn top_residues(residues: &[AminoAcid], k: usize) -> Vec<ResidueShare> {
    let total = residues.len();
    if total == 0 || k == 0 {
        return Vec::new();
    }

    let mut counts = [0usize; AminoAcid::ALL.len()];
    for &aa in residues {
        counts[aa as usize] += 1;
    }

    let mut shares: Vec<ResidueShare> = AminoAcid::ALL
        .iter()
        .zip(counts.iter())
        .filter(|(_, &n)| n > 0)
        .map(|(&residue, &n)| ResidueShare {
            residue,
            percentage: round2(100.0 * n as f64 / total as f64),
        })
        .collect();

    shares.sort_by(|a, b| {
        b.percentage
            .total_cmp(&a.percentage)
            .then_with(|| a.residue.short_name().cmp(b.residue.short_name()))
    });
    shares.truncate(k);
    shares
}

#[cfg(test)]
mod tests {
    use super::*;
    use AminoAcid::*;

    #[test]
    fn ranks_by_percentage() {
        let top = top_residues(&[Leu, Leu, Leu, Met, Gly, Gly], 3);
        assert_eq!(
            top,
            vec![
                ResidueShare { residue: Leu, percentage: 50.0 },
                ResidueShare { residue: Gly, percentage: 33.33 },
                ResidueShare { residue: Met, percentage: 16.67 },
            ]
        );
    }

    #[test]
    fn ties_break_alphabetically() {
        // 输入顺序与字母序相反
        let top = top_residues(&[Val, Met, Glu, Ala], 3);
        let names: Vec<&str> = top.iter().map(|s| s.residue.short_name()).collect();
        assert_eq!(names, vec!["Ala", "Glu", "Met"]);
        assert!(top.iter().all(|s| s.percentage == 25.0));
    }

    #[test]
    fn fewer_than_k_distinct() {
        let top = top_residues(&[Trp, Trp], 3);
        assert_eq!(top, vec![ResidueShare { residue: Trp, percentage: 100.0 }]);
        assert!(top_residues(&[], 3).is_empty());
        assert!(top_residues(&[Trp], 0).is_empty());
    }

    #[test]
    fn rounding_two_places() {
        assert_eq!(round2(100.0 / 3.0), 33.33);
        assert_eq!(round2(200.0 / 3.0), 66.67);
        assert_eq!(round2(12.5), 12.5);
        assert_eq!(round2(0.125), 0.13);
    }

    #[test]
    fn percentages_sum_at_most_100() {
        let residues = [Ala, Arg, Asn, Asp, Cys, Ala, Arg, Gly];
        let top = top_residues(&residues, 3);
        assert_eq!(top.len(), 3);
        let sum: f64 = top.iter().map(|s| s.percentage).sum();
        assert!(sum <= 100.0 + 1e-9);
    }
}
