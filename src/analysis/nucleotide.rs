use serde::{Deserialize, Serialize};

use crate::model::Sequence;
use crate::util::dna;

/// 核苷酸分析结果；`gc_content` 不做舍入
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NucleotideMetrics {
    pub seq_length: usize,
    pub gc_content: f64,
}

pub fn analyze_nucleotide(seq: &Sequence) -> NucleotideMetrics {
    let bytes = seq.as_bytes();
    let gc = bytes.iter().filter(|&&b| dna::is_gc(b)).count();
    let seq_length = bytes.len();
    NucleotideMetrics { seq_length, gc_content: gc as f64 / seq_length as f64 }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seq(s: &str) -> Sequence {
        Sequence::parse(s).unwrap()
    }

    #[test]
    fn reference_case() {
        let m = analyze_nucleotide(&seq("ATGGAGGCGAT"));
        assert_eq!(m.seq_length, 11);
        // G×5 + C×1
        assert_eq!(m.gc_content, 6.0 / 11.0);
    }

    #[test]
    fn extremes() {
        assert_eq!(analyze_nucleotide(&seq("GCGCCG")).gc_content, 1.0);
        assert_eq!(analyze_nucleotide(&seq("ATTA")).gc_content, 0.0);
        assert_eq!(analyze_nucleotide(&seq("ATGC")).gc_content, 0.5);
    }

    #[test]
    fn bounded_and_length_preserving() {
        let mut x: u32 = 7;
        for len in 3..200 {
            let s: String = (0..len)
                .map(|_| {
                    x = x.wrapping_mul(1_103_515_245).wrapping_add(12_345);
                    dna::BASES[(x >> 16) as usize % 4] as char
                })
                .collect();
            let m = analyze_nucleotide(&seq(&s));
            assert_eq!(m.seq_length, len);
            assert!((0.0..=1.0).contains(&m.gc_content));
            assert_eq!(analyze_nucleotide(&seq(&s)), m);
        }
    }
}
