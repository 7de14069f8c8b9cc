//! 碱基编码工具。
//!
//! 密码子表按 T/C/A/G 顺序排列（NCBI 表 1 的惯例），因此碱基的 2-bit
//! 编码也沿用这个顺序：T=0, C=1, A=2, G=3。

/// 有效碱基，按编码顺序排列
pub const BASES: [u8; 4] = [b'T', b'C', b'A', b'G'];

/// 单个碱基的 2-bit 编码；非 ATGC 返回 None
#[inline]
pub fn to_code(b: u8) -> Option<u8> {
    match b.to_ascii_uppercase() {
        b'T' => Some(0),
        b'C' => Some(1),
        b'A' => Some(2),
        b'G' => Some(3),
        _ => None,
    }
}

#[inline]
pub fn from_code(c: u8) -> u8 {
    BASES[(c & 0b11) as usize]
}

/// 三联体的 6-bit 索引（0..64），任一位置无效则返回 None
#[inline]
pub fn codon_index(codon: &[u8]) -> Option<usize> {
    if codon.len() != 3 {
        return None;
    }
    let mut idx = 0usize;
    for &b in codon {
        idx = (idx << 2) | to_code(b)? as usize;
    }
    Some(idx)
}

#[inline]
pub fn is_gc(b: u8) -> bool {
    matches!(b, b'G' | b'C')
}

pub fn normalize_seq(seq: &str) -> String {
    seq.to_ascii_uppercase()
}

/// 第一个非 ATGC 字符及其位置
pub fn first_invalid_base(seq: &str) -> Option<(usize, char)> {
    seq.char_indices().find(|&(_, ch)| !ch.is_ascii() || to_code(ch as u8).is_none())
}
