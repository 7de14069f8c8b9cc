use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::util::dna;

/// 至少一个完整密码子
pub const MIN_SEQUENCE_LEN: usize = 3;

/// 已校验的核苷酸序列：大写、仅含 ATGC、长度 ≥ 3。
///
/// 只能通过 [`Sequence::parse`] 构造，分析函数因此无需再检查字母表。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sequence(String);

impl Sequence {
    /// 转大写后依次检查：空序列、长度不足、非法碱基
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let seq = dna::normalize_seq(raw);
        if seq.is_empty() {
            return Err(ValidationError::EmptySequence);
        }
        let len = seq.chars().count();
        if len < MIN_SEQUENCE_LEN {
            return Err(ValidationError::SequenceTooShort { len });
        }
        if let Some((position, base)) = dna::first_invalid_base(&seq) {
            return Err(ValidationError::InvalidBase { base, position });
        }
        Ok(Sequence(seq))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 不重叠的完整三联体，末尾不足 3 个碱基的部分被丢弃
    pub fn codons(&self) -> std::slice::ChunksExact<'_, u8> {
        self.as_bytes().chunks_exact(3)
    }
}

impl TryFrom<String> for Sequence {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Sequence::parse(&value)
    }
}

impl From<Sequence> for String {
    fn from(seq: Sequence) -> Self {
        seq.0
    }
}

impl AsRef<str> for Sequence {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// 标签去掉首尾空白后不能为空；返回值保留原始文本
pub fn validate_label(label: &str) -> Result<&str, ValidationError> {
    if label.trim().is_empty() {
        Err(ValidationError::EmptyLabel)
    } else {
        Ok(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_uppercases() {
        let s = Sequence::parse("atgGca").unwrap();
        assert_eq!(s.as_str(), "ATGGCA");
        assert_eq!(s.len(), 6);
    }

    #[test]
    fn parse_rejects_in_order() {
        assert_eq!(Sequence::parse(""), Err(ValidationError::EmptySequence));
        assert_eq!(Sequence::parse("AT"), Err(ValidationError::SequenceTooShort { len: 2 }));
        // 长度检查先于字母表检查
        assert_eq!(Sequence::parse("XY"), Err(ValidationError::SequenceTooShort { len: 2 }));
        assert_eq!(
            Sequence::parse("ATGNNN"),
            Err(ValidationError::InvalidBase { base: 'N', position: 3 })
        );
        assert_eq!(
            Sequence::parse("AT G"),
            Err(ValidationError::InvalidBase { base: ' ', position: 2 })
        );
    }

    #[test]
    fn codons_drop_trailing_fragment() {
        let s = Sequence::parse("ATGGAGGCGAT").unwrap();
        let codons: Vec<&[u8]> = s.codons().collect();
        assert_eq!(codons, vec![&b"ATG"[..], b"GAG", b"GCG"]);
    }

    #[test]
    fn serde_validates() {
        let s: Sequence = serde_json::from_str("\"acgt\"").unwrap();
        assert_eq!(s.as_str(), "ACGT");
        assert!(serde_json::from_str::<Sequence>("\"ACGU\"").is_err());
        assert_eq!(serde_json::to_string(&s).unwrap(), "\"ACGT\"");
    }

    #[test]
    fn labels() {
        assert_eq!(validate_label("  plasmid A "), Ok("  plasmid A "));
        assert_eq!(validate_label("   "), Err(ValidationError::EmptyLabel));
        assert_eq!(validate_label(""), Err(ValidationError::EmptyLabel));
    }
}
