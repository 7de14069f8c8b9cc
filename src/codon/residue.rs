use std::fmt;

use serde::{Deserialize, Serialize};

/// 侧链化学性质分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChemicalClass {
    #[serde(rename = "nonpolar")]
    Nonpolar,
    #[serde(rename = "polar")]
    Polar,
    #[serde(rename = "positively charged")]
    PositivelyCharged,
    #[serde(rename = "negatively charged")]
    NegativelyCharged,
}

impl ChemicalClass {
    pub fn name(self) -> &'static str {
        match self {
            ChemicalClass::Nonpolar => "nonpolar",
            ChemicalClass::Polar => "polar",
            ChemicalClass::PositivelyCharged => "positively charged",
            ChemicalClass::NegativelyCharged => "negatively charged",
        }
    }
}

impl fmt::Display for ChemicalClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 20 种标准氨基酸，序列化为三字母缩写（"Met"、"Glu" ...）。
///
/// 变体按缩写的字母序声明，`Ord` 因此与名称字母序一致。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AminoAcid {
    Ala,
    Arg,
    Asn,
    Asp,
    Cys,
    Gln,
    Glu,
    Gly,
    His,
    Ile,
    Leu,
    Lys,
    Met,
    Phe,
    Pro,
    Ser,
    Thr,
    Trp,
    Tyr,
    Val,
}

impl AminoAcid {
    pub const ALL: [AminoAcid; 20] = [
        AminoAcid::Ala,
        AminoAcid::Arg,
        AminoAcid::Asn,
        AminoAcid::Asp,
        AminoAcid::Cys,
        AminoAcid::Gln,
        AminoAcid::Glu,
        AminoAcid::Gly,
        AminoAcid::His,
        AminoAcid::Ile,
        AminoAcid::Leu,
        AminoAcid::Lys,
        AminoAcid::Met,
        AminoAcid::Phe,
        AminoAcid::Pro,
        AminoAcid::Ser,
        AminoAcid::Thr,
        AminoAcid::Trp,
        AminoAcid::Tyr,
        AminoAcid::Val,
    ];

    pub fn short_name(self) -> &'static str {
        match self {
            AminoAcid::Ala => "Ala",
            AminoAcid::Arg => "Arg",
            AminoAcid::Asn => "Asn",
            AminoAcid::Asp => "Asp",
            AminoAcid::Cys => "Cys",
            AminoAcid::Gln => "Gln",
            AminoAcid::Glu => "Glu",
            AminoAcid::Gly => "Gly",
            AminoAcid::His => "His",
            AminoAcid::Ile => "Ile",
            AminoAcid::Leu => "Leu",
            AminoAcid::Lys => "Lys",
            AminoAcid::Met => "Met",
            AminoAcid::Phe => "Phe",
            AminoAcid::Pro => "Pro",
            AminoAcid::Ser => "Ser",
            AminoAcid::Thr => "Thr",
            AminoAcid::Trp => "Trp",
            AminoAcid::Tyr => "Tyr",
            AminoAcid::Val => "Val",
        }
    }

    pub fn class(self) -> ChemicalClass {
        use AminoAcid::*;
        match self {
            Ala | Gly | Ile | Leu | Met | Phe | Pro | Trp | Val => ChemicalClass::Nonpolar,
            Asn | Cys | Gln | Ser | Thr | Tyr => ChemicalClass::Polar,
            Arg | His | Lys => ChemicalClass::PositivelyCharged,
            Asp | Glu => ChemicalClass::NegativelyCharged,
        }
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}
