//! 标准遗传密码与氨基酸化学性质。

pub mod residue;
pub mod table;

pub use residue::{AminoAcid, ChemicalClass};
pub use table::{CodonEntry, CodonTable};
