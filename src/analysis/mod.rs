//! 序列分析引擎：纯函数，无 I/O。

pub mod composition;
pub mod nucleotide;
pub mod rank;
pub mod summary;
pub mod translate;

pub use composition::{composition, Composition};
pub use nucleotide::{analyze_nucleotide, NucleotideMetrics};
pub use rank::{round2, top_residues, ResidueShare};
pub use summary::{summarize, SummaryStatistics};
pub use translate::{translate, translate_residues, Translation, TOP_K};
