//! # dna-toolkit
//!
//! 短核苷酸序列的存储与分析工具箱。
//!
//! 本 crate 提供：
//!
//! - **核苷酸分析**：序列长度与 GC 含量
//! - **翻译**：标准遗传密码三联体扫描，遇终止密码子停止
//! - **组成统计**：按侧链化学性质计数，Top-3 高频残基
//! - **汇总统计**：全库平均 GC、平均长度、最长/最短序列
//! - **记录仓库**：JSON Lines 文件存储（每行一条记录）
//!
//! ## 快速示例
//!
//! ```rust
//! use dna_toolkit::analysis;
//! use dna_toolkit::model::Sequence;
//!
//! let seq = Sequence::parse("ATGGAGGCGAT").unwrap();
//! let nuc = analysis::analyze_nucleotide(&seq);
//! assert_eq!(nuc.seq_length, 11);
//!
//! let t = analysis::translate(&seq).unwrap();
//! assert_eq!(t.amino_acid_sequence, "Met-Glu-Ala");
//! assert_eq!(t.residue_count, 3);
//! ```
//!
//! ## 模块说明
//!
//! - [`codon`] — 标准密码子表与氨基酸化学性质
//! - [`analysis`] — 纯计算的分析引擎
//! - [`model`] — 已校验序列与序列记录
//! - [`store`] — 记录仓库（JSON Lines / 内存）
//! - [`toolkit`] — 组合引擎与仓库的服务层
//! - [`io`] — FASTA 导入
//! - [`util`] — 碱基编码、日志初始化

pub mod analysis;
pub mod codon;
pub mod error;
pub mod io;
pub mod model;
pub mod store;
pub mod toolkit;
pub mod util;

pub use error::{ErrorKind, NotFoundError, Result, ToolkitError, ValidationError};
