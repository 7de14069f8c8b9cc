//! 错误类型。
//!
//! 两类调用方可见的错误：[`ValidationError`]（输入问题，对应 400）与
//! [`NotFoundError`]（标识或数据不可用，对应 404）。存储层的 I/O 与解析错误
//! 归入 [`ToolkitError`] 的其余分支。

use thiserror::Error;

/// 输入校验失败
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no nucleotide sequence was entered")]
    EmptySequence,

    #[error("sequence too short to be biologically meaningful: {len} nt, a minimum of 3 nucleotides is required")]
    SequenceTooShort { len: usize },

    #[error("invalid nucleotide '{base}' at position {position}: sequence must consist only of 'A', 'T', 'C' and 'G'")]
    InvalidBase { base: char, position: usize },

    #[error("no sequence label was entered")]
    EmptyLabel,

    #[error("translation produced no viable amino acid sequence")]
    EmptyTranslation,
}

/// 记录不存在或没有可用数据
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotFoundError {
    #[error("sequence ID:{0} not found")]
    Id(u64),

    #[error("no nucleotide sequences have been submitted")]
    NoRecords,

    #[error("no sequences match the applied filter criteria")]
    NoFilterMatch,

    #[error("no stored nucleotide sequences have undergone nucleotide analysis")]
    NoNucleotideAnalysis,
}

#[derive(Debug, Error)]
pub enum ToolkitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    NotFound(#[from] NotFoundError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupt record store at line {line}: {msg}")]
    CorruptStore { line: usize, msg: String },

    #[error("invalid FASTA format at line {line}: {msg}")]
    InvalidFasta { line: usize, msg: String },

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Internal,
}

impl ToolkitError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ToolkitError::Validation(_) | ToolkitError::InvalidFasta { .. } => ErrorKind::Validation,
            ToolkitError::NotFound(_) => ErrorKind::NotFound,
            _ => ErrorKind::Internal,
        }
    }

    /// HTTP 风格状态码，供边界层映射
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::Validation => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::Internal => 500,
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolkitError>;
