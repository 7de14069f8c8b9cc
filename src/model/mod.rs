pub mod record;
pub mod sequence;

pub use record::{RecordSummary, SequenceRecord};
pub use sequence::{validate_label, Sequence, MIN_SEQUENCE_LEN};
