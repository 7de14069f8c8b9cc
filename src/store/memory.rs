use crate::error::Result;
use crate::model::SequenceRecord;
use crate::store::RecordStore;

/// 进程内仓库，用于测试和嵌入
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    records: Vec<SequenceRecord>,
}

impl RecordStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<SequenceRecord>> {
        Ok(self.records.clone())
    }

    fn save_all(&mut self, records: &[SequenceRecord]) -> Result<()> {
        self.records = records.to_vec();
        Ok(())
    }
}
