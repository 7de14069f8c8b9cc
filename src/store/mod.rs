//! 记录仓库。
//!
//! 实现者只需提供整库读取与整库写回；单条记录的查询、替换、删除与
//! ID 分配都在此基础上以“读-改-写”完成，每次修改对应一次完整重写。

pub mod jsonl;
pub mod memory;

pub use jsonl::JsonLinesStore;
pub use memory::MemoryStore;

use crate::error::{NotFoundError, Result};
use crate::model::{Sequence, SequenceRecord};

/// 最大已有 ID + 1；空库为 1
pub fn next_id(records: &[SequenceRecord]) -> u64 {
    records.iter().map(SequenceRecord::id).max().map_or(1, |max| max + 1)
}

pub trait RecordStore {
    /// 按插入顺序返回全部记录
    fn load_all(&self) -> Result<Vec<SequenceRecord>>;

    /// 用 `records` 整体替换库内容
    fn save_all(&mut self, records: &[SequenceRecord]) -> Result<()>;

    fn list(&self) -> Result<Vec<SequenceRecord>> {
        self.load_all()
    }

    fn get(&self, id: u64) -> Result<SequenceRecord> {
        self.load_all()?
            .into_iter()
            .find(|r| r.id() == id)
            .ok_or_else(|| NotFoundError::Id(id).into())
    }

    fn next_id(&self) -> Result<u64> {
        Ok(next_id(&self.load_all()?))
    }

    /// 分配新 ID 并追加到末尾
    fn insert(&mut self, label: &str, sequence: Sequence) -> Result<SequenceRecord> {
        let mut records = self.load_all()?;
        let record = SequenceRecord::new(next_id(&records), label, sequence)?;
        records.push(record.clone());
        self.save_all(&records)?;
        Ok(record)
    }

    /// 整条替换同 ID 的记录
    fn put(&mut self, record: SequenceRecord) -> Result<()> {
        self.put_many(vec![record])
    }

    /// 一次重写提交多条替换；任一 ID 不存在则什么都不写
    fn put_many(&mut self, updates: Vec<SequenceRecord>) -> Result<()> {
        let mut records = self.load_all()?;
        for update in updates {
            let slot = records
                .iter_mut()
                .find(|r| r.id() == update.id())
                .ok_or(NotFoundError::Id(update.id()))?;
            *slot = update;
        }
        self.save_all(&records)
    }

    fn remove(&mut self, id: u64) -> Result<SequenceRecord> {
        let mut records = self.load_all()?;
        let pos = records.iter().position(|r| r.id() == id).ok_or(NotFoundError::Id(id))?;
        let removed = records.remove(pos);
        self.save_all(&records)?;
        Ok(removed)
    }

    fn clear(&mut self) -> Result<()> {
        self.save_all(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ToolkitError;

    fn seq(s: &str) -> Sequence {
        Sequence::parse(s).unwrap()
    }

    #[test]
    fn ids_are_max_plus_one() {
        let mut store = MemoryStore::default();
        assert_eq!(store.next_id().unwrap(), 1);
        let a = store.insert("a", seq("ATG")).unwrap();
        let b = store.insert("b", seq("ATG")).unwrap();
        let c = store.insert("c", seq("ATG")).unwrap();
        assert_eq!((a.id(), b.id(), c.id()), (1, 2, 3));
        store.remove(2).unwrap();
        assert_eq!(store.next_id().unwrap(), 4);
        let ids: Vec<u64> = store.list().unwrap().iter().map(SequenceRecord::id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn put_replaces_whole_record() {
        let mut store = MemoryStore::default();
        let mut r = store.insert("a", seq("ATGC")).unwrap();
        r.set_label("renamed").unwrap();
        store.put(r.clone()).unwrap();
        assert_eq!(store.get(r.id()).unwrap(), r);
    }

    #[test]
    fn missing_ids_are_not_found() {
        let mut store = MemoryStore::default();
        store.insert("a", seq("ATG")).unwrap();
        let ghost = SequenceRecord::new(9, "ghost", seq("ATG")).unwrap();
        assert!(matches!(store.get(9), Err(ToolkitError::NotFound(NotFoundError::Id(9)))));
        assert!(matches!(store.put(ghost), Err(ToolkitError::NotFound(NotFoundError::Id(9)))));
        assert!(matches!(store.remove(9), Err(ToolkitError::NotFound(NotFoundError::Id(9)))));
        assert_eq!(store.list().unwrap().len(), 1);
    }

    #[test]
    fn insert_validates_label() {
        let mut store = MemoryStore::default();
        assert!(matches!(store.insert(" ", seq("ATG")), Err(ToolkitError::Validation(_))));
        assert!(store.list().unwrap().is_empty());
    }

    #[test]
    fn clear_empties() {
        let mut store = MemoryStore::default();
        store.insert("a", seq("ATG")).unwrap();
        store.clear().unwrap();
        assert!(store.list().unwrap().is_empty());
        assert_eq!(store.next_id().unwrap(), 1);
    }
}
