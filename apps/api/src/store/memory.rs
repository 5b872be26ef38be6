use std::collections::HashMap;

use async_trait::async_trait;

use crate::models::record::CandidateRecord;
use crate::store::{CandidateId, MissCause, RecordNotFound, RecordStore};

/// Map-backed store. Stands in for a key-value backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryRecordStore {
    records: HashMap<CandidateId, CandidateRecord>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, id: CandidateId, record: CandidateRecord) -> Self {
        self.records.insert(id, record);
        self
    }

    /// Inserts a raw JSON document. A document that does not deserialize is
    /// kept out of the map, so lookups report it as missing.
    pub fn with_json(self, id: CandidateId, document: serde_json::Value) -> Self {
        match serde_json::from_value(document) {
            Ok(record) => self.with_record(id, record),
            Err(_) => self,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn load(&self, id: CandidateId) -> Result<CandidateRecord, RecordNotFound> {
        self.records
            .get(&id)
            .cloned()
            .ok_or_else(|| RecordNotFound::new(id, MissCause::Missing))
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_lookup_by_id() {
        let store = MemoryRecordStore::new()
            .with_json(CandidateId(1), json!({ "data": { "person": { "firstName": "Ada" } } }));
        assert_eq!(store.len(), 1);

        let record = store.load(CandidateId(1)).await.unwrap();
        assert_eq!(record.data.unwrap().person.unwrap().first_name, "Ada");

        let err = store.load(CandidateId(2)).await.unwrap_err();
        assert_eq!(err.cause, MissCause::Missing);
    }

    #[tokio::test]
    async fn test_undeserializable_document_is_skipped() {
        let store = MemoryRecordStore::new().with_json(CandidateId(9), json!("candidate"));
        assert!(store.is_empty());
        assert!(store.load(CandidateId(9)).await.is_err());
    }
}
