use std::future::Future;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::models::record::CandidateRecord;
use crate::store::{CandidateId, MissCause, RecordNotFound, RecordStore};

/// Flat-file store: one `p<id>.json` document per candidate under `root`.
#[derive(Debug, Clone)]
pub struct FileRecordStore {
    root: PathBuf,
    read_timeout: Duration,
}

impl FileRecordStore {
    pub fn new(root: impl Into<PathBuf>, read_timeout: Duration) -> Self {
        Self {
            root: root.into(),
            read_timeout,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn record_path(&self, id: CandidateId) -> PathBuf {
        self.root.join(format!("p{id}.json"))
    }
}

/// Runs `read` under `limit`, mapping every failure to a lookup miss.
async fn read_bounded<F>(
    id: CandidateId,
    path: &Path,
    limit: Duration,
    read: F,
) -> Result<Vec<u8>, RecordNotFound>
where
    F: Future<Output = io::Result<Vec<u8>>>,
{
    match timeout(limit, read).await {
        Ok(Ok(bytes)) => Ok(bytes),
        Ok(Err(e)) if e.kind() == ErrorKind::NotFound => {
            Err(RecordNotFound::new(id, MissCause::Missing))
        }
        Ok(Err(e)) => {
            warn!("Failed to read {}: {e}", path.display());
            Err(RecordNotFound::new(id, MissCause::Unreadable))
        }
        Err(_) => {
            warn!(
                "Reading {} exceeded {}ms",
                path.display(),
                limit.as_millis()
            );
            Err(RecordNotFound::new(id, MissCause::TimedOut))
        }
    }
}

#[async_trait]
impl RecordStore for FileRecordStore {
    async fn load(&self, id: CandidateId) -> Result<CandidateRecord, RecordNotFound> {
        let path = self.record_path(id);
        debug!("Loading candidate {id} from {}", path.display());

        let bytes = read_bounded(id, &path, self.read_timeout, tokio::fs::read(&path)).await?;

        serde_json::from_slice(&bytes).map_err(|e| {
            warn!("Candidate record {} is malformed: {e}", path.display());
            RecordNotFound::new(id, MissCause::Malformed)
        })
    }

    fn backend(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store(dir: &TempDir) -> FileRecordStore {
        FileRecordStore::new(dir.path(), Duration::from_secs(2))
    }

    #[test]
    fn test_record_path_convention() {
        let store = FileRecordStore::new("db", Duration::from_secs(1));
        assert_eq!(store.record_path(CandidateId(12)), PathBuf::from("db/p12.json"));
    }

    #[tokio::test]
    async fn test_load_existing_record() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("p1.json"),
            r#"{"data":{"person":{"firstName":"Grace","lastName":"Hopper"}}}"#,
        )
        .unwrap();

        let record = store(&dir).load(CandidateId(1)).await.unwrap();
        let person = record.data.unwrap().person.unwrap();
        assert_eq!(person.first_name, "Grace");
        assert_eq!(person.last_name, "Hopper");
    }

    #[tokio::test]
    async fn test_missing_file_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = store(&dir).load(CandidateId(404)).await.unwrap_err();
        assert_eq!(err, RecordNotFound::new(CandidateId(404), MissCause::Missing));
    }

    #[tokio::test]
    async fn test_invalid_json_is_not_found() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("p2.json"), "{ not json").unwrap();
        let err = store(&dir).load(CandidateId(2)).await.unwrap_err();
        assert_eq!(err.cause, MissCause::Malformed);
    }

    #[tokio::test]
    async fn test_non_object_document_is_not_found() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("p3.json"), "42").unwrap();
        let err = store(&dir).load(CandidateId(3)).await.unwrap_err();
        assert_eq!(err.cause, MissCause::Malformed);
    }

    #[tokio::test]
    async fn test_directory_at_location_is_not_found() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join("p5.json")).unwrap();
        let err = store(&dir).load(CandidateId(5)).await.unwrap_err();
        assert_eq!(err.id, CandidateId(5));
        assert_ne!(err.cause, MissCause::Malformed);
    }

    #[tokio::test]
    async fn test_record_without_person_still_loads() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("p6.json"), r#"{"data":{}}"#).unwrap();
        let record = store(&dir).load(CandidateId(6)).await.unwrap();
        assert!(record.data.unwrap().person.is_none());
    }

    #[tokio::test]
    async fn test_off_type_fields_still_load() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("p4.json"),
            r#"{"data":{
                "person":{"firstName":"Maria","lastName":"Santos","memberIdentifier":48213377,"followerCount":2315.0},
                "company":{"name":"Streamline","fundingData":{"lastFundingRound":{"moneyRaised":{"amount":2500000000}}}}
            }}"#,
        )
        .unwrap();

        let record = store(&dir).load(CandidateId(4)).await.unwrap();
        let view = crate::profile::project(&record).unwrap();
        assert_eq!(view.person.first_name, "Maria");
        assert_eq!(view.person.follower_count, 2315);
        let funding = view.company.unwrap().funding.unwrap();
        assert_eq!(funding.amount_text.as_deref(), Some("$2.5B"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_read_times_out() {
        let path = PathBuf::from("db/p7.json");
        let err = read_bounded(
            CandidateId(7),
            &path,
            Duration::from_millis(50),
            std::future::pending::<io::Result<Vec<u8>>>(),
        )
        .await
        .unwrap_err();
        assert_eq!(err, RecordNotFound::new(CandidateId(7), MissCause::TimedOut));
    }

    #[tokio::test]
    async fn test_read_error_kinds() {
        let path = PathBuf::from("db/p8.json");
        let missing = read_bounded(CandidateId(8), &path, Duration::from_secs(1), async {
            Err(io::Error::from(ErrorKind::NotFound))
        })
        .await
        .unwrap_err();
        assert_eq!(missing.cause, MissCause::Missing);

        let denied = read_bounded(CandidateId(8), &path, Duration::from_secs(1), async {
            Err(io::Error::from(ErrorKind::PermissionDenied))
        })
        .await
        .unwrap_err();
        assert_eq!(denied.cause, MissCause::Unreadable);
    }
}
