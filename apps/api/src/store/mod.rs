//! Candidate record storage.
//!
//! `AppState` holds an `Arc<dyn RecordStore>`; the flat-file store is the
//! default backend and the in-memory store backs tests and fixtures.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::record::CandidateRecord;

pub mod file;
#[cfg(test)]
pub mod memory;

pub use file::FileRecordStore;

/// Numeric candidate id. Each id maps to exactly one storage location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CandidateId(pub u64);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("'{0}' is not a valid candidate id")]
pub struct InvalidCandidateId(pub String);

impl FromStr for CandidateId {
    type Err = InvalidCandidateId;

    // Digits only: no sign, whitespace, or path characters reach the store.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidCandidateId(s.to_string()));
        }
        s.parse::<u64>()
            .map(CandidateId)
            .map_err(|_| InvalidCandidateId(s.to_string()))
    }
}

/// Why a lookup came back empty. Logged, never shown to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissCause {
    Missing,
    Unreadable,
    Malformed,
    TimedOut,
}

impl fmt::Display for MissCause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MissCause::Missing => "no record at location",
            MissCause::Unreadable => "record could not be read",
            MissCause::Malformed => "record is not valid JSON of the expected shape",
            MissCause::TimedOut => "record read timed out",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("candidate {id} not found ({cause})")]
pub struct RecordNotFound {
    pub id: CandidateId,
    pub cause: MissCause,
}

impl RecordNotFound {
    pub fn new(id: CandidateId, cause: MissCause) -> Self {
        Self { id, cause }
    }
}

/// Loads one candidate record by id. Implementations never retry or cache.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn load(&self, id: CandidateId) -> Result<CandidateRecord, RecordNotFound>;

    /// Backend name, for logs.
    fn backend(&self) -> &'static str;
}
