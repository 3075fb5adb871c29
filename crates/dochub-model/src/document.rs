use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::Digest;

use crate::ids::DocumentId;

/// Which source list a document record belongs to.
///
/// Orthogonal to tags: origin is fixed at ingest, tags are applied by the
/// user afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentOrigin {
    /// Shared with the signed-in user by someone else.
    Received,
    /// Uploaded by the signed-in user.
    Uploaded,
    /// Passed departmental verification.
    Verified,
}

impl DocumentOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentOrigin::Received => "received",
            DocumentOrigin::Uploaded => "uploaded",
            DocumentOrigin::Verified => "verified",
        }
    }
}

impl fmt::Display for DocumentOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentOrigin {
    type Err = String;

    /// Parse an origin label. Case-insensitive; accepts the legacy mailbox
    /// labels ("inbox", "sent") still found in exported listings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "received" | "inbox" => Ok(DocumentOrigin::Received),
            "uploaded" | "sent" => Ok(DocumentOrigin::Uploaded),
            "verified" => Ok(DocumentOrigin::Verified),
            _ => Err(format!("Unknown document origin: {}", s)),
        }
    }
}

/// One document as listed on the dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub title: String,
    pub snippet: String,
    pub department: String,
    /// ISO calendar date (YYYY-MM-DD).
    pub date: String,
    pub language: String,
    pub origin: DocumentOrigin,
}

impl DocumentRecord {
    /// Derive the record's stable identity from its immutable fields.
    ///
    /// Title, date, and department identify a document; origin is excluded
    /// so the same document listed under two tabs shares one identity.
    pub fn identity(&self) -> DocumentId {
        let mut hasher = sha2::Sha256::new();
        hasher.update(self.title.as_bytes());
        hasher.update(b"\n");
        hasher.update(self.date.as_bytes());
        hasher.update(b"\n");
        hasher.update(self.department.as_bytes());
        DocumentId::from_first_16_bytes_of_sha256(hasher.finalize().into())
    }
}
