pub mod document;
pub mod error;
pub mod ids;
pub mod org;
pub mod search;

pub use document::{DocumentOrigin, DocumentRecord};
pub use error::{ModelError, Result};
pub use ids::{DepartmentId, DocumentId, EmployeeId, TagName};
pub use org::{Department, Employee, OrgTree};
pub use search::SearchQuery;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_id_serializes_as_hex_string() {
        let doc = DocumentRecord {
            title: "Monthly Operations Report".to_string(),
            snippet: "Punctuality and passenger loads.".to_string(),
            department: "Operations".to_string(),
            date: "2024-03-01".to_string(),
            language: "English".to_string(),
            origin: DocumentOrigin::Uploaded,
        };
        let id = doc.identity();
        let json = serde_json::to_string(&id).expect("serialize id");
        assert_eq!(json, format!("\"{}\"", id.to_hex()));
        let round: DocumentId = serde_json::from_str(&json).expect("deserialize id");
        assert_eq!(round, id);
    }
}
