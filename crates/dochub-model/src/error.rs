use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid department id: {0:?}")]
    InvalidDepartmentId(String),
    #[error("invalid employee id: {0:?}")]
    InvalidEmployeeId(String),
    #[error("invalid tag name: {0:?}")]
    InvalidTagName(String),
    #[error("duplicate department id: {0}")]
    DuplicateDepartment(String),
    #[error("duplicate employee id: {0}")]
    DuplicateEmployee(String),
    #[error("invalid document id {value:?}: {message}")]
    InvalidDocumentId { value: String, message: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
