use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("Cache maintenance failed: {0}")]
    CacheMaintenance(String),
}
