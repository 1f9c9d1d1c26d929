use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Label '{label}' is {len} bytes long (maximum is 63)")]
    LabelTooLong { label: String, len: usize },

    #[error("Invalid query type: {0}")]
    InvalidQueryType(String),

    #[error("Malformed DNS message at offset {offset}: {detail}")]
    MalformedMessage { offset: usize, detail: String },

    #[error("Socket error talking to {server}: {detail}")]
    Socket { server: String, detail: String },

    #[error("Maximum number of retries {attempts} exceeded")]
    RetriesExhausted { attempts: u32 },
}

impl DomainError {
    pub fn malformed(offset: usize, detail: impl Into<String>) -> Self {
        DomainError::MalformedMessage {
            offset,
            detail: detail.into(),
        }
    }
}
