//! DNS client domain layer: message model, errors and configuration.
pub mod config;
pub mod diagnostic;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod message;

pub use config::{CliOverrides, Config, ConfigError, LoggingConfig, QueryConfig};
pub use diagnostic::{Diagnostic, DiagnosticKind};
pub use dns_query::DnsQuery;
pub use dns_record::{QueryType, RecordData, RecordType, ResourceRecord, CLASS_IN};
pub use errors::DomainError;
pub use message::{EncodedQuery, Header, Message, Question, ResponseCode};
