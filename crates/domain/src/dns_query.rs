use super::QueryType;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub domain: Arc<str>,
    pub query_type: QueryType,
}

impl DnsQuery {
    pub fn new(domain: impl Into<Arc<str>>, query_type: QueryType) -> Self {
        Self {
            domain: domain.into(),
            query_type,
        }
    }
}
