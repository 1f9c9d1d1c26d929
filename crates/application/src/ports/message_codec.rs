use dnsclient_domain::{DnsQuery, DomainError, EncodedQuery, Message};

/// Wire-format encoding of queries and decoding of responses.
pub trait MessageCodec: Send + Sync {
    fn encode_query(&self, query: &DnsQuery) -> Result<EncodedQuery, DomainError>;

    fn decode(&self, bytes: &[u8]) -> Result<Message, DomainError>;
}
