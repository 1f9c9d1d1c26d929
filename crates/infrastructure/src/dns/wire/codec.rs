use super::{MessageDecoder, MessageEncoder};
use dnsclient_application::ports::MessageCodec;
use dnsclient_domain::{DnsQuery, DomainError, EncodedQuery, Message};

/// `MessageCodec` backed by the hand-rolled RFC 1035 encoder and decoder.
#[derive(Debug, Default, Clone, Copy)]
pub struct WireCodec;

impl MessageCodec for WireCodec {
    fn encode_query(&self, query: &DnsQuery) -> Result<EncodedQuery, DomainError> {
        MessageEncoder::build_query(&query.domain, query.query_type)
    }

    fn decode(&self, bytes: &[u8]) -> Result<Message, DomainError> {
        MessageDecoder::decode(bytes)
    }
}
