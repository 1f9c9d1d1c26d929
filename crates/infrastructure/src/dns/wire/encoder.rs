//! DNS query builder
//!
//! Constructs a standard recursive query (RD=1, one question, class IN)
//! directly in wire format.

use super::{MAX_LABEL_LEN, MAX_NAME_LEN};
use dnsclient_domain::{DomainError, EncodedQuery, Header, QueryType, Question, CLASS_IN};

/// Builds DNS query messages in wire format
pub struct MessageEncoder;

impl MessageEncoder {
    /// Build a query for `domain` with a random 16-bit id.
    pub fn build_query(domain: &str, query_type: QueryType) -> Result<EncodedQuery, DomainError> {
        Self::build_query_with_id(fastrand::u16(..), domain, query_type)
    }

    pub fn build_query_with_id(
        id: u16,
        domain: &str,
        query_type: QueryType,
    ) -> Result<EncodedQuery, DomainError> {
        let labels = split_labels(domain)?;
        let header = Header::query(id);

        let mut buf = Vec::with_capacity(Header::LEN + domain.len() + 6);
        encode_header(&header, &mut buf);
        encode_labels(&labels, &mut buf);
        buf.extend_from_slice(&query_type.to_u16().to_be_bytes());
        buf.extend_from_slice(&CLASS_IN.to_be_bytes());

        Ok(EncodedQuery {
            bytes: buf,
            id,
            recursion_desired: header.rd,
            question: Question::new(labels.join("."), query_type),
        })
    }

    /// Encode a dotted name as length-prefixed labels plus the zero terminator.
    pub fn encode_name(domain: &str) -> Result<Vec<u8>, DomainError> {
        let labels = split_labels(domain)?;
        let mut buf = Vec::with_capacity(domain.len() + 2);
        encode_labels(&labels, &mut buf);
        Ok(buf)
    }
}

fn encode_header(header: &Header, buf: &mut Vec<u8>) {
    for field in [
        header.id,
        header.flags(),
        header.qdcount,
        header.ancount,
        header.nscount,
        header.arcount,
    ] {
        buf.extend_from_slice(&field.to_be_bytes());
    }
}

fn encode_labels(labels: &[&str], buf: &mut Vec<u8>) {
    for label in labels {
        buf.push(label.len() as u8);
        buf.extend_from_slice(label.as_bytes());
    }
    buf.push(0);
}

/// Splits on '.', dropping empty labels, and enforces the wire limits.
fn split_labels(domain: &str) -> Result<Vec<&str>, DomainError> {
    if !domain.is_ascii() {
        return Err(DomainError::InvalidDomainName(format!(
            "'{}' contains non-ASCII characters",
            domain
        )));
    }

    let labels: Vec<&str> = domain.split('.').filter(|l| !l.is_empty()).collect();
    if labels.is_empty() {
        return Err(DomainError::InvalidDomainName(
            "domain name is empty".to_string(),
        ));
    }

    if let Some(label) = labels.iter().find(|l| l.len() > MAX_LABEL_LEN) {
        return Err(DomainError::LabelTooLong {
            label: label.to_string(),
            len: label.len(),
        });
    }

    let encoded_len: usize = labels.iter().map(|l| l.len() + 1).sum::<usize>() + 1;
    if encoded_len > MAX_NAME_LEN {
        return Err(DomainError::InvalidDomainName(format!(
            "encoded name is {} bytes (maximum is {})",
            encoded_len, MAX_NAME_LEN
        )));
    }

    Ok(labels)
}
