#![allow(dead_code)]

use async_trait::async_trait;
use dnsclient_application::ports::{Exchange, MessageCodec, QueryTransport};
use dnsclient_domain::{
    DnsQuery, DomainError, EncodedQuery, Header, Message, Question, RecordData, ResourceRecord,
    CLASS_IN,
};
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub const QUERY_ID: u16 = 0x4242;

/// Codec that hands out a fixed query id and a preset decoded message.
pub struct MockCodec {
    encode_error: Option<DomainError>,
    decoded: Mutex<Result<Message, DomainError>>,
}

impl MockCodec {
    pub fn returning(message: Message) -> Self {
        Self {
            encode_error: None,
            decoded: Mutex::new(Ok(message)),
        }
    }

    pub fn failing_encode(error: DomainError) -> Self {
        Self {
            encode_error: Some(error),
            decoded: Mutex::new(Ok(MessageBuilder::new().build())),
        }
    }

    pub fn failing_decode(error: DomainError) -> Self {
        Self {
            encode_error: None,
            decoded: Mutex::new(Err(error)),
        }
    }
}

impl MessageCodec for MockCodec {
    fn encode_query(&self, query: &DnsQuery) -> Result<EncodedQuery, DomainError> {
        if let Some(error) = &self.encode_error {
            return Err(error.clone());
        }
        Ok(EncodedQuery {
            bytes: vec![0u8; 12],
            id: QUERY_ID,
            recursion_desired: true,
            question: Question::new(query.domain.as_ref(), query.query_type),
        })
    }

    fn decode(&self, _bytes: &[u8]) -> Result<Message, DomainError> {
        self.decoded.lock().unwrap().clone()
    }
}

/// Transport that answers with canned bytes or a canned error.
pub struct MockTransport {
    result: Result<Exchange, DomainError>,
    calls: AtomicU32,
}

impl MockTransport {
    pub fn replying(retries: u32) -> Self {
        Self {
            result: Ok(Exchange {
                bytes: vec![0u8; 12],
                elapsed: Duration::from_millis(12),
                retries,
            }),
            calls: AtomicU32::new(0),
        }
    }

    pub fn failing(error: DomainError) -> Self {
        Self {
            result: Err(error),
            calls: AtomicU32::new(0),
        }
    }

    pub fn calls(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl QueryTransport for MockTransport {
    async fn exchange(&self, _query: &[u8]) -> Result<Exchange, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }

    fn server(&self) -> String {
        "192.0.2.53:53".to_string()
    }
}

pub struct MessageBuilder {
    id: u16,
    flags: u16,
    question: Question,
    answers: Vec<ResourceRecord>,
    authorities: Vec<ResourceRecord>,
    additionals: Vec<ResourceRecord>,
}

impl MessageBuilder {
    pub fn new() -> Self {
        Self {
            id: QUERY_ID,
            flags: 0x8180,
            question: Question::new("example.com", dnsclient_domain::QueryType::A),
            answers: vec![],
            authorities: vec![],
            additionals: vec![],
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn answer(mut self, record: ResourceRecord) -> Self {
        self.answers.push(record);
        self
    }

    pub fn authority(mut self, record: ResourceRecord) -> Self {
        self.authorities.push(record);
        self
    }

    pub fn additional(mut self, record: ResourceRecord) -> Self {
        self.additionals.push(record);
        self
    }

    pub fn build(self) -> Message {
        let counts = [
            1,
            self.answers.len() as u16,
            self.authorities.len() as u16,
            self.additionals.len() as u16,
        ];
        Message {
            header: Header::from_parts(self.id, self.flags, counts),
            questions: vec![self.question],
            answers: self.answers,
            authorities: self.authorities,
            additionals: self.additionals,
        }
    }
}

pub fn a_record(name: &str, addr: Ipv4Addr, ttl: u32) -> ResourceRecord {
    ResourceRecord {
        name: name.to_string(),
        rtype: 1,
        class: CLASS_IN,
        ttl,
        rdlength: 4,
        data: RecordData::A(addr),
    }
}
