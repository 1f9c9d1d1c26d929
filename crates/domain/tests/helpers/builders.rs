#![allow(dead_code)]
use dnsclient_domain::{RecordData, RecordType, ResourceRecord, CLASS_IN};
use std::net::Ipv4Addr;

pub struct ResourceRecordBuilder {
    name: String,
    rtype: u16,
    ttl: u32,
    data: RecordData,
}

impl ResourceRecordBuilder {
    pub fn new() -> Self {
        Self {
            name: "example.com".to_string(),
            rtype: RecordType::A.to_u16(),
            ttl: 300,
            data: RecordData::A(Ipv4Addr::new(192, 0, 2, 1)),
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn rtype(mut self, rtype: u16) -> Self {
        self.rtype = rtype;
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn a(mut self, addr: Ipv4Addr) -> Self {
        self.rtype = RecordType::A.to_u16();
        self.data = RecordData::A(addr);
        self
    }

    pub fn mx(mut self, preference: u16, exchange: &str) -> Self {
        self.rtype = RecordType::MX.to_u16();
        self.data = RecordData::Mx {
            preference,
            exchange: exchange.to_string(),
        };
        self
    }

    pub fn data(mut self, data: RecordData) -> Self {
        self.data = data;
        self
    }

    pub fn build(self) -> ResourceRecord {
        let rdlength = match &self.data {
            RecordData::A(_) => 4,
            RecordData::Opaque(bytes) => bytes.len() as u16,
            _ => 0,
        };
        ResourceRecord {
            name: self.name,
            rtype: self.rtype,
            class: CLASS_IN,
            ttl: self.ttl,
            rdlength,
            data: self.data,
        }
    }
}
