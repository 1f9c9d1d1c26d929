use super::RecordType;
use std::net::Ipv4Addr;

/// Type-tagged RDATA payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    Ns(String),
    Cname(String),
    Mx { preference: u16, exchange: String },
    /// Payload of an unrecognised type, or an A record whose length is not 4.
    Opaque(Vec<u8>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,

    pub rtype: u16,

    pub class: u16,

    pub ttl: u32,

    pub rdlength: u16,

    pub data: RecordData,
}

impl ResourceRecord {
    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.rtype)
    }

    /// RDATA rendered for display: dotted quad for A, the target name for
    /// NS/CNAME/MX, hex for anything opaque.
    pub fn rdata_string(&self) -> String {
        match &self.data {
            RecordData::A(addr) => addr.to_string(),
            RecordData::Ns(name) | RecordData::Cname(name) => name.clone(),
            RecordData::Mx { exchange, .. } => exchange.clone(),
            RecordData::Opaque(bytes) => bytes.iter().map(|b| format!("{:02x}", b)).collect(),
        }
    }
}
