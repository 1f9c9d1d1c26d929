use crate::DomainError;
use std::fmt;
use std::str::FromStr;

/// The Internet class, the only one this client speaks.
pub const CLASS_IN: u16 = 1;

/// Record types the decoder understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    NS,
    CNAME,
    MX,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::NS => "NS",
            RecordType::CNAME => "CNAME",
            RecordType::MX => "MX",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::MX => 15,
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            1 => Some(RecordType::A),
            2 => Some(RecordType::NS),
            5 => Some(RecordType::CNAME),
            15 => Some(RecordType::MX),
            _ => None,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Record types a query may ask for.
///
/// CNAME is decoded when it shows up in a response but is never requested
/// directly, so it has no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum QueryType {
    #[default]
    A,
    NS,
    MX,
}

impl QueryType {
    pub fn record_type(&self) -> RecordType {
        match self {
            QueryType::A => RecordType::A,
            QueryType::NS => RecordType::NS,
            QueryType::MX => RecordType::MX,
        }
    }

    pub fn to_u16(&self) -> u16 {
        self.record_type().to_u16()
    }

    pub fn as_str(&self) -> &'static str {
        self.record_type().as_str()
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QueryType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(QueryType::A),
            "NS" => Ok(QueryType::NS),
            "MX" => Ok(QueryType::MX),
            _ => Err(DomainError::InvalidQueryType(s.to_string())),
        }
    }
}
