use crate::{QueryType, CLASS_IN};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Dot-separated name without a trailing dot.
    pub name: String,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    pub fn new(name: impl Into<String>, query_type: QueryType) -> Self {
        Self {
            name: name.into(),
            qtype: query_type.to_u16(),
            qclass: CLASS_IN,
        }
    }
}
