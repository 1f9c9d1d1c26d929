mod header;
mod question;
mod response_code;

pub use header::Header;
pub use question::Question;
pub use response_code::ResponseCode;

use crate::ResourceRecord;

/// A decoded DNS message. Built fresh for each exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub header: Header,
    pub questions: Vec<Question>,
    pub answers: Vec<ResourceRecord>,
    pub authorities: Vec<ResourceRecord>,
    pub additionals: Vec<ResourceRecord>,
}

impl Message {
    /// The question echoed back by the server, if any.
    pub fn question(&self) -> Option<&Question> {
        self.questions.first()
    }

    pub fn is_authoritative(&self) -> bool {
        self.header.aa
    }

    pub fn response_code(&self) -> ResponseCode {
        ResponseCode::from_u8(self.header.rcode)
    }
}

/// The bytes of an outgoing query plus the fields needed to check the reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedQuery {
    pub bytes: Vec<u8>,
    pub id: u16,
    pub recursion_desired: bool,
    pub question: Question,
}
