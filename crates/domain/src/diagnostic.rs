use crate::ResponseCode;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// The reply does not line up with the query that was sent.
    ProtocolMismatch,
    /// The server answered with a nonzero RCODE.
    ServerError,
}

/// Advisory finding about a response. Never stops decoding or reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    IdMismatch { expected: u16, actual: u16 },
    NotAResponse,
    UnexpectedOpcode(u8),
    Truncated,
    RecursionDesiredMismatch { expected: bool, actual: bool },
    ReservedBitsSet(u8),
    ServerError(ResponseCode),
    MissingQuestion,
    QuestionNameMismatch { expected: String, actual: String },
    QuestionTypeMismatch { expected: u16, actual: u16 },
    QuestionClassMismatch { expected: u16, actual: u16 },
    UnexpectedRdataLength { name: String, rdlength: u16 },
}

impl Diagnostic {
    pub fn kind(&self) -> DiagnosticKind {
        match self {
            Diagnostic::ServerError(_) => DiagnosticKind::ServerError,
            _ => DiagnosticKind::ProtocolMismatch,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::IdMismatch { expected, actual } => write!(
                f,
                "the response ID {} does not match the query ID {}",
                actual, expected
            ),
            Diagnostic::NotAResponse => {
                write!(f, "the QR bit does not correspond to a response message")
            }
            Diagnostic::UnexpectedOpcode(opcode) => write!(
                f,
                "the OPCODE {} does not correspond to a standard query",
                opcode
            ),
            Diagnostic::Truncated => write!(f, "message is truncated"),
            Diagnostic::RecursionDesiredMismatch { expected, actual } => write!(
                f,
                "the RD flag {} does not match the query RD flag {}",
                u8::from(*actual),
                u8::from(*expected)
            ),
            Diagnostic::ReservedBitsSet(z) => write!(f, "the Z field is not zero ({})", z),
            Diagnostic::ServerError(rcode) => write!(f, "{}: {}", rcode, rcode.description()),
            Diagnostic::MissingQuestion => write!(f, "the response carries no question section"),
            Diagnostic::QuestionNameMismatch { expected, actual } => write!(
                f,
                "the QNAME {} does not match the query QNAME {}",
                actual, expected
            ),
            Diagnostic::QuestionTypeMismatch { expected, actual } => write!(
                f,
                "the QTYPE {} does not match the query QTYPE {}",
                actual, expected
            ),
            Diagnostic::QuestionClassMismatch { expected, actual } => write!(
                f,
                "the QCLASS {} does not match the query QCLASS {}",
                actual, expected
            ),
            Diagnostic::UnexpectedRdataLength { name, rdlength } => write!(
                f,
                "the RDLENGTH {} of the A record for {} is not 4",
                rdlength, name
            ),
        }
    }
}
