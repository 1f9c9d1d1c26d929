pub mod udp;

use std::fmt;

/// Why a single send/receive attempt failed. Every kind currently counts
/// against the same retry budget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    Timeout,
    Socket(String),
    EmptyReply,
}

impl fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportFailure::Timeout => write!(f, "timed out waiting for reply"),
            TransportFailure::Socket(detail) => write!(f, "socket error: {}", detail),
            TransportFailure::EmptyReply => write!(f, "empty reply"),
        }
    }
}
