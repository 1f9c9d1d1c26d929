//! RFC 1035 wire format.

pub mod codec;
pub mod decoder;
pub mod encoder;

pub use codec::WireCodec;
pub use decoder::MessageDecoder;
pub use encoder::MessageEncoder;

/// Longest label allowed on the wire.
pub const MAX_LABEL_LEN: usize = 63;

/// Longest encoded name allowed on the wire, length octets included.
pub const MAX_NAME_LEN: usize = 255;

/// Receive buffer size; no EDNS(0) is advertised.
pub const MAX_MESSAGE_LEN: usize = 1024;
