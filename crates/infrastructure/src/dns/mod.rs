pub mod transport;
pub mod wire;

pub use transport::udp::UdpTransport;
pub use wire::{MessageDecoder, MessageEncoder, WireCodec};
