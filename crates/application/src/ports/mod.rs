mod message_codec;
mod query_transport;

pub use message_codec::MessageCodec;
pub use query_transport::{Exchange, QueryTransport};
