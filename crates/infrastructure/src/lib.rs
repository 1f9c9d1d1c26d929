//! DNS client infrastructure: wire codec and UDP transport.
pub mod dns;
