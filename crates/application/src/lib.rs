//! DNS client application layer: ports and the lookup use case.
pub mod ports;
pub mod services;
pub mod use_cases;
