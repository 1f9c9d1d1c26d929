pub mod builders;
pub mod dns_server_mock;

pub use builders::ResponseBuilder;
pub use dns_server_mock::MockDnsServer;
