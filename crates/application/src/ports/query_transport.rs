use async_trait::async_trait;
use dnsclient_domain::DomainError;
use std::time::Duration;

/// A successful query/response exchange.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub bytes: Vec<u8>,
    /// Time between the last send and its reply.
    pub elapsed: Duration,
    /// Failed attempts before the one that succeeded.
    pub retries: u32,
}

#[async_trait]
pub trait QueryTransport: Send + Sync {
    /// Sends `query` and waits for a reply, retrying within the transport's
    /// own budget. Fails with `DomainError::RetriesExhausted` once spent.
    async fn exchange(&self, query: &[u8]) -> Result<Exchange, DomainError>;

    fn server(&self) -> String;
}
