use crate::ports::{MessageCodec, QueryTransport};
use crate::services::ResponseValidator;
use dnsclient_domain::{Diagnostic, DiagnosticKind, DnsQuery, DomainError, EncodedQuery, Message};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Everything a reporter needs after one exchange.
#[derive(Debug, Clone)]
pub struct LookupOutcome {
    pub query: EncodedQuery,
    pub message: Message,
    pub diagnostics: Vec<Diagnostic>,
    pub elapsed: Duration,
    pub retries: u32,
}

/// Drives encode → exchange → decode → validate for a single query.
pub struct LookupUseCase {
    codec: Arc<dyn MessageCodec>,
    transport: Arc<dyn QueryTransport>,
    validator: ResponseValidator,
}

impl LookupUseCase {
    pub fn new(codec: Arc<dyn MessageCodec>, transport: Arc<dyn QueryTransport>) -> Self {
        Self {
            codec,
            transport,
            validator: ResponseValidator::new(),
        }
    }

    pub async fn execute(&self, query: &DnsQuery) -> Result<LookupOutcome, DomainError> {
        let encoded = self.codec.encode_query(query)?;
        debug!(
            id = encoded.id,
            domain = %query.domain,
            query_type = %query.query_type,
            bytes = encoded.bytes.len(),
            "Query encoded"
        );

        let exchange = self.transport.exchange(&encoded.bytes).await?;
        let message = self.codec.decode(&exchange.bytes)?;

        let diagnostics = self.validator.validate(&encoded, &message);
        for diagnostic in &diagnostics {
            match diagnostic.kind() {
                DiagnosticKind::ProtocolMismatch => {
                    warn!(server = %self.transport.server(), "Unexpected response, {}", diagnostic)
                }
                DiagnosticKind::ServerError => {
                    warn!(server = %self.transport.server(), "Unexpected response: {}", diagnostic)
                }
            }
        }

        debug!(
            answers = message.answers.len(),
            authorities = message.authorities.len(),
            additionals = message.additionals.len(),
            diagnostics = diagnostics.len(),
            "Response decoded"
        );

        Ok(LookupOutcome {
            query: encoded,
            message,
            diagnostics,
            elapsed: exchange.elapsed,
            retries: exchange.retries,
        })
    }
}
