use dnsclient_application::ports::{MessageCodec, QueryTransport};
use dnsclient_application::use_cases::LookupUseCase;
use dnsclient_domain::Config;
use dnsclient_infrastructure::dns::{UdpTransport, WireCodec};
use std::sync::Arc;
use tracing::debug;

pub struct DnsServices {
    pub lookup: Arc<LookupUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config, server: &str) -> Self {
        let codec: Arc<dyn MessageCodec> = Arc::new(WireCodec);
        let transport: Arc<dyn QueryTransport> = Arc::new(UdpTransport::new(
            server,
            config.query.port,
            config.query.timeout(),
            config.query.max_retries,
        ));

        debug!(
            server = %server,
            port = config.query.port,
            timeout_secs = config.query.timeout_secs,
            max_retries = config.query.max_retries,
            "DNS services initialized"
        );

        Self {
            lookup: Arc::new(LookupUseCase::new(codec, transport)),
        }
    }
}
