use clap::Parser;
use dnsclient_domain::{CliOverrides, QueryType};
use std::ffi::OsString;

#[derive(Parser, Debug)]
#[command(name = "dnsclient")]
#[command(version = "0.1.0")]
#[command(about = "DnsClient - send a single DNS query over UDP and print the response")]
pub struct Cli {
    /// Receive timeout in seconds
    #[arg(short = 't', long = "timeout", value_name = "SECONDS")]
    pub timeout: Option<f64>,

    /// Maximum number of send attempts
    #[arg(short = 'r', long = "max-retries", value_name = "COUNT")]
    pub max_retries: Option<u32>,

    /// Server UDP port
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Query for MX records
    #[arg(long = "mx", conflicts_with = "ns")]
    pub mx: bool,

    /// Query for NS records
    #[arg(long = "ns")]
    pub ns: bool,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// DNS server address, prefixed with '@'
    #[arg(value_name = "@SERVER", value_parser = parse_server)]
    pub server: String,

    /// Domain name to resolve
    #[arg(value_name = "NAME")]
    pub name: String,
}

impl Cli {
    pub fn query_type(&self) -> QueryType {
        if self.mx {
            QueryType::MX
        } else if self.ns {
            QueryType::NS
        } else {
            QueryType::A
        }
    }

    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            timeout_secs: self.timeout,
            max_retries: self.max_retries,
            port: self.port,
            log_level: self.log_level.clone(),
        }
    }
}

fn parse_server(raw: &str) -> Result<String, String> {
    let server = raw
        .strip_prefix('@')
        .ok_or_else(|| format!("server must be prefixed with '@', got '{}'", raw))?;

    if server.is_empty() {
        return Err("server name is empty".to_string());
    }

    Ok(server.to_string())
}

/// Rewrites the single-dash `-mx` / `-ns` flags into their long form so clap
/// does not read them as clustered short options.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| match arg.to_str() {
            Some("-mx") => OsString::from("--mx"),
            Some("-ns") => OsString::from("--ns"),
            _ => arg,
        })
        .collect()
}
