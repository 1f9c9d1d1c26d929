use clap::error::ErrorKind;
use clap::Parser;
use dnsclient_domain::DnsQuery;
use std::process::ExitCode;
use tracing::{debug, error, info};

mod args;
mod bootstrap;
mod di;
mod report;

use args::Cli;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse_from(args::normalize_args(std::env::args_os())) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e),
    };

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Lookup failed");
            println!("{}", report::render_error(&e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = bootstrap::load_config(cli.config.as_deref(), cli.overrides())?;

    bootstrap::init_logging(&config);

    debug!(
        version = env!("CARGO_PKG_VERSION"),
        log_level = %config.logging.level,
        "Starting DnsClient"
    );

    let query = DnsQuery::new(cli.name.as_str(), cli.query_type());
    print!(
        "{}",
        report::render_preamble(&cli.name, &cli.server, query.query_type)
    );

    let services = di::DnsServices::new(&config, &cli.server);
    let outcome = services.lookup.execute(&query).await?;

    info!(
        answers = outcome.message.answers.len(),
        retries = outcome.retries,
        "Lookup complete"
    );

    print!("{}", report::render_outcome(&outcome));
    Ok(())
}

fn usage_error(e: clap::Error) -> ExitCode {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = e.print();
            ExitCode::SUCCESS
        }
        _ => {
            let rendered = e.to_string();
            let detail = rendered
                .lines()
                .next()
                .unwrap_or_default()
                .trim_start_matches("error: ");
            println!(
                "{}",
                report::render_error(format!("Incorrect input syntax: {}", detail))
            );
            ExitCode::FAILURE
        }
    }
}
