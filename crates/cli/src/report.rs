//! Plain-text rendering of a lookup. Everything here returns a `String`;
//! `main` owns stdout.

use dnsclient_application::use_cases::LookupOutcome;
use dnsclient_domain::{Message, QueryType, RecordData, ResourceRecord};
use std::fmt::Write;
use std::time::Duration;

pub fn render_preamble(name: &str, server: &str, query_type: QueryType) -> String {
    format!(
        "DnsClient sending request for {}\nServer: {}\nRequest type: {}\n",
        name, server, query_type
    )
}

pub fn render_outcome(outcome: &LookupOutcome) -> String {
    let mut out = render_timing(outcome.elapsed, outcome.retries);
    out.push_str(&render_sections(&outcome.message));
    out
}

pub fn render_timing(elapsed: Duration, retries: u32) -> String {
    format!(
        "Response received after {} seconds ({} retries)\n",
        elapsed.as_secs_f64(),
        retries
    )
}

/// Answer section always, Additional only when it carries records.
pub fn render_sections(message: &Message) -> String {
    let auth = auth_label(message);
    let mut out = render_section("Answer", &message.answers, auth);
    if !message.additionals.is_empty() {
        out.push_str(&render_section("Additional", &message.additionals, auth));
    }
    out
}

pub fn render_error(message: impl std::fmt::Display) -> String {
    format!("ERROR\t{}", message)
}

fn render_section(title: &str, records: &[ResourceRecord], auth: &str) -> String {
    let mut out = format!("*** {} Section ({} records) ***\n", title, records.len());
    if records.is_empty() {
        out.push_str("NOTFOUND\n");
        return out;
    }

    for record in records {
        if let Some(line) = render_record(record, auth) {
            let _ = writeln!(out, "{}", line);
        }
    }
    out
}

fn render_record(record: &ResourceRecord, auth: &str) -> Option<String> {
    let ttl = record.ttl;
    let label = match &record.data {
        RecordData::A(_) => "IP",
        RecordData::Ns(_) => "NS",
        RecordData::Cname(_) => "CNAME",
        RecordData::Mx { preference, .. } => {
            return Some(format!(
                "MX\t{}\t{}\t{}\t{}",
                preference,
                record.rdata_string(),
                ttl,
                auth
            ));
        }
        RecordData::Opaque(_) => return None,
    };
    Some(format!("{}\t{}\t{}\t{}", label, record.rdata_string(), ttl, auth))
}

fn auth_label(message: &Message) -> &'static str {
    if message.is_authoritative() {
        "auth"
    } else {
        "nonauth"
    }
}
