use dnsclient_domain::{
    Diagnostic, EncodedQuery, Message, RecordData, RecordType, ResourceRecord, ResponseCode,
};

/// Cross-checks a decoded response against the query that produced it.
///
/// Every finding is advisory: the caller keeps using the response as-is.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResponseValidator;

impl ResponseValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, query: &EncodedQuery, response: &Message) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let header = &response.header;

        if header.id != query.id {
            diagnostics.push(Diagnostic::IdMismatch {
                expected: query.id,
                actual: header.id,
            });
        }
        if !header.qr {
            diagnostics.push(Diagnostic::NotAResponse);
        }
        if header.opcode != 0 {
            diagnostics.push(Diagnostic::UnexpectedOpcode(header.opcode));
        }
        if header.tc {
            diagnostics.push(Diagnostic::Truncated);
        }
        if header.rd != query.recursion_desired {
            diagnostics.push(Diagnostic::RecursionDesiredMismatch {
                expected: query.recursion_desired,
                actual: header.rd,
            });
        }
        if header.z != 0 {
            diagnostics.push(Diagnostic::ReservedBitsSet(header.z));
        }

        let rcode = ResponseCode::from_u8(header.rcode);
        if rcode.is_error() {
            diagnostics.push(Diagnostic::ServerError(rcode));
        }

        self.check_question(query, response, &mut diagnostics);

        let records = response
            .answers
            .iter()
            .chain(&response.authorities)
            .chain(&response.additionals);
        for record in records {
            if let Some(diagnostic) = check_rdata_length(record) {
                diagnostics.push(diagnostic);
            }
        }

        diagnostics
    }

    fn check_question(
        &self,
        query: &EncodedQuery,
        response: &Message,
        diagnostics: &mut Vec<Diagnostic>,
    ) {
        let Some(echo) = response.question() else {
            diagnostics.push(Diagnostic::MissingQuestion);
            return;
        };
        let sent = &query.question;

        // Servers may echo the name with different letter case (RFC 4343).
        if !echo.name.eq_ignore_ascii_case(&sent.name) {
            diagnostics.push(Diagnostic::QuestionNameMismatch {
                expected: sent.name.clone(),
                actual: echo.name.clone(),
            });
        }
        if echo.qtype != sent.qtype {
            diagnostics.push(Diagnostic::QuestionTypeMismatch {
                expected: sent.qtype,
                actual: echo.qtype,
            });
        }
        if echo.qclass != sent.qclass {
            diagnostics.push(Diagnostic::QuestionClassMismatch {
                expected: sent.qclass,
                actual: echo.qclass,
            });
        }
    }
}

fn check_rdata_length(record: &ResourceRecord) -> Option<Diagnostic> {
    let is_short_a = record.record_type() == Some(RecordType::A)
        && matches!(record.data, RecordData::Opaque(_));
    is_short_a.then(|| Diagnostic::UnexpectedRdataLength {
        name: record.name.clone(),
        rdlength: record.rdlength,
    })
}
