#![allow(dead_code)]

/// Pointer to the question name, which always starts right after the header.
pub const QNAME_POINTER: [u8; 2] = [0xC0, 0x0C];

/// Assembles a synthetic response in wire format.
pub struct ResponseBuilder {
    id: u16,
    flags: u16,
    question: Vec<u8>,
    qdcount: u16,
    counts: [u16; 3],
    sections: [Vec<u8>; 3],
}

const ANSWER: usize = 0;
const AUTHORITY: usize = 1;
const ADDITIONAL: usize = 2;

impl ResponseBuilder {
    /// Echoes the id and question section of `query`.
    pub fn for_query(query: &[u8]) -> Self {
        let id = u16::from_be_bytes([query[0], query[1]]);
        let question = query[12..].to_vec();
        Self {
            id,
            flags: 0x8180,
            question,
            qdcount: 1,
            counts: [0; 3],
            sections: [Vec::new(), Vec::new(), Vec::new()],
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn flags(mut self, flags: u16) -> Self {
        self.flags = flags;
        self
    }

    pub fn without_question(mut self) -> Self {
        self.question.clear();
        self.qdcount = 0;
        self
    }

    pub fn answer_a(self, ttl: u32, addr: [u8; 4]) -> Self {
        self.record(ANSWER, &QNAME_POINTER, 1, ttl, &addr)
    }

    pub fn answer_cname(self, ttl: u32, target: &[u8]) -> Self {
        self.record(ANSWER, &QNAME_POINTER, 5, ttl, target)
    }

    pub fn answer_mx(self, ttl: u32, preference: u16, exchange: &[u8]) -> Self {
        let mut rdata = preference.to_be_bytes().to_vec();
        rdata.extend_from_slice(exchange);
        self.record(ANSWER, &QNAME_POINTER, 15, ttl, &rdata)
    }

    pub fn answer_raw(self, rtype: u16, ttl: u32, rdata: &[u8]) -> Self {
        self.record(ANSWER, &QNAME_POINTER, rtype, ttl, rdata)
    }

    pub fn authority_ns(self, ttl: u32, target: &[u8]) -> Self {
        self.record(AUTHORITY, &QNAME_POINTER, 2, ttl, target)
    }

    pub fn additional_a(self, owner: &[u8], ttl: u32, addr: [u8; 4]) -> Self {
        self.record(ADDITIONAL, owner, 1, ttl, &addr)
    }

    /// Offset the next record's owner name will land at, for building pointers.
    pub fn next_record_offset(&self) -> usize {
        12 + self.question.len() + self.sections.iter().map(Vec::len).sum::<usize>()
    }

    fn record(mut self, section: usize, owner: &[u8], rtype: u16, ttl: u32, rdata: &[u8]) -> Self {
        let buf = &mut self.sections[section];
        buf.extend_from_slice(owner);
        buf.extend_from_slice(&rtype.to_be_bytes());
        buf.extend_from_slice(&1u16.to_be_bytes());
        buf.extend_from_slice(&ttl.to_be_bytes());
        buf.extend_from_slice(&(rdata.len() as u16).to_be_bytes());
        buf.extend_from_slice(rdata);
        self.counts[section] += 1;
        self
    }

    pub fn build(self) -> Vec<u8> {
        let mut out = Vec::with_capacity(512);
        out.extend_from_slice(&self.id.to_be_bytes());
        out.extend_from_slice(&self.flags.to_be_bytes());
        out.extend_from_slice(&self.qdcount.to_be_bytes());
        for count in self.counts {
            out.extend_from_slice(&count.to_be_bytes());
        }
        out.extend_from_slice(&self.question);
        for section in &self.sections {
            out.extend_from_slice(section);
        }
        out
    }
}

/// Length-prefixed labels with a zero terminator.
pub fn wire_name(name: &str) -> Vec<u8> {
    let mut out = Vec::new();
    for label in name.split('.').filter(|l| !l.is_empty()) {
        out.push(label.len() as u8);
        out.extend_from_slice(label.as_bytes());
    }
    out.push(0);
    out
}
