//! DNS response parser (RFC 1035 §4.1).
//!
//! Pure functions over a received buffer. Every read is bounds-checked; a
//! short or inconsistent buffer yields `DomainError::MalformedMessage`.

use dnsclient_domain::{
    DomainError, Header, Message, Question, RecordData, RecordType, ResourceRecord,
};
use std::net::Ipv4Addr;

const POINTER_MASK: u8 = 0xC0;
const POINTER_OFFSET_MASK: u8 = 0x3F;

/// Size of TYPE, CLASS, TTL and RDLENGTH following a record's owner name.
const RR_FIXED_LEN: usize = 10;

pub struct MessageDecoder;

impl MessageDecoder {
    /// Decode a full response: header, question echo and the three record
    /// sections, in wire order.
    pub fn decode(buf: &[u8]) -> Result<Message, DomainError> {
        let header = Self::decode_header(buf)?;
        let mut offset = Header::LEN;

        let mut questions = Vec::new();
        for _ in 0..header.qdcount {
            let (question, next) = Self::decode_question(buf, offset)?;
            questions.push(question);
            offset = next;
        }

        let (answers, offset) = Self::decode_records(header.ancount, buf, offset)?;
        let (authorities, offset) = Self::decode_records(header.nscount, buf, offset)?;
        let (additionals, _) = Self::decode_records(header.arcount, buf, offset)?;

        Ok(Message {
            header,
            questions,
            answers,
            authorities,
            additionals,
        })
    }

    pub fn decode_header(buf: &[u8]) -> Result<Header, DomainError> {
        if buf.len() < Header::LEN {
            return Err(DomainError::malformed(
                buf.len(),
                format!("header needs {} bytes, got {}", Header::LEN, buf.len()),
            ));
        }

        Ok(Header::from_parts(
            read_u16(buf, 0)?,
            read_u16(buf, 2)?,
            [
                read_u16(buf, 4)?,
                read_u16(buf, 6)?,
                read_u16(buf, 8)?,
                read_u16(buf, 10)?,
            ],
        ))
    }

    /// Decode a possibly compressed name starting at `offset`.
    ///
    /// The returned offset is where the caller's next field begins: just past
    /// the first compression pointer if one was followed, otherwise just past
    /// the zero terminator. Later pointers in a chain only move where labels
    /// are read from.
    pub fn decode_name(buf: &[u8], offset: usize) -> Result<(String, usize), DomainError> {
        let mut name = String::new();
        let mut pos = offset;
        let mut resume_at: Option<usize> = None;
        let mut hops = 0usize;
        // Distinct pointers are two bytes each, so a longer chain must revisit one.
        let max_hops = buf.len() / 2;

        loop {
            let len = byte_at(buf, pos, "truncated name")?;

            if len & POINTER_MASK == POINTER_MASK {
                let low = byte_at(buf, pos + 1, "truncated compression pointer")?;
                hops += 1;
                if hops > max_hops {
                    return Err(DomainError::malformed(pos, "compression pointer loop"));
                }
                resume_at.get_or_insert(pos + 2);
                pos = (usize::from(len & POINTER_OFFSET_MASK) << 8) | usize::from(low);
                continue;
            }

            if len & POINTER_MASK != 0 {
                return Err(DomainError::malformed(
                    pos,
                    format!("unsupported label type 0x{:02x}", len & POINTER_MASK),
                ));
            }

            if len == 0 {
                pos += 1;
                break;
            }

            let start = pos + 1;
            let end = start + usize::from(len);
            let label = buf
                .get(start..end)
                .ok_or_else(|| DomainError::malformed(start, "truncated label"))?;

            if let Some(i) = label.iter().position(|b| !b.is_ascii()) {
                return Err(DomainError::malformed(start + i, "non-ASCII byte in label"));
            }

            if !name.is_empty() {
                name.push('.');
            }
            name.extend(label.iter().map(|&b| char::from(b)));
            pos = end;
        }

        Ok((name, resume_at.unwrap_or(pos)))
    }

    pub fn decode_question(buf: &[u8], offset: usize) -> Result<(Question, usize), DomainError> {
        let (name, pos) = Self::decode_name(buf, offset)?;
        let qtype = read_u16(buf, pos)?;
        let qclass = read_u16(buf, pos + 2)?;

        Ok((
            Question {
                name,
                qtype,
                qclass,
            },
            pos + 4,
        ))
    }

    /// Decode `count` resource records starting at `offset`.
    ///
    /// The cursor always advances by RDLENGTH past the fixed fields, whatever
    /// the record type, so unknown types never misalign what follows.
    pub fn decode_records(
        count: u16,
        buf: &[u8],
        offset: usize,
    ) -> Result<(Vec<ResourceRecord>, usize), DomainError> {
        let mut records = Vec::new();
        let mut offset = offset;

        for _ in 0..count {
            let (name, pos) = Self::decode_name(buf, offset)?;
            let rtype = read_u16(buf, pos)?;
            let class = read_u16(buf, pos + 2)?;
            let ttl = read_u32(buf, pos + 4)?;
            let rdlength = read_u16(buf, pos + 8)?;

            let rdata_start = pos + RR_FIXED_LEN;
            let rdata_end = rdata_start + usize::from(rdlength);
            if rdata_end > buf.len() {
                return Err(DomainError::malformed(
                    rdata_start,
                    format!(
                        "RDLENGTH {} runs past end of message ({} bytes)",
                        rdlength,
                        buf.len()
                    ),
                ));
            }

            let data = decode_rdata(buf, rtype, rdata_start, rdata_end)?;

            records.push(ResourceRecord {
                name,
                rtype,
                class,
                ttl,
                rdlength,
                data,
            });
            offset = rdata_end;
        }

        Ok((records, offset))
    }
}

fn decode_rdata(
    buf: &[u8],
    rtype: u16,
    start: usize,
    end: usize,
) -> Result<RecordData, DomainError> {
    let rdata = &buf[start..end];

    let data = match RecordType::from_u16(rtype) {
        Some(RecordType::A) => match <[u8; 4]>::try_from(rdata) {
            Ok(octets) => RecordData::A(Ipv4Addr::from(octets)),
            // Kept verbatim; the validator reports the bad length.
            Err(_) => RecordData::Opaque(rdata.to_vec()),
        },
        Some(RecordType::NS) => RecordData::Ns(MessageDecoder::decode_name(buf, start)?.0),
        Some(RecordType::CNAME) => RecordData::Cname(MessageDecoder::decode_name(buf, start)?.0),
        Some(RecordType::MX) => {
            if rdata.len() < 3 {
                return Err(DomainError::malformed(
                    start,
                    format!("MX RDATA too short ({} bytes)", rdata.len()),
                ));
            }
            RecordData::Mx {
                preference: read_u16(buf, start)?,
                exchange: MessageDecoder::decode_name(buf, start + 2)?.0,
            }
        }
        None => RecordData::Opaque(rdata.to_vec()),
    };

    Ok(data)
}

fn byte_at(buf: &[u8], pos: usize, detail: &str) -> Result<u8, DomainError> {
    buf.get(pos)
        .copied()
        .ok_or_else(|| DomainError::malformed(pos, detail))
}

fn read_u16(buf: &[u8], pos: usize) -> Result<u16, DomainError> {
    buf.get(pos..pos + 2)
        .map(|b| u16::from_be_bytes([b[0], b[1]]))
        .ok_or_else(|| DomainError::malformed(pos, "truncated 16-bit field"))
}

fn read_u32(buf: &[u8], pos: usize) -> Result<u32, DomainError> {
    buf.get(pos..pos + 4)
        .map(|b| u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
        .ok_or_else(|| DomainError::malformed(pos, "truncated 32-bit field"))
}
