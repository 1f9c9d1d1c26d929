//! Fixed 12-byte DNS header (RFC 1035 §4.1.1).
//!
//! ```text
//!   0  1  2  3  4  5  6  7  8  9 10 11 12 13 14 15
//! |QR|  OPCODE   |AA|TC|RD|RA|   Z    |   RCODE   |
//! ```

const QR_BIT: u16 = 1 << 15;
const OPCODE_SHIFT: u16 = 11;
const OPCODE_MASK: u16 = 0x0F;
const AA_BIT: u16 = 1 << 10;
const TC_BIT: u16 = 1 << 9;
const RD_BIT: u16 = 1 << 8;
const RA_BIT: u16 = 1 << 7;
const Z_SHIFT: u16 = 4;
const Z_MASK: u16 = 0x07;
const RCODE_MASK: u16 = 0x0F;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    pub id: u16,
    pub qr: bool,
    pub opcode: u8,
    pub aa: bool,
    pub tc: bool,
    pub rd: bool,
    pub ra: bool,
    pub z: u8,
    pub rcode: u8,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl Header {
    pub const LEN: usize = 12;

    /// Header for a standard recursive query carrying one question.
    pub fn query(id: u16) -> Self {
        Self {
            id,
            rd: true,
            qdcount: 1,
            ..Self::default()
        }
    }

    /// Rebuilds a header from the id, the packed flags word and the four
    /// section counts, in wire order.
    pub fn from_parts(id: u16, flags: u16, counts: [u16; 4]) -> Self {
        Self {
            id,
            qr: flags & QR_BIT != 0,
            opcode: ((flags >> OPCODE_SHIFT) & OPCODE_MASK) as u8,
            aa: flags & AA_BIT != 0,
            tc: flags & TC_BIT != 0,
            rd: flags & RD_BIT != 0,
            ra: flags & RA_BIT != 0,
            z: ((flags >> Z_SHIFT) & Z_MASK) as u8,
            rcode: (flags & RCODE_MASK) as u8,
            qdcount: counts[0],
            ancount: counts[1],
            nscount: counts[2],
            arcount: counts[3],
        }
    }

    pub fn flags(&self) -> u16 {
        let mut flags = 0u16;
        if self.qr {
            flags |= QR_BIT;
        }
        flags |= (u16::from(self.opcode) & OPCODE_MASK) << OPCODE_SHIFT;
        if self.aa {
            flags |= AA_BIT;
        }
        if self.tc {
            flags |= TC_BIT;
        }
        if self.rd {
            flags |= RD_BIT;
        }
        if self.ra {
            flags |= RA_BIT;
        }
        flags |= (u16::from(self.z) & Z_MASK) << Z_SHIFT;
        flags | (u16::from(self.rcode) & RCODE_MASK)
    }
}
