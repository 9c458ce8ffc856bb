//! The raw TLV stream of an LLDPDU.
//!
//! Every TLV starts with a 2-byte header: the upper 7 bits carry the TLV
//! type, the lower 9 bits carry the length of the value that follows.
//! [`TlvIter`] walks a buffer header by header and stops at the End TLV.

use bytes::Buf;

use crate::cursors::Cursor;
use crate::error::FrameError;

/// Length of the TLV header.
pub const TLV_HEADER_LEN: usize = 2;

/// Largest length a 9-bit TLV length field can express.
pub const TLV_MAX_LEN: u16 = 0x1ff;

enum_sim! {
    /// An enum-like type for representing the TLV type.
    pub struct TlvType (u8) {
        /// End of LLDPDU.
        END = 0 => "TLV End",
        /// Chassis ID, mandatory.
        CHASSIS_ID = 1 => "Chassis ID",
        /// Port ID, mandatory.
        PORT_ID = 2 => "Port ID",
        /// Time to live, mandatory.
        TTL = 3 => "TTL",
        /// Port description.
        PORT_DESCRIPTION = 4 => "Port Description",
        /// System name.
        SYS_NAME = 5 => "System Name",
        /// System description.
        SYS_DESCRIPTION = 6 => "System Description",
        /// System capabilities.
        SYS_CAPABILITIES = 7 => "System Capabilities",
        /// Management address.
        MGMT_ADDRESS = 8 => "Management Address",
        /// Organizationally specific TLV.
        ORG_SPECIFIC = 127 => "Organisation Specific",
    }
}

/// A single undecoded TLV borrowing its value from the input buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTlv<'a> {
    /// TLV type.
    pub kind: TlvType,
    /// Declared value length.
    pub len: u16,
    /// The value bytes.
    pub value: &'a [u8],
}

/// An iterator over the TLVs of an LLDPDU.
///
/// It yields the End TLV as its last item and ignores anything after it.
/// A truncated TLV is yielded as an error, after which the iterator is
/// exhausted.
#[derive(Debug, Clone)]
pub struct TlvIter<'a> {
    cursor: Cursor<'a>,
    end_seen: bool,
    failed: bool,
}

impl<'a> TlvIter<'a> {
    /// Start walking `buf` from its first byte.
    #[inline]
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(buf),
            end_seen: false,
            failed: false,
        }
    }

    /// Whether the End TLV has been walked over.
    #[inline]
    pub fn end_seen(&self) -> bool {
        self.end_seen
    }

    /// Number of bytes walked so far.
    #[inline]
    pub fn consumed(&self) -> usize {
        self.cursor.cursor()
    }
}

impl<'a> Iterator for TlvIter<'a> {
    type Item = Result<RawTlv<'a>, FrameError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.end_seen || self.failed || !self.cursor.has_remaining() {
            return None;
        }

        let offset = self.cursor.cursor();
        let remaining = self.cursor.remaining();
        if remaining < TLV_HEADER_LEN {
            self.failed = true;
            tracing::debug!(offset, remaining, "truncated lldp tlv header");
            return Some(Err(FrameError::Truncated {
                offset,
                needed: TLV_HEADER_LEN,
                remaining,
            }));
        }

        let header = self.cursor.get_u16();
        let kind = TlvType::from((header >> 9) as u8);
        let len = header & TLV_MAX_LEN;

        if kind == TlvType::END {
            // The End TLV terminates the walk; its value is never inspected.
            self.end_seen = true;
            let value = self.cursor.take_slice(usize::from(len)).unwrap_or(&[]);
            tracing::trace!(offset, "lldp end tlv");
            return Some(Ok(RawTlv { kind, len, value }));
        }

        match self.cursor.take_slice(usize::from(len)) {
            Some(value) => {
                tracing::trace!(offset, kind = kind.raw(), len, "lldp tlv");
                Some(Ok(RawTlv { kind, len, value }))
            }
            None => {
                self.failed = true;
                tracing::debug!(offset, kind = kind.raw(), len, remaining, "truncated lldp tlv");
                Some(Err(FrameError::Truncated {
                    offset,
                    needed: TLV_HEADER_LEN + usize::from(len),
                    remaining,
                }))
            }
        }
    }
}
