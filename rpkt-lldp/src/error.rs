use core::fmt;

use crate::org::Oui;
use crate::tlv::TlvType;

/// Frame-level decoding failure. No frame is produced when this is returned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FrameError {
    /// A TLV header or value runs past the end of the buffer.
    Truncated {
        /// Offset of the offending TLV header.
        offset: usize,
        /// Bytes the TLV needs, header included.
        needed: usize,
        /// Bytes left in the buffer at `offset`.
        remaining: usize,
    },
    /// One of Chassis ID, Port ID, TTL or End is absent or unusable.
    MissingMandatoryField(TlvType),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FrameError::Truncated {
                offset,
                needed,
                remaining,
            } => write!(
                f,
                "malformed LLDP TLV at offset {}: needs {} bytes, {} remaining",
                offset, needed, remaining
            ),
            FrameError::MissingMandatoryField(kind) => {
                write!(f, "missing mandatory LLDP TLV: {}", kind)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FrameError {}

/// A recognized TLV or organization-specific sub-TLV whose value is too short.
///
/// Field errors never abort decoding; they are collected in `Decoded::errors`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldError {
    /// An optional TLV is shorter than its fixed part.
    Tlv {
        /// Kind of the TLV.
        kind: TlvType,
        /// Actual value length.
        len: usize,
        /// Minimum value length.
        wanted: usize,
    },
    /// An organization-specific sub-TLV is shorter than its fixed part.
    OrgTlv {
        /// Organization the sub-TLV belongs to.
        oui: Oui,
        /// Organization-defined subtype.
        subtype: u8,
        /// Actual payload length.
        len: usize,
        /// Minimum payload length.
        wanted: usize,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldError::Tlv { kind, len, wanted } => write!(
                f,
                "invalid TLV {} length {} (wanted minimum {})",
                kind, len, wanted
            ),
            FieldError::OrgTlv {
                oui,
                subtype,
                len,
                wanted,
            } => write!(
                f,
                "invalid org specific TLV {} subtype {} length {} (wanted minimum {})",
                oui, subtype, len, wanted
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FieldError {}

/// Either tier of failure, as reported by `sink::decode_layers`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LldpError {
    /// The frame could not be decoded at all.
    Frame(FrameError),
    /// The frame was decoded and delivered, but an optional TLV was malformed.
    Field(FieldError),
}

impl From<FrameError> for LldpError {
    fn from(err: FrameError) -> Self {
        LldpError::Frame(err)
    }
}

impl From<FieldError> for LldpError {
    fn from(err: FieldError) -> Self {
        LldpError::Field(err)
    }
}

impl fmt::Display for LldpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LldpError::Frame(err) => err.fmt(f),
            LldpError::Field(err) => err.fmt(f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LldpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LldpError::Frame(err) => Some(err),
            LldpError::Field(err) => Some(err),
        }
    }
}
