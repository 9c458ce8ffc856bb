//! Decoding of the optional TLVs of an LLDPDU.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use byteorder::{ByteOrder, NetworkEndian};
use smoltcp::wire::{IpAddress, Ipv4Address, Ipv6Address};

use crate::caps::{Capabilities, SysCapabilities};
use crate::error::FieldError;
use crate::org::{Oui, ORG_TLV_HEADER_LEN};
use crate::tlv::{RawTlv, TlvType};

/// A best-effort decoding result.
///
/// `value` holds everything that could be decoded; `errors` lists, in wire
/// order, every TLV that was skipped or only partially decoded because it was
/// too short. A non-empty `errors` does not make `value` unusable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Decoded<T> {
    /// The decoded value.
    pub value: T,
    /// Accumulated field errors.
    pub errors: Vec<FieldError>,
}

impl<T> Decoded<T> {
    /// Whether no field error occurred.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// The first accumulated error.
    #[inline]
    pub fn first_error(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    /// The overall outcome: `Err` with the first error if any occurred.
    #[inline]
    pub fn check(&self) -> Result<(), FieldError> {
        match self.errors.first() {
            Some(err) => Err(*err),
            None => Ok(()),
        }
    }

    /// Split into the value and the error list.
    #[inline]
    pub fn into_parts(self) -> (T, Vec<FieldError>) {
        (self.value, self.errors)
    }
}

/// Record a field error if `value` is shorter than `wanted`.
pub(crate) fn check_tlv_len(tlv: &RawTlv<'_>, wanted: usize, errors: &mut Vec<FieldError>) -> bool {
    let len = tlv.value.len();
    if len >= wanted {
        return true;
    }
    tracing::debug!(kind = tlv.kind.raw(), len, wanted, "short lldp tlv");
    errors.push(FieldError::Tlv {
        kind: tlv.kind,
        len,
        wanted,
    });
    false
}

enum_sim! {
    /// An enum-like type for representing the management address family.
    pub struct MgmtAddressSubtype (u8) {
        /// IPv4, IANA address family 1.
        IPV4 = 1 => "IPv4",
        /// IPv6, IANA address family 2.
        IPV6 = 2 => "IPv6",
    }
}

enum_sim! {
    /// An enum-like type for representing the interface numbering subtype.
    pub struct InterfaceSubtype (u8) {
        /// Unknown.
        UNKNOWN = 1 => "Unknown",
        /// ifIndex.
        IF_INDEX = 2 => "IfIndex",
        /// System port number.
        SYS_PORT = 3 => "System Port Number",
    }
}

/// The Management Address TLV.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MgmtAddress<'a> {
    /// Address family of `address`.
    pub subtype: MgmtAddressSubtype,
    /// The address.
    pub address: &'a [u8],
    /// Numbering scheme of `interface_number`.
    pub interface_subtype: InterfaceSubtype,
    /// The interface the address belongs to.
    pub interface_number: u32,
    /// Object identifier of the hardware component, empty when absent.
    pub oid: Cow<'a, str>,
}

impl<'a> MgmtAddress<'a> {
    /// The address as an IP address, if it has the length its family implies.
    pub fn ip_addr(&self) -> Option<IpAddress> {
        match self.subtype {
            MgmtAddressSubtype::IPV4 if self.address.len() == 4 => {
                Some(IpAddress::Ipv4(Ipv4Address::from_bytes(self.address)))
            }
            MgmtAddressSubtype::IPV6 if self.address.len() == 16 => {
                Some(IpAddress::Ipv6(Ipv6Address::from_bytes(self.address)))
            }
            _ => None,
        }
    }

    // Every field after the address sits at an offset derived from the
    // address string length in byte 0, so each step re-checks the length.
    // The caller has already checked for the 9-byte minimum.
    fn decode(tlv: &RawTlv<'a>, errors: &mut Vec<FieldError>) -> Option<Self> {
        let v = tlv.value;
        let n = usize::from(v[0]);
        if !check_tlv_len(tlv, n + 7, errors) {
            return None;
        }
        let mut mgmt = Self {
            subtype: v[1].into(),
            address: v.get(2..n + 1).unwrap_or(&[]),
            interface_subtype: v[n + 1].into(),
            interface_number: NetworkEndian::read_u32(&v[n + 2..n + 6]),
            oid: Cow::Borrowed(""),
        };

        let m = usize::from(v[n + 6]);
        if m == 0 {
            return Some(mgmt);
        }
        if !check_tlv_len(tlv, n + 6 + m, errors) {
            return None;
        }
        match v.get(n + 9..n + 9 + m) {
            Some(oid) => {
                mgmt.oid = String::from_utf8_lossy(oid);
                Some(mgmt)
            }
            None => {
                check_tlv_len(tlv, n + 9 + m, errors);
                None
            }
        }
    }
}

/// An organizationally specific TLV, undecoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrgTlv<'a> {
    /// Organization identifier.
    pub oui: Oui,
    /// Organization-defined subtype.
    pub subtype: u8,
    /// The payload after the subtype.
    pub info: &'a [u8],
}

/// The decoded optional TLVs of an LLDPDU.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LldpInfo<'a> {
    /// Port Description TLV.
    pub port_description: Cow<'a, str>,
    /// System Name TLV.
    pub sys_name: Cow<'a, str>,
    /// System Description TLV.
    pub sys_description: Cow<'a, str>,
    /// System Capabilities TLV.
    pub sys_capabilities: SysCapabilities,
    /// The last well-formed Management Address TLV.
    pub mgmt_address: MgmtAddress<'a>,
    /// Organizationally specific TLVs, in wire order.
    pub org_tlvs: Vec<OrgTlv<'a>>,
    /// TLVs of a type this decoder does not know, in wire order.
    pub unknown: Vec<RawTlv<'a>>,
}

impl<'a> LldpInfo<'a> {
    /// Decode the optional TLVs left over by `LldpFrame::parse`.
    ///
    /// A TLV that is too short for its type is skipped and reported in the
    /// error list; decoding carries on with the next TLV.
    pub fn parse(tlvs: &[RawTlv<'a>]) -> Decoded<Self> {
        let mut info = Self::default();
        let mut errors = Vec::new();

        for tlv in tlvs {
            let v = tlv.value;
            match tlv.kind {
                TlvType::PORT_DESCRIPTION => info.port_description = String::from_utf8_lossy(v),
                TlvType::SYS_NAME => info.sys_name = String::from_utf8_lossy(v),
                TlvType::SYS_DESCRIPTION => info.sys_description = String::from_utf8_lossy(v),
                TlvType::SYS_CAPABILITIES => {
                    if check_tlv_len(tlv, 4, &mut errors) {
                        info.sys_capabilities = SysCapabilities {
                            system_cap: Capabilities::from_bits(NetworkEndian::read_u16(&v[0..2])),
                            enabled_cap: Capabilities::from_bits(NetworkEndian::read_u16(&v[2..4])),
                        };
                    }
                }
                TlvType::MGMT_ADDRESS => {
                    if !check_tlv_len(tlv, 9, &mut errors) {
                        continue;
                    }
                    if let Some(mgmt) = MgmtAddress::decode(tlv, &mut errors) {
                        info.mgmt_address = mgmt;
                    }
                }
                TlvType::ORG_SPECIFIC => {
                    if check_tlv_len(tlv, ORG_TLV_HEADER_LEN, &mut errors) {
                        info.org_tlvs.push(OrgTlv {
                            oui: Oui::from(NetworkEndian::read_u24(&v[0..3])),
                            subtype: v[3],
                            info: &v[ORG_TLV_HEADER_LEN..],
                        });
                    }
                }
                _ => info.unknown.push(*tlv),
            }
        }

        Decoded {
            value: info,
            errors,
        }
    }
}
