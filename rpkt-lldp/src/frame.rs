//! The base LLDPDU: the mandatory Chassis ID, Port ID and TTL TLVs plus the
//! undecoded remainder.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use byteorder::{ByteOrder, NetworkEndian};
use smoltcp::wire::EthernetAddress;

use crate::error::FrameError;
use crate::info::{Decoded, LldpInfo};
use crate::tlv::{RawTlv, TlvIter, TlvType};

/// Chassis ID, Port ID and TTL, plus the End TLV.
const MANDATORY_TLVS: [TlvType; 4] = [
    TlvType::CHASSIS_ID,
    TlvType::PORT_ID,
    TlvType::TTL,
    TlvType::END,
];

enum_sim! {
    /// An enum-like type for representing the Chassis ID subtype.
    pub struct ChassisIdSubtype (u8) {
        /// Reserved, never valid on the wire.
        RESERVED = 0 => "Reserved",
        /// entPhysicalAlias of a chassis component.
        CHASSIS_COMPONENT = 1 => "Chassis Component",
        /// ifAlias of an interface.
        INTERFACE_ALIAS = 2 => "Interface Alias",
        /// entPhysicalAlias of a port or backplane component.
        PORT_COMPONENT = 3 => "Port Component",
        /// A MAC address.
        MAC_ADDR = 4 => "MAC Address",
        /// A network address prefixed by its IANA address family.
        NETWORK_ADDR = 5 => "Network Address",
        /// ifName of an interface.
        INTERFACE_NAME = 6 => "Interface Name",
        /// Locally assigned.
        LOCAL = 7 => "Local",
    }
}

enum_sim! {
    /// An enum-like type for representing the Port ID subtype.
    pub struct PortIdSubtype (u8) {
        /// Reserved, never valid on the wire.
        RESERVED = 0 => "Reserved",
        /// ifAlias of an interface.
        INTERFACE_ALIAS = 1 => "Interface Alias",
        /// entPhysicalAlias of a port component.
        PORT_COMPONENT = 2 => "Port Component",
        /// A MAC address.
        MAC_ADDR = 3 => "MAC Address",
        /// A network address prefixed by its IANA address family.
        NETWORK_ADDR = 4 => "Network Address",
        /// ifName of an interface.
        INTERFACE_NAME = 5 => "Interface Name",
        /// Agent circuit ID, RFC 3046.
        AGENT_CIRCUIT_ID = 6 => "Agent Circuit ID",
        /// Locally assigned.
        LOCAL = 7 => "Local",
    }
}

/// The Chassis ID TLV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChassisId<'a> {
    /// How `id` should be interpreted.
    pub subtype: ChassisIdSubtype,
    /// The identifier.
    pub id: &'a [u8],
}

impl<'a> ChassisId<'a> {
    fn parse(value: &'a [u8]) -> Result<Self, FrameError> {
        if value.len() < 2 {
            tracing::debug!(len = value.len(), "malformed lldp chassis id tlv");
            return Err(FrameError::MissingMandatoryField(TlvType::CHASSIS_ID));
        }
        Ok(Self {
            subtype: value[0].into(),
            id: &value[1..],
        })
    }

    /// The id as a MAC address, if the subtype says it is one.
    pub fn mac_addr(&self) -> Option<EthernetAddress> {
        if self.subtype == ChassisIdSubtype::MAC_ADDR && self.id.len() == 6 {
            Some(EthernetAddress::from_bytes(self.id))
        } else {
            None
        }
    }

    /// The id as text, for the alias, name and local subtypes.
    pub fn id_str(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.id)
    }
}

/// The Port ID TLV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PortId<'a> {
    /// How `id` should be interpreted.
    pub subtype: PortIdSubtype,
    /// The identifier.
    pub id: &'a [u8],
}

impl<'a> PortId<'a> {
    fn parse(value: &'a [u8]) -> Result<Self, FrameError> {
        if value.len() < 2 {
            tracing::debug!(len = value.len(), "malformed lldp port id tlv");
            return Err(FrameError::MissingMandatoryField(TlvType::PORT_ID));
        }
        Ok(Self {
            subtype: value[0].into(),
            id: &value[1..],
        })
    }

    /// The id as a MAC address, if the subtype says it is one.
    pub fn mac_addr(&self) -> Option<EthernetAddress> {
        if self.subtype == PortIdSubtype::MAC_ADDR && self.id.len() == 6 {
            Some(EthernetAddress::from_bytes(self.id))
        } else {
            None
        }
    }

    /// The id as text, for the alias, name and local subtypes.
    pub fn id_str(&self) -> Cow<'a, str> {
        String::from_utf8_lossy(self.id)
    }
}

/// A validated LLDPDU.
///
/// Holds the mandatory TLVs and, in wire order, every other TLV that appeared
/// before the End TLV. All byte fields borrow from the decoded buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LldpFrame<'a> {
    /// The Chassis ID TLV.
    pub chassis_id: ChassisId<'a>,
    /// The Port ID TLV.
    pub port_id: PortId<'a>,
    /// Seconds the advertised information stays valid.
    pub ttl: u16,
    /// The optional TLVs, undecoded.
    pub values: Vec<RawTlv<'a>>,
    buf: &'a [u8],
}

impl<'a> LldpFrame<'a> {
    /// Decode and validate an LLDPDU.
    ///
    /// Fails with `FrameError::Truncated` if a TLV runs past the end of `buf`,
    /// and with `FrameError::MissingMandatoryField` if Chassis ID, Port ID,
    /// TTL or End is absent, too short, or carries the reserved subtype 0.
    /// Bytes following the End TLV are ignored.
    pub fn parse(buf: &'a [u8]) -> Result<Self, FrameError> {
        let mut iter = TlvIter::new(buf);
        let tlvs = iter.by_ref().collect::<Result<Vec<_>, _>>()?;

        if tlvs.len() < MANDATORY_TLVS.len() {
            let missing = MANDATORY_TLVS
                .iter()
                .copied()
                .find(|kind| tlvs.iter().all(|tlv| tlv.kind != *kind))
                .unwrap_or(TlvType::END);
            tracing::debug!(count = tlvs.len(), missing = missing.raw(), "too few lldp tlvs");
            return Err(FrameError::MissingMandatoryField(missing));
        }

        let mut chassis_id = ChassisId::default();
        let mut port_id = PortId::default();
        let mut ttl = None;
        let mut values = Vec::with_capacity(tlvs.len() - MANDATORY_TLVS.len());
        for tlv in tlvs {
            match tlv.kind {
                TlvType::END => {}
                TlvType::CHASSIS_ID => chassis_id = ChassisId::parse(tlv.value)?,
                TlvType::PORT_ID => port_id = PortId::parse(tlv.value)?,
                TlvType::TTL => {
                    if tlv.value.len() < 2 {
                        tracing::debug!(len = tlv.value.len(), "malformed lldp ttl tlv");
                        return Err(FrameError::MissingMandatoryField(TlvType::TTL));
                    }
                    ttl = Some(NetworkEndian::read_u16(&tlv.value[0..2]));
                }
                _ => values.push(tlv),
            }
        }

        let ttl = match ttl {
            Some(ttl) => ttl,
            None => return Err(missing_field(TlvType::TTL)),
        };
        if chassis_id.subtype == ChassisIdSubtype::RESERVED {
            return Err(missing_field(TlvType::CHASSIS_ID));
        }
        if port_id.subtype == PortIdSubtype::RESERVED {
            return Err(missing_field(TlvType::PORT_ID));
        }
        if !iter.end_seen() {
            return Err(missing_field(TlvType::END));
        }

        Ok(Self {
            chassis_id,
            port_id,
            ttl,
            values,
            buf,
        })
    }

    /// The buffer the frame was decoded from.
    #[inline]
    pub fn buf(&self) -> &'a [u8] {
        self.buf
    }

    /// Decode the optional TLVs.
    #[inline]
    pub fn info(&self) -> Decoded<LldpInfo<'a>> {
        LldpInfo::parse(&self.values)
    }
}

fn missing_field(kind: TlvType) -> FrameError {
    tracing::debug!(kind = kind.raw(), "missing mandatory lldp tlv");
    FrameError::MissingMandatoryField(kind)
}
