//! IEEE 802.1Qbg organizationally specific TLVs.

use alloc::vec::Vec;

use byteorder::{ByteOrder, NetworkEndian};

use super::{check_org_len, Oui};
use crate::caps::EvbCapabilities;
use crate::info::{Decoded, LldpInfo};

enum_sim! {
    /// An enum-like type for representing the IEEE 802.1Qbg TLV subtype.
    pub struct QbgSubtype (u8) {
        /// Edge virtual bridging.
        EVB = 0 => "EVB",
        /// S-channel discovery and configuration.
        CDCP = 1 => "CDCP",
        /// VSI discovery and configuration.
        VDP = 2 => "VDP",
    }
}

/// EVB TLV.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Default)]
pub struct EvbSettings {
    /// Capabilities the station supports.
    pub supported: EvbCapabilities,
    /// Capabilities currently enabled.
    pub enabled: EvbCapabilities,
    /// Number of VSIs supported.
    pub supported_vsis: u16,
    /// Number of VSIs configured.
    pub configured_vsis: u16,
    /// Retransmission timer exponent.
    pub rte_exponent: u8,
}

/// The IEEE 802.1Qbg TLVs of an LLDPDU.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Default)]
pub struct Info8021Qbg {
    /// EVB settings.
    pub evb_settings: EvbSettings,
}

impl<'a> LldpInfo<'a> {
    /// Decode the IEEE 802.1Qbg organizationally specific TLVs.
    ///
    /// Only the EVB subtype is decoded, CDCP and VDP are left in
    /// [`LldpInfo::org_tlvs`].
    pub fn decode_8021qbg(&self) -> Decoded<Info8021Qbg> {
        let mut info = Info8021Qbg::default();
        let mut errors = Vec::new();

        for o in self.org_tlvs_of(Oui::IEEE_8021_QBG) {
            if QbgSubtype::from(o.subtype) != QbgSubtype::EVB || !check_org_len(o, 9, &mut errors) {
                continue;
            }
            let v = o.info;
            info.evb_settings = EvbSettings {
                supported: EvbCapabilities::from_bits(NetworkEndian::read_u16(&v[0..2])),
                enabled: EvbCapabilities::from_bits(NetworkEndian::read_u16(&v[2..4])),
                supported_vsis: NetworkEndian::read_u16(&v[4..6]),
                configured_vsis: NetworkEndian::read_u16(&v[6..8]),
                rte_exponent: v[8],
            };
        }

        Decoded {
            value: info,
            errors,
        }
    }
}
