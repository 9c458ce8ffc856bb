//! IEEE 802.1 organizationally specific TLVs, IEEE 802.1Q annex D.

use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use byteorder::{ByteOrder, NetworkEndian};

use super::{check_org_len, Oui};
use crate::caps::flag;
use crate::info::{Decoded, LldpInfo};

enum_sim! {
    /// An enum-like type for representing the IEEE 802.1 TLV subtype.
    pub struct Dot1Subtype (u8) {
        /// Port VLAN ID.
        PORT_VLAN_ID = 1 => "Port VLAN ID",
        /// Port and protocol VLAN ID.
        PROTOCOL_VLAN_ID = 2 => "Port and Protocol VLAN ID",
        /// VLAN name.
        VLAN_NAME = 3 => "VLAN Name",
        /// Protocol identity.
        PROTOCOL_IDENTITY = 4 => "Protocol Identity",
        /// VID usage digest.
        VID_USAGE_DIGEST = 5 => "VID Usage Digest",
        /// Management VID.
        MANAGEMENT_VID = 6 => "Management VID",
        /// Link aggregation.
        LINK_AGGREGATION = 7 => "Link Aggregation",
    }
}

/// Port and protocol VLAN supported.
pub const PROTOCOL_VLAN_ID_CAPABILITY: u8 = 1 << 0;
/// Port and protocol VLAN enabled.
pub const PROTOCOL_VLAN_ID_STATUS: u8 = 1 << 1;

/// Link aggregation supported.
pub const AGGREGATION_CAPABILITY: u8 = 1 << 0;
/// Link aggregation enabled.
pub const AGGREGATION_STATUS: u8 = 1 << 1;

/// Port and protocol VLAN ID TLV.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Default)]
pub struct PortProtocolVlanId {
    /// The port supports protocol VLANs.
    pub supported: bool,
    /// Protocol VLANs are enabled on the port.
    pub enabled: bool,
    /// The VLAN id.
    pub id: u16,
}

/// VLAN name TLV.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct VlanName<'a> {
    /// The VLAN id.
    pub id: u16,
    /// The VLAN name.
    pub name: Cow<'a, str>,
}

/// Link aggregation TLV.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Default)]
pub struct LinkAggregation8021 {
    /// The link can be aggregated.
    pub supported: bool,
    /// The link is currently aggregated.
    pub enabled: bool,
    /// ifIndex of the aggregated port.
    pub port_id: u32,
}

/// The IEEE 802.1 TLVs of an LLDPDU.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Info8021<'a> {
    /// Port VLAN ID.
    pub pvid: u16,
    /// Port and protocol VLAN IDs, in wire order.
    pub ppvids: Vec<PortProtocolVlanId>,
    /// VLAN names, in wire order.
    pub vlan_names: Vec<VlanName<'a>>,
    /// Protocol identities, in wire order.
    pub protocol_identities: Vec<&'a [u8]>,
    /// VID usage digest.
    pub vid_usage_digest: u32,
    /// Management VID.
    pub management_vid: u16,
    /// Link aggregation.
    pub link_aggregation: LinkAggregation8021,
}

impl<'a> LldpInfo<'a> {
    /// Decode the IEEE 802.1 organizationally specific TLVs.
    pub fn decode_8021(&self) -> Decoded<Info8021<'a>> {
        let mut info = Info8021::default();
        let mut errors = Vec::new();

        for o in self.org_tlvs_of(Oui::IEEE_8021) {
            let v = o.info;
            match Dot1Subtype::from(o.subtype) {
                Dot1Subtype::PORT_VLAN_ID => {
                    if check_org_len(o, 2, &mut errors) {
                        info.pvid = NetworkEndian::read_u16(&v[0..2]);
                    }
                }
                Dot1Subtype::PROTOCOL_VLAN_ID => {
                    if check_org_len(o, 3, &mut errors) {
                        info.ppvids.push(PortProtocolVlanId {
                            supported: flag(v[0], PROTOCOL_VLAN_ID_CAPABILITY),
                            enabled: flag(v[0], PROTOCOL_VLAN_ID_STATUS),
                            id: NetworkEndian::read_u16(&v[1..3]),
                        });
                    }
                }
                Dot1Subtype::VLAN_NAME => {
                    if check_org_len(o, 2, &mut errors) {
                        // The name starts after the 1-byte name length at offset 2.
                        info.vlan_names.push(VlanName {
                            id: NetworkEndian::read_u16(&v[0..2]),
                            name: String::from_utf8_lossy(v.get(3..).unwrap_or(&[])),
                        });
                    }
                }
                Dot1Subtype::PROTOCOL_IDENTITY => {
                    if check_org_len(o, 1, &mut errors) {
                        let len = usize::from(v[0]);
                        if len > 0 && check_org_len(o, 1 + len, &mut errors) {
                            info.protocol_identities.push(&v[1..1 + len]);
                        }
                    }
                }
                Dot1Subtype::VID_USAGE_DIGEST => {
                    if check_org_len(o, 4, &mut errors) {
                        info.vid_usage_digest = NetworkEndian::read_u32(&v[0..4]);
                    }
                }
                Dot1Subtype::MANAGEMENT_VID => {
                    if check_org_len(o, 2, &mut errors) {
                        info.management_vid = NetworkEndian::read_u16(&v[0..2]);
                    }
                }
                Dot1Subtype::LINK_AGGREGATION => {
                    if check_org_len(o, 5, &mut errors) {
                        info.link_aggregation = LinkAggregation8021 {
                            supported: flag(v[0], AGGREGATION_CAPABILITY),
                            enabled: flag(v[0], AGGREGATION_STATUS),
                            port_id: NetworkEndian::read_u32(&v[1..5]),
                        };
                    }
                }
                _ => {}
            }
        }

        Decoded {
            value: info,
            errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldError;
    use crate::info::OrgTlv;
    use alloc::vec;

    fn info_with(tlvs: &[(Oui, u8, &'static [u8])]) -> LldpInfo<'static> {
        let mut info = LldpInfo::default();
        for &(oui, subtype, payload) in tlvs {
            info.org_tlvs.push(OrgTlv {
                oui,
                subtype,
                info: payload,
            });
        }
        info
    }

    #[test]
    fn vlan_tlvs() {
        let info = info_with(&[
            (Oui::IEEE_8021, 1, &[0x00, 0x0a]),
            (Oui::IEEE_8021, 2, &[0x03, 0x00, 0x14]),
            (Oui::IEEE_8021, 2, &[0x01, 0x00, 0x1e]),
            (Oui::IEEE_8021, 3, &[0x00, 0x0a, 0x04, b'm', b'g', b'm', b't']),
            (Oui::IEEE_8021, 6, &[0x00, 0x63]),
            // Same subtype under another organization is left alone.
            (Oui::IEEE_8023, 1, &[0x00, 0x0b]),
        ]);
        let decoded = info.decode_8021();
        assert!(decoded.is_ok());

        let dot1 = decoded.value;
        assert_eq!(dot1.pvid, 10);
        assert_eq!(
            dot1.ppvids,
            vec![
                PortProtocolVlanId {
                    supported: true,
                    enabled: true,
                    id: 20
                },
                PortProtocolVlanId {
                    supported: true,
                    enabled: false,
                    id: 30
                },
            ]
        );
        assert_eq!(dot1.vlan_names.len(), 1);
        assert_eq!(dot1.vlan_names[0].id, 10);
        assert_eq!(dot1.vlan_names[0].name, "mgmt");
        assert_eq!(dot1.management_vid, 99);
    }

    #[test]
    fn vlan_name_without_name() {
        let info = info_with(&[(Oui::IEEE_8021, 3, &[0x00, 0x0a])]);
        let decoded = info.decode_8021();
        assert!(decoded.is_ok());
        assert_eq!(decoded.value.vlan_names[0].id, 10);
        assert_eq!(decoded.value.vlan_names[0].name, "");
    }

    #[test]
    fn protocol_identity_and_aggregation() {
        let info = info_with(&[
            (Oui::IEEE_8021, 4, &[0x03, 0x88, 0x8e, 0x01]),
            (Oui::IEEE_8021, 4, &[0x00]),
            (Oui::IEEE_8021, 5, &[0xde, 0xad, 0xbe, 0xef]),
            (Oui::IEEE_8021, 7, &[0x03, 0x00, 0x00, 0x02, 0x01]),
        ]);
        let decoded = info.decode_8021();
        assert!(decoded.is_ok());

        let dot1 = decoded.value;
        assert_eq!(dot1.protocol_identities, vec![&[0x88u8, 0x8e, 0x01][..]]);
        assert_eq!(dot1.vid_usage_digest, 0xdeadbeef);
        assert_eq!(
            dot1.link_aggregation,
            LinkAggregation8021 {
                supported: true,
                enabled: true,
                port_id: 513
            }
        );
    }

    #[test]
    fn short_subtypes_accumulate() {
        let info = info_with(&[
            (Oui::IEEE_8021, 1, &[0x00]),
            (Oui::IEEE_8021, 4, &[0x05, 0x01]),
            (Oui::IEEE_8021, 7, &[0x01, 0x00, 0x00, 0x00, 0x09]),
            (Oui::IEEE_8021, 6, &[]),
        ]);
        let decoded = info.decode_8021();
        assert_eq!(
            decoded.errors,
            vec![
                FieldError::OrgTlv {
                    oui: Oui::IEEE_8021,
                    subtype: 1,
                    len: 1,
                    wanted: 2
                },
                FieldError::OrgTlv {
                    oui: Oui::IEEE_8021,
                    subtype: 4,
                    len: 2,
                    wanted: 6
                },
                FieldError::OrgTlv {
                    oui: Oui::IEEE_8021,
                    subtype: 6,
                    len: 0,
                    wanted: 2
                },
            ]
        );
        assert_eq!(decoded.check(), Err(decoded.errors[0]));

        let dot1 = decoded.value;
        assert_eq!(dot1.pvid, 0);
        assert!(dot1.protocol_identities.is_empty());
        assert_eq!(dot1.link_aggregation.supported, true);
        assert_eq!(dot1.link_aggregation.enabled, false);
        assert_eq!(dot1.link_aggregation.port_id, 9);
    }
}
