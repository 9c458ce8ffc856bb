//! IEEE 802.3 organizationally specific TLVs, IEEE 802.3 clause 79.

use alloc::vec::Vec;

use byteorder::{ByteOrder, NetworkEndian};

use super::dot1::{AGGREGATION_CAPABILITY, AGGREGATION_STATUS};
use super::{check_org_len, Oui};
use crate::caps::{flag, PmdCapabilities};
use crate::info::{Decoded, LldpInfo};

enum_sim! {
    /// An enum-like type for representing the IEEE 802.3 TLV subtype.
    pub struct Dot3Subtype (u8) {
        /// MAC/PHY configuration and status.
        MAC_PHY = 1 => "MAC/PHY Configuration/Status",
        /// Power via MDI.
        MDI_POWER = 2 => "Power via MDI",
        /// Link aggregation, superseded by the IEEE 802.1 TLV.
        LINK_AGGREGATION = 3 => "Link Aggregation",
        /// Maximum frame size.
        MTU = 4 => "Maximum Frame Size",
    }
}

enum_sim! {
    /// An enum-like type for representing the operational MAU type
    /// (`dot3MauType` of the IANA-MAU-MIB).
    pub struct MauType (u16) {
        /// Unknown.
        UNKNOWN = 0 => "Unknown",
        /// AUI.
        AUI = 1 => "AUI",
        /// 10BASE5.
        B10_BASE_5 = 2 => "10Base5",
        /// FOIRL.
        FOIRL = 3 => "FOIRL",
        /// 10BASE2.
        B10_BASE_2 = 4 => "10Base2",
        /// 10BASE-T, duplex unknown.
        B10_BASE_T = 5 => "10BaseT",
        /// 10BASE-FP.
        B10_BASE_FP = 6 => "10BaseFP",
        /// 10BASE-FB.
        B10_BASE_FB = 7 => "10BaseFB",
        /// 10BASE-FL, duplex unknown.
        B10_BASE_FL = 8 => "10BaseFL",
        /// 10BROAD36.
        B10_BROAD_36 = 9 => "10Broad36",
        /// 10BASE-T half duplex.
        B10_BASE_T_HD = 10 => "10BaseT HD",
        /// 10BASE-T full duplex.
        B10_BASE_T_FD = 11 => "10BaseT FD",
        /// 10BASE-FL half duplex.
        B10_BASE_FL_HD = 12 => "10BaseFL HD",
        /// 10BASE-FL full duplex.
        B10_BASE_FL_FD = 13 => "10BaseFL FD",
        /// 100BASE-T4.
        B100_BASE_T4 = 14 => "100BaseT4",
        /// 100BASE-TX half duplex.
        B100_BASE_TX_HD = 15 => "100BaseTX HD",
        /// 100BASE-TX full duplex.
        B100_BASE_TX_FD = 16 => "100BaseTX FD",
        /// 100BASE-FX half duplex.
        B100_BASE_FX_HD = 17 => "100BaseFX HD",
        /// 100BASE-FX full duplex.
        B100_BASE_FX_FD = 18 => "100BaseFX FD",
        /// 100BASE-T2 half duplex.
        B100_BASE_T2_HD = 19 => "100BaseT2 HD",
        /// 100BASE-T2 full duplex.
        B100_BASE_T2_FD = 20 => "100BaseT2 FD",
        /// 1000BASE-X half duplex.
        B1000_BASE_X_HD = 21 => "1000BaseX HD",
        /// 1000BASE-X full duplex.
        B1000_BASE_X_FD = 22 => "1000BaseX FD",
        /// 1000BASE-LX half duplex.
        B1000_BASE_LX_HD = 23 => "1000BaseLX HD",
        /// 1000BASE-LX full duplex.
        B1000_BASE_LX_FD = 24 => "1000BaseLX FD",
        /// 1000BASE-SX half duplex.
        B1000_BASE_SX_HD = 25 => "1000BaseSX HD",
        /// 1000BASE-SX full duplex.
        B1000_BASE_SX_FD = 26 => "1000BaseSX FD",
        /// 1000BASE-CX half duplex.
        B1000_BASE_CX_HD = 27 => "1000BaseCX HD",
        /// 1000BASE-CX full duplex.
        B1000_BASE_CX_FD = 28 => "1000BaseCX FD",
        /// 1000BASE-T half duplex.
        B1000_BASE_T_HD = 29 => "1000BaseT HD",
        /// 1000BASE-T full duplex.
        B1000_BASE_T_FD = 30 => "1000BaseT FD",
        /// 10GBASE-X.
        B10G_BASE_X = 31 => "10GBaseX",
        /// 10GBASE-LX4.
        B10G_BASE_LX4 = 32 => "10GBaseLX4",
        /// 10GBASE-R.
        B10G_BASE_R = 33 => "10GBaseR",
        /// 10GBASE-ER.
        B10G_BASE_ER = 34 => "10GBaseER",
        /// 10GBASE-LR.
        B10G_BASE_LR = 35 => "10GBaseLR",
        /// 10GBASE-SR.
        B10G_BASE_SR = 36 => "10GBaseSR",
        /// 10GBASE-W.
        B10G_BASE_W = 37 => "10GBaseW",
        /// 10GBASE-EW.
        B10G_BASE_EW = 38 => "10GBaseEW",
        /// 10GBASE-LW.
        B10G_BASE_LW = 39 => "10GBaseLW",
        /// 10GBASE-SW.
        B10G_BASE_SW = 40 => "10GBaseSW",
        /// 10GBASE-CX4.
        B10G_BASE_CX4 = 41 => "10GBaseCX4",
        /// 2BASE-TL.
        B2_BASE_TL = 42 => "2BaseTL",
        /// 10PASS-TS.
        B10_PASS_TS = 43 => "10PassTS",
        /// 100BASE-BX10 downstream.
        B100_BASE_BX10_D = 44 => "100BaseBX10D",
        /// 100BASE-BX10 upstream.
        B100_BASE_BX10_U = 45 => "100BaseBX10U",
        /// 100BASE-LX10.
        B100_BASE_LX10 = 46 => "100BaseLX10",
        /// 1000BASE-BX10 downstream.
        B1000_BASE_BX10_D = 47 => "1000BaseBX10D",
        /// 1000BASE-BX10 upstream.
        B1000_BASE_BX10_U = 48 => "1000BaseBX10U",
        /// 1000BASE-LX10.
        B1000_BASE_LX10 = 49 => "1000BaseLX10",
        /// 1000BASE-PX10 downstream.
        B1000_BASE_PX10_D = 50 => "1000BasePX10D",
        /// 1000BASE-PX10 upstream.
        B1000_BASE_PX10_U = 51 => "1000BasePX10U",
        /// 1000BASE-PX20 downstream.
        B1000_BASE_PX20_D = 52 => "1000BasePX20D",
        /// 1000BASE-PX20 upstream.
        B1000_BASE_PX20_U = 53 => "1000BasePX20U",
        /// 10GBASE-T.
        B10G_BASE_T = 54 => "10GBaseT",
        /// 10GBASE-LRM.
        B10G_BASE_LRM = 55 => "10GBaseLRM",
        /// 1000BASE-KX.
        B1000_BASE_KX = 56 => "1000BaseKX",
        /// 10GBASE-KX4.
        B10G_BASE_KX4 = 57 => "10GBaseKX4",
        /// 10GBASE-KR.
        B10G_BASE_KR = 58 => "10GBaseKR",
        /// 10/1GBASE-PRX-D1.
        B10_1G_BASE_PRX_D1 = 59 => "10/1GBasePRX-D1",
        /// 10/1GBASE-PRX-D2.
        B10_1G_BASE_PRX_D2 = 60 => "10/1GBasePRX-D2",
        /// 10/1GBASE-PRX-D3.
        B10_1G_BASE_PRX_D3 = 61 => "10/1GBasePRX-D3",
        /// 10/1GBASE-PRX-U1.
        B10_1G_BASE_PRX_U1 = 62 => "10/1GBasePRX-U1",
        /// 10/1GBASE-PRX-U2.
        B10_1G_BASE_PRX_U2 = 63 => "10/1GBasePRX-U2",
        /// 10/1GBASE-PRX-U3.
        B10_1G_BASE_PRX_U3 = 64 => "10/1GBasePRX-U3",
        /// 10GBASE-PR-D1.
        B10G_BASE_PR_D1 = 65 => "10GBasePR-D1",
        /// 10GBASE-PR-D2.
        B10G_BASE_PR_D2 = 66 => "10GBasePR-D2",
        /// 10GBASE-PR-D3.
        B10G_BASE_PR_D3 = 67 => "10GBasePR-D3",
        /// 10GBASE-PR-U1.
        B10G_BASE_PR_U1 = 68 => "10GBasePR-U1",
        /// 10GBASE-PR-U3.
        B10G_BASE_PR_U3 = 69 => "10GBasePR-U3",
    }
}

/// Auto-negotiation supported.
pub const MAC_PHY_CAPABILITY: u8 = 1 << 0;
/// Auto-negotiation enabled.
pub const MAC_PHY_STATUS: u8 = 1 << 1;

/// Port class is PSE, PD otherwise.
pub const MDI_POWER_PORT_CLASS: u8 = 1 << 0;
/// PSE MDI power supported.
pub const MDI_POWER_CAPABILITY: u8 = 1 << 1;
/// PSE MDI power enabled.
pub const MDI_POWER_STATUS: u8 = 1 << 2;
/// PSE pairs control ability.
pub const MDI_POWER_PAIRS_ABILITY: u8 = 1 << 3;

/// Offset added to the power source of PD power types, whose source codes
/// overlap with those of PSE power types.
pub const PD_SOURCE_OFFSET: u8 = 128;

enum_sim! {
    /// An enum-like type for representing the 802.3at power type.
    pub struct PowerType (u8) {
        /// Type 2 PSE.
        TYPE2_PSE = 0 => "Type 2 PSE Device",
        /// Type 2 PD.
        TYPE2_PD = 1 => "Type 2 PD Device",
        /// Type 1 PSE.
        TYPE1_PSE = 2 => "Type 1 PSE Device",
        /// Type 1 PD.
        TYPE1_PD = 3 => "Type 1 PD Device",
    }
}

impl PowerType {
    /// Whether the device is a power sourcing equipment.
    #[inline]
    pub fn is_pse(&self) -> bool {
        self.0 & 0x01 == 0
    }
}

enum_sim! {
    /// An enum-like type for representing the 802.3at power source.
    ///
    /// Sources reported by PD power types are shifted by `PD_SOURCE_OFFSET`.
    pub struct PowerSource (u8) {
        /// Unknown source.
        UNKNOWN = 0 => "Unknown",
        /// Powered by the PSE.
        PSE = 1 => "PSE",
        /// Powered locally.
        LOCAL = 2 => "Local",
        /// Powered by both the PSE and a local source.
        PSE_AND_LOCAL = 3 => "PSE and Local",
        /// Unknown source, PD power type.
        SHIFTED_UNKNOWN = 128 => "Unknown",
        /// Primary power source.
        PRIMARY = 129 => "Primary Power Source",
        /// Backup power source.
        BACKUP = 130 => "Backup Power Source",
    }
}

enum_sim! {
    /// An enum-like type for representing the 802.3at power priority.
    pub struct PowerPriority (u8) {
        /// Unknown.
        UNKNOWN = 0 => "Unknown",
        /// Critical.
        CRITICAL = 1 => "Critical",
        /// High.
        HIGH = 2 => "High",
        /// Low.
        LOW = 3 => "Low",
    }
}

/// MAC/PHY configuration/status TLV.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Default)]
pub struct MacPhyConfigStatus {
    /// Auto-negotiation is supported.
    pub autoneg_supported: bool,
    /// Auto-negotiation is enabled.
    pub autoneg_enabled: bool,
    /// Advertised auto-negotiation capabilities.
    pub autoneg_capability: PmdCapabilities,
    /// Operational MAU type.
    pub mau_type: MauType,
}

/// Power via MDI TLV.
///
/// The fields from `power_type` on are only present in the 802.3at form of
/// the TLV and stay zero otherwise.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Default)]
pub struct PowerViaMdi {
    /// The port is a PSE port, a PD port otherwise.
    pub port_class_pse: bool,
    /// PSE MDI power supported.
    pub pse_supported: bool,
    /// PSE MDI power enabled.
    pub pse_enabled: bool,
    /// PSE pairs can be controlled.
    pub pse_pairs_ability: bool,
    /// PSE power pair.
    pub pse_power_pair: u8,
    /// Power class.
    pub pse_class: u8,
    /// Power type.
    pub power_type: PowerType,
    /// Power source.
    pub power_source: PowerSource,
    /// Power priority.
    pub power_priority: PowerPriority,
    /// PD requested power, in units of 0.1 W.
    pub requested_power: u16,
    /// PSE allocated power, in units of 0.1 W.
    pub allocated_power: u16,
}

/// Link aggregation TLV of the 802.3 set.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Default)]
pub struct LinkAggregation8023 {
    /// Aggregation status flags.
    pub status: u8,
    /// ifIndex of the aggregated port.
    pub port_id: u32,
}

impl LinkAggregation8023 {
    /// The link can be aggregated.
    #[inline]
    pub fn supported(&self) -> bool {
        flag(self.status, AGGREGATION_CAPABILITY)
    }

    /// The link is currently aggregated.
    #[inline]
    pub fn enabled(&self) -> bool {
        flag(self.status, AGGREGATION_STATUS)
    }
}

/// The IEEE 802.3 TLVs of an LLDPDU.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Default)]
pub struct Info8023 {
    /// MAC/PHY configuration/status.
    pub mac_phy: MacPhyConfigStatus,
    /// Power via MDI.
    pub power: PowerViaMdi,
    /// Link aggregation.
    pub link_aggregation: LinkAggregation8023,
    /// Maximum frame size.
    pub mtu: u16,
}

fn decode_power(v: &[u8]) -> PowerViaMdi {
    let mut power = PowerViaMdi {
        port_class_pse: flag(v[0], MDI_POWER_PORT_CLASS),
        pse_supported: flag(v[0], MDI_POWER_CAPABILITY),
        pse_enabled: flag(v[0], MDI_POWER_STATUS),
        pse_pairs_ability: flag(v[0], MDI_POWER_PAIRS_ABILITY),
        pse_power_pair: v[1],
        pse_class: v[2],
        ..Default::default()
    };

    if v.len() >= 8 {
        power.power_type = PowerType::from((v[3] & 0xc0) >> 6);
        let source = (v[3] & 0x30) >> 4;
        power.power_source = if power.power_type.is_pse() {
            PowerSource::from(source)
        } else {
            PowerSource::from(source + PD_SOURCE_OFFSET)
        };
        power.power_priority = PowerPriority::from(v[4] & 0x0f);
        power.requested_power = NetworkEndian::read_u16(&v[5..7]);
        if let Some(allocated) = v.get(7..9) {
            power.allocated_power = NetworkEndian::read_u16(allocated);
        }
    }

    power
}

impl<'a> LldpInfo<'a> {
    /// Decode the IEEE 802.3 organizationally specific TLVs.
    pub fn decode_8023(&self) -> Decoded<Info8023> {
        let mut info = Info8023::default();
        let mut errors = Vec::new();

        for o in self.org_tlvs_of(Oui::IEEE_8023) {
            let v = o.info;
            match Dot3Subtype::from(o.subtype) {
                Dot3Subtype::MAC_PHY => {
                    if check_org_len(o, 5, &mut errors) {
                        info.mac_phy = MacPhyConfigStatus {
                            autoneg_supported: flag(v[0], MAC_PHY_CAPABILITY),
                            autoneg_enabled: flag(v[0], MAC_PHY_STATUS),
                            autoneg_capability: PmdCapabilities(NetworkEndian::read_u16(&v[1..3])),
                            mau_type: MauType::from(NetworkEndian::read_u16(&v[3..5])),
                        };
                    }
                }
                Dot3Subtype::MDI_POWER => {
                    if check_org_len(o, 3, &mut errors) {
                        info.power = decode_power(v);
                    }
                }
                Dot3Subtype::LINK_AGGREGATION => {
                    if check_org_len(o, 5, &mut errors) {
                        info.link_aggregation = LinkAggregation8023 {
                            status: v[0],
                            port_id: NetworkEndian::read_u32(&v[1..5]),
                        };
                    }
                }
                Dot3Subtype::MTU => {
                    if check_org_len(o, 2, &mut errors) {
                        info.mtu = NetworkEndian::read_u16(&v[0..2]);
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
