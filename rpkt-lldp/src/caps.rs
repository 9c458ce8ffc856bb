//! Expansion of the packed capability words and flag bytes into named flags.

/// Test a single flag bit.
#[inline]
pub(crate) fn flag(value: u8, mask: u8) -> bool {
    value & mask != 0
}

/// The system capabilities a device can advertise, IEEE 802.1AB table 8-4.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Default)]
pub struct Capabilities {
    /// Other.
    pub other: bool,
    /// Repeater.
    pub repeater: bool,
    /// MAC bridge.
    pub bridge: bool,
    /// WLAN access point.
    pub wlan_ap: bool,
    /// Router.
    pub router: bool,
    /// Telephone.
    pub phone: bool,
    /// DOCSIS cable device.
    pub docsis: bool,
    /// Station only.
    pub station_only: bool,
    /// C-VLAN component of a VLAN bridge.
    pub cvlan: bool,
    /// S-VLAN component of a VLAN bridge.
    pub svlan: bool,
    /// Two-port MAC relay.
    pub tmpr: bool,
}

impl Capabilities {
    /// Other.
    pub const OTHER: u16 = 1 << 0;
    /// Repeater.
    pub const REPEATER: u16 = 1 << 1;
    /// MAC bridge.
    pub const BRIDGE: u16 = 1 << 2;
    /// WLAN access point.
    pub const WLAN_AP: u16 = 1 << 3;
    /// Router.
    pub const ROUTER: u16 = 1 << 4;
    /// Telephone.
    pub const PHONE: u16 = 1 << 5;
    /// DOCSIS cable device.
    pub const DOCSIS: u16 = 1 << 6;
    /// Station only.
    pub const STATION_ONLY: u16 = 1 << 7;
    /// C-VLAN component.
    pub const CVLAN: u16 = 1 << 8;
    /// S-VLAN component.
    pub const SVLAN: u16 = 1 << 9;
    /// Two-port MAC relay.
    pub const TMPR: u16 = 1 << 10;

    /// Expand a capability word.
    pub fn from_bits(v: u16) -> Self {
        Self {
            other: v & Self::OTHER != 0,
            repeater: v & Self::REPEATER != 0,
            bridge: v & Self::BRIDGE != 0,
            wlan_ap: v & Self::WLAN_AP != 0,
            router: v & Self::ROUTER != 0,
            phone: v & Self::PHONE != 0,
            docsis: v & Self::DOCSIS != 0,
            station_only: v & Self::STATION_ONLY != 0,
            cvlan: v & Self::CVLAN != 0,
            svlan: v & Self::SVLAN != 0,
            tmpr: v & Self::TMPR != 0,
        }
    }
}

/// Content of the System Capabilities TLV.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Default)]
pub struct SysCapabilities {
    /// Capabilities the system supports.
    pub system_cap: Capabilities,
    /// Capabilities currently enabled.
    pub enabled_cap: Capabilities,
}

/// Edge virtual bridging capabilities, IEEE 802.1Qbg.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy, Default)]
pub struct EvbCapabilities {
    /// Standard bridging.
    pub standard_bridging: bool,
    /// Reflective relay.
    pub reflective_relay: bool,
    /// Retransmission timer exponent.
    pub retransmission_timer_exponent: bool,
    /// Edge control protocol.
    pub edge_control_protocol: bool,
    /// VSI discovery protocol.
    pub vsi_discovery_protocol: bool,
}

impl EvbCapabilities {
    /// Standard bridging.
    pub const STD: u16 = 1 << 0;
    /// Reflective relay.
    pub const RR: u16 = 1 << 1;
    /// Retransmission timer exponent.
    pub const RTE: u16 = 1 << 2;
    /// Edge control protocol.
    pub const ECP: u16 = 1 << 3;
    /// VSI discovery protocol.
    pub const VDP: u16 = 1 << 4;

    /// Expand an EVB capability word.
    pub fn from_bits(v: u16) -> Self {
        Self {
            standard_bridging: v & Self::STD != 0,
            reflective_relay: v & Self::RR != 0,
            retransmission_timer_exponent: v & Self::RTE != 0,
            edge_control_protocol: v & Self::ECP != 0,
            vsi_discovery_protocol: v & Self::VDP != 0,
        }
    }
}

/// The auto-negotiation advertised capability bitmap of the 802.3 MAC/PHY
/// TLV (`ifMauAutoNegCapAdvertisedBits`, RFC 3636).
///
/// The bitmap is kept packed; test it with [`PmdCapabilities::contains`]
/// against the associated constants.
#[derive(Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Default)]
pub struct PmdCapabilities(pub u16);

impl PmdCapabilities {
    /// Other or unknown.
    pub const OTHER: u16 = 1 << 15;
    /// 10BASE-T half duplex.
    pub const B10_BASE_T: u16 = 1 << 14;
    /// 10BASE-T full duplex.
    pub const B10_BASE_T_FD: u16 = 1 << 13;
    /// 100BASE-T4.
    pub const B100_BASE_T4: u16 = 1 << 12;
    /// 100BASE-TX half duplex.
    pub const B100_BASE_TX: u16 = 1 << 11;
    /// 100BASE-TX full duplex.
    pub const B100_BASE_TX_FD: u16 = 1 << 10;
    /// 100BASE-T2 half duplex.
    pub const B100_BASE_T2: u16 = 1 << 9;
    /// 100BASE-T2 full duplex.
    pub const B100_BASE_T2_FD: u16 = 1 << 8;
    /// PAUSE for full-duplex links.
    pub const FDX_PAUSE: u16 = 1 << 7;
    /// Asymmetric PAUSE for full-duplex links.
    pub const FDX_APAUSE: u16 = 1 << 6;
    /// Symmetric PAUSE for full-duplex links.
    pub const FDX_SPAUSE: u16 = 1 << 5;
    /// Asymmetric and symmetric PAUSE for full-duplex links.
    pub const FDX_BPAUSE: u16 = 1 << 4;
    /// 1000BASE-X half duplex.
    pub const B1000_BASE_X: u16 = 1 << 3;
    /// 1000BASE-X full duplex.
    pub const B1000_BASE_X_FD: u16 = 1 << 2;
    /// 1000BASE-T half duplex.
    pub const B1000_BASE_T: u16 = 1 << 1;
    /// 1000BASE-T full duplex.
    pub const B1000_BASE_T_FD: u16 = 1 << 0;

    /// Whether every bit of `mask` is set.
    #[inline]
    pub fn contains(&self, mask: u16) -> bool {
        self.0 & mask == mask
    }

    /// Reinterpret a bitmap sent in reversed bit order.
    ///
    /// Some vendors number the bits from the least significant end, so their
    /// 1000BASE-T full duplex shows up where `OTHER` is expected.
    #[inline]
    pub fn inverted(&self) -> Self {
        Self(self.0.reverse_bits())
    }
}
