//! Organizationally specific TLV sets.
//!
//! Each submodule decodes the subtypes of one organization from the
//! [`OrgTlv`] list collected by [`LldpInfo`]. The result is computed on
//! demand and never stored in the `LldpInfo`.

use alloc::vec::Vec;

use crate::error::FieldError;
use crate::info::{LldpInfo, OrgTlv};

pub mod dot1;
pub mod dot3;
pub mod qbg;

/// Length of the OUI plus the subtype that open every organizationally
/// specific TLV.
pub const ORG_TLV_HEADER_LEN: usize = 4;

enum_sim! {
    /// An enum-like type for representing the IEEE organizationally unique
    /// identifier of an organizationally specific TLV.
    pub struct Oui (u32) {
        /// IEEE 802.1.
        IEEE_8021 = 0x0080c2 => "IEEE 802.1",
        /// IEEE 802.3.
        IEEE_8023 = 0x00120f => "IEEE 802.3",
        /// IEEE 802.1Qbg.
        IEEE_8021_QBG = 0x0013bf => "IEEE 802.1Qbg",
        /// Cisco.
        CISCO2 = 0x000142 => "Cisco",
        /// TIA TR-41 committee, LLDP-MED.
        TR41 = 0x0012bb => "TIA TR-41",
        /// PROFIBUS and PROFINET International.
        PROFINET = 0x000ecf => "PROFINET",
    }
}

impl<'a> LldpInfo<'a> {
    /// The organizationally specific TLVs of one organization, in wire order.
    pub fn org_tlvs_of(&self, oui: Oui) -> impl Iterator<Item = &OrgTlv<'a>> + '_ {
        self.org_tlvs.iter().filter(move |tlv| tlv.oui == oui)
    }
}

/// Record a field error if the payload is shorter than `wanted`.
pub(crate) fn check_org_len(tlv: &OrgTlv<'_>, wanted: usize, errors: &mut Vec<FieldError>) -> bool {
    let len = tlv.info.len();
    if len >= wanted {
        return true;
    }
    tracing::debug!(oui = tlv.oui.raw(), subtype = tlv.subtype, len, wanted, "short lldp org tlv");
    errors.push(FieldError::OrgTlv {
        oui: tlv.oui,
        subtype: tlv.subtype,
        len,
        wanted,
    });
    false
}
