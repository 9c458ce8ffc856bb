#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms)]
#![no_std]

//! Zero-copy decoding of the link layer discovery protocol, IEEE 802.1AB.
//!
//! Decoding happens in two tiers. [`LldpFrame::parse`] walks the TLV stream
//! of an LLDPDU and validates the mandatory TLVs; any failure there rejects
//! the whole frame. [`LldpFrame::info`] then decodes the optional TLVs on a
//! best-effort basis: a malformed TLV is skipped and reported in
//! [`Decoded::errors`] while the rest is still decoded. The organizationally
//! specific sets are decoded on demand from the resulting [`LldpInfo`].
//!
//! ```
//! use rpkt_lldp::LldpFrame;
//! use rpkt_lldp::frame::ChassisIdSubtype;
//!
//! let buf = [
//!     0x02, 0x07, 0x04, 0x00, 0x11, 0x22, 0x33, 0x44, 0x55, // chassis id
//!     0x04, 0x02, 0x07, 0x31, // port id
//!     0x06, 0x02, 0x00, 0x78, // ttl
//!     0x0a, 0x03, b's', b'w', b'1', // system name
//!     0xfe, 0x06, 0x00, 0x80, 0xc2, 0x01, 0x00, 0x0a, // port vlan id
//!     0x00, 0x00, // end
//! ];
//!
//! let frame = LldpFrame::parse(&buf[..]).unwrap();
//! assert_eq!(frame.chassis_id.subtype, ChassisIdSubtype::MAC_ADDR);
//! assert_eq!(frame.ttl, 120);
//!
//! let info = frame.info();
//! assert!(info.is_ok());
//! assert_eq!(info.value.sys_name, "sw1");
//! assert_eq!(info.value.decode_8021().value.pvid, 10);
//! ```

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[macro_use]
mod macros;

mod cursors;
pub use cursors::Cursor;

pub mod caps;
pub mod error;
pub mod frame;
pub mod info;
pub mod org;
pub mod sink;
pub mod tlv;

pub use error::{FieldError, FrameError, LldpError};
pub use frame::{ChassisId, LldpFrame, PortId};
pub use info::{Decoded, LldpInfo};
pub use sink::{decode_layers, Layer, LayerSink};
pub use tlv::{RawTlv, TlvIter, TlvType};

/// The ethertype carried by LLDP frames.
pub const LLDP_ETHERTYPE: u16 = 0x88cc;

/// The nearest bridge group address LLDP frames are sent to.
pub const LLDP_MULTICAST_MAC: smoltcp::wire::EthernetAddress =
    smoltcp::wire::EthernetAddress([0x01, 0x80, 0xc2, 0x00, 0x00, 0x0e]);
