mod common;
use common::*;

use rpkt_lldp::frame::*;
use rpkt_lldp::info::*;
use rpkt_lldp::tlv::*;
use rpkt_lldp::*;
use smoltcp::wire::{EthernetAddress, IpAddress};

#[test]
fn lldp_frame_parsing() {
    let packet = file_to_packet("lldp_full.dat");
    assert_eq!(EthernetAddress::from_bytes(&packet[0..6]), LLDP_MULTICAST_MAC);
    let du = lldpdu(&packet);

    let frame = LldpFrame::parse(du).unwrap();
    assert_eq!(frame.buf().len(), 125);

    assert_eq!(frame.chassis_id.subtype, ChassisIdSubtype::MAC_ADDR);
    assert_eq!(
        frame.chassis_id.mac_addr(),
        Some(EthernetAddress([0x00, 0x1b, 0x21, 0x3a, 0x4c, 0x5d]))
    );
    assert_eq!(frame.port_id.subtype, PortIdSubtype::INTERFACE_NAME);
    assert_eq!(frame.port_id.subtype.name(), "Interface Name");
    assert_eq!(frame.port_id.id_str(), "Gi0/1");
    assert_eq!(frame.port_id.mac_addr(), None);
    assert_eq!(frame.ttl, 120);

    let kinds: Vec<TlvType> = frame.values.iter().map(|tlv| tlv.kind).collect();
    assert_eq!(
        kinds,
        [
            TlvType::PORT_DESCRIPTION,
            TlvType::SYS_NAME,
            TlvType::SYS_DESCRIPTION,
            TlvType::SYS_CAPABILITIES,
            TlvType::MGMT_ADDRESS,
            TlvType::ORG_SPECIFIC,
            TlvType::ORG_SPECIFIC,
            TlvType::ORG_SPECIFIC,
            TlvType::ORG_SPECIFIC,
            TlvType::from(9),
        ]
    );
}

#[test]
fn lldp_info_parsing() {
    let packet = file_to_packet("lldp_full.dat");
    let frame = LldpFrame::parse(lldpdu(&packet)).unwrap();

    let decoded = frame.info();
    assert!(decoded.is_ok());
    let info = decoded.value;

    assert_eq!(info.port_description, "uplink port");
    assert_eq!(info.sys_name, "sw1.lab");
    assert_eq!(info.sys_description, "Lab Switch");

    let caps = info.sys_capabilities;
    assert!(caps.system_cap.bridge && caps.system_cap.router);
    assert!(!caps.system_cap.phone);
    assert!(caps.enabled_cap.bridge);
    assert!(!caps.enabled_cap.router);

    let mgmt = &info.mgmt_address;
    assert_eq!(mgmt.subtype, MgmtAddressSubtype::IPV4);
    assert_eq!(mgmt.address, &[192u8, 168, 1, 10][..]);
    assert_eq!(mgmt.ip_addr(), Some(IpAddress::v4(192, 168, 1, 10)));
    assert_eq!(mgmt.interface_subtype, InterfaceSubtype::IF_INDEX);
    assert_eq!(mgmt.interface_number, 3);
    assert_eq!(mgmt.oid, "");

    assert_eq!(info.org_tlvs.len(), 4);
    assert_eq!(info.unknown.len(), 1);
    assert_eq!(info.unknown[0].kind.name(), "Unknown");
    assert_eq!(info.unknown[0].value, &[0xabu8, 0xcd][..]);
}

#[test]
fn lldp_extension_parsing() {
    let packet = file_to_packet("lldp_full.dat");
    let frame = LldpFrame::parse(lldpdu(&packet)).unwrap();
    let info = frame.info().value;

    let dot1 = info.decode_8021();
    assert!(dot1.is_ok());
    assert_eq!(dot1.value.pvid, 100);
    assert_eq!(dot1.value.vlan_names.len(), 1);
    assert_eq!(dot1.value.vlan_names[0].id, 100);
    assert_eq!(dot1.value.vlan_names[0].name, "data");

    let dot3 = info.decode_8023();
    assert!(dot3.is_ok());
    assert!(dot3.value.mac_phy.autoneg_supported);
    assert!(dot3.value.mac_phy.autoneg_enabled);
    assert_eq!(dot3.value.mac_phy.mau_type.name(), "1000BaseT FD");
    assert_eq!(dot3.value.mtu, 1518);

    // No 802.1Qbg TLV in this frame.
    let qbg = info.decode_8021qbg();
    assert!(qbg.is_ok());
    assert_eq!(qbg.value, Default::default());

    // Decoding again gives the same result.
    assert_eq!(info.decode_8021(), dot1);
}

#[test]
fn lldp_truncated_frame() {
    let packet = file_to_packet("lldp_full.dat");
    let du = lldpdu(&packet);
    // The End TLV closes at offset 121, padding follows.
    assert!(LldpFrame::parse(&du[..121]).is_ok());

    for len in 0..121 {
        let res = LldpFrame::parse(&du[..len]);
        assert!(
            matches!(
                res,
                Err(FrameError::Truncated { .. }) | Err(FrameError::MissingMandatoryField(_))
            ),
            "prefix of {} bytes decoded",
            len
        );
    }

    assert_eq!(
        LldpFrame::parse(&du[..12]),
        Err(FrameError::Truncated {
            offset: 9,
            needed: 8,
            remaining: 3
        })
    );
}

#[test]
fn lldp_malformed_mgmt_address() {
    let packet = file_to_packet("lldp_full.dat");
    let mut du = lldpdu(&packet).to_vec();
    // Address string length of the management address TLV.
    assert_eq!(du[63], 5);
    du[63] = 0x20;

    let frame = LldpFrame::parse(&du[..]).unwrap();
    let decoded = frame.info();
    assert_eq!(
        decoded.errors,
        [FieldError::Tlv {
            kind: TlvType::MGMT_ADDRESS,
            len: 12,
            wanted: 39
        }]
    );
    assert_eq!(
        decoded.check().unwrap_err().to_string(),
        "invalid TLV Management Address length 12 (wanted minimum 39)"
    );

    // Everything else is still decoded.
    assert_eq!(decoded.value.mgmt_address, MgmtAddress::default());
    assert_eq!(decoded.value.sys_name, "sw1.lab");
    assert_eq!(decoded.value.decode_8021().value.pvid, 100);
}

#[test]
fn lldp_decode_layers() {
    let packet = file_to_packet("lldp_full.dat");
    let du = lldpdu(&packet);

    let mut layers: Vec<Layer<'_>> = Vec::new();
    decode_layers(du, &mut layers).unwrap();
    assert_eq!(layers.len(), 2);

    let frame = LldpFrame::parse(du).unwrap();
    let info = frame.info().value;
    assert_eq!(layers[0], Layer::Frame(frame));
    assert_eq!(layers[1], Layer::Info(info));

    let mut layers: Vec<Layer<'_>> = Vec::new();
    let err = decode_layers(&du[..40], &mut layers).unwrap_err();
    assert!(matches!(err, LldpError::Frame(FrameError::Truncated { .. })));
    assert!(layers.is_empty());
}
