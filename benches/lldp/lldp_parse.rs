use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rpkt_lldp::frame::*;
use rpkt_lldp::tlv::TlvIter;
use rpkt_lldp::LldpFrame;

static FRAME_BYTES: [u8; 121] = [
    0x02, 0x07, 0x04, 0x00, 0x1b, 0x21, 0x3a, 0x4c, 0x5d, 0x04, 0x06, 0x05, 0x47, 0x69, 0x30, 0x2f,
    0x31, 0x06, 0x02, 0x00, 0x78, 0x08, 0x0b, 0x75, 0x70, 0x6c, 0x69, 0x6e, 0x6b, 0x20, 0x70, 0x6f,
    0x72, 0x74, 0x0a, 0x07, 0x73, 0x77, 0x31, 0x2e, 0x6c, 0x61, 0x62, 0x0c, 0x0a, 0x4c, 0x61, 0x62,
    0x20, 0x53, 0x77, 0x69, 0x74, 0x63, 0x68, 0x0e, 0x04, 0x00, 0x14, 0x00, 0x04, 0x10, 0x0c, 0x05,
    0x01, 0xc0, 0xa8, 0x01, 0x0a, 0x02, 0x00, 0x00, 0x00, 0x03, 0x00, 0xfe, 0x06, 0x00, 0x80, 0xc2,
    0x01, 0x00, 0x64, 0xfe, 0x0b, 0x00, 0x80, 0xc2, 0x03, 0x00, 0x64, 0x04, 0x64, 0x61, 0x74, 0x61,
    0xfe, 0x09, 0x00, 0x12, 0x0f, 0x01, 0x03, 0x6c, 0x01, 0x00, 0x1e, 0xfe, 0x06, 0x00, 0x12, 0x0f,
    0x04, 0x05, 0xee, 0x12, 0x02, 0xab, 0xcd, 0x00, 0x00,
];

fn tlv_walk(buf: &[u8]) {
    let count = TlvIter::new(buf).filter(|tlv| tlv.is_ok()).count();
    assert!(count == 14);
}

fn lldp_frame(buf: &[u8]) {
    let frame = LldpFrame::parse(buf).unwrap();
    assert!(frame.chassis_id.subtype == ChassisIdSubtype::MAC_ADDR);
    assert!(frame.port_id.subtype == PortIdSubtype::INTERFACE_NAME);
    assert!(frame.ttl == 120);
    assert!(frame.values.len() == 10);
}

fn lldp_info(buf: &[u8]) {
    let frame = LldpFrame::parse(buf).unwrap();
    let info = frame.info();
    assert!(info.is_ok());
    assert!(info.value.sys_name == "sw1.lab");
    assert!(info.value.mgmt_address.interface_number == 3);
}

fn lldp_org(buf: &[u8]) {
    let frame = LldpFrame::parse(buf).unwrap();
    let info = frame.info().value;

    let dot1 = info.decode_8021().value;
    assert!(dot1.pvid == 100);
    let dot3 = info.decode_8023().value;
    assert!(dot3.mtu == 1518);
    let qbg = info.decode_8021qbg();
    assert!(qbg.is_ok());
}

pub fn b1(c: &mut Criterion) {
    c.bench_function("tlv_walk", |b| {
        b.iter(|| {
            tlv_walk(black_box(&FRAME_BYTES[..]));
        })
    });
}

pub fn b2(c: &mut Criterion) {
    c.bench_function("lldp_frame", |b| {
        b.iter(|| {
            lldp_frame(black_box(&FRAME_BYTES[..]));
        })
    });
}

pub fn b3(c: &mut Criterion) {
    c.bench_function("lldp_info", |b| {
        b.iter(|| {
            lldp_info(black_box(&FRAME_BYTES[..]));
        })
    });
}

pub fn b4(c: &mut Criterion) {
    c.bench_function("lldp_org", |b| {
        b.iter(|| {
            lldp_org(black_box(&FRAME_BYTES[..]));
        })
    });
}

criterion_group!(benches, b1, b2, b3, b4);
criterion_main!(benches);
