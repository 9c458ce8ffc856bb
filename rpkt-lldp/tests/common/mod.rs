use std::{fs, path::PathBuf};

use byteorder::{ByteOrder, NetworkEndian};
use rpkt_lldp::LLDP_ETHERTYPE;

const ETHER_HEADER_LEN: usize = 14;

fn example_path(fname: &str) -> PathBuf {
    // The test is executed under the crate root directory.
    let mut path = std::env::current_dir().unwrap();
    path.push("tests");
    path.push("packet_examples");
    path.push(fname);
    path
}

/// Read a hex dump of a captured ethernet frame.
pub fn file_to_packet(fname: &str) -> Vec<u8> {
    let content = fs::read_to_string(example_path(fname)).unwrap();
    let content = content.trim();
    assert!(content.len() % 2 == 0, "odd hex dump length in {}", fname);

    (0..content.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&content[i..i + 2], 16).unwrap())
        .collect()
}

/// Strip the ethernet header of a captured LLDP frame, checking the ethertype.
#[allow(dead_code)]
pub fn lldpdu(packet: &[u8]) -> &[u8] {
    assert_eq!(NetworkEndian::read_u16(&packet[12..14]), LLDP_ETHERTYPE);
    &packet[ETHER_HEADER_LEN..]
}
