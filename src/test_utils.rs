//! src/test_utils.rs

/// A short flow dump in the collector's line-per-field format, shared by
/// the unit tests. Protocol totals: TCP 3, UDP 1; SrcAddr totals:
/// 10.0.0.1 x2, 10.0.0.2 x1, 172.16.4.9 x1.
pub fn sample_flow_lines() -> Vec<&'static str> {
    vec![
        "SrcAddr: 10.0.0.1",
        "DstAddr: 192.168.1.5",
        "SrcPort: 443",
        "DstPort: 52114",
        "Protocol: TCP",
        "SrcAddr: 10.0.0.2",
        "DstAddr: 192.168.1.5",
        "SrcPort: 53",
        "DstPort: 40021",
        "Protocol: UDP",
        "SrcAddr: 10.0.0.1",
        "DstAddr: 192.168.7.30",
        "SrcPort: 8080",
        "DstPort: 51873",
        "Protocol: TCP",
        "SrcAddr: 172.16.4.9",
        "DstAddr: 192.168.1.5",
        "SrcPort: 22",
        "DstPort: 60200",
        "Protocol: TCP",
    ]
}
