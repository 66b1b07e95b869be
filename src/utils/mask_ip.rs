use std::net::IpAddr;

/// Mask an IP address down to its two leading components for storage.
///
/// `203.0.113.9` becomes `203.0.*.*` and `2001:db8::1` becomes
/// `2001:db8:*:*:*:*:*:*`. IPv4-mapped IPv6 addresses are masked as IPv4.
pub fn mask_ip(ip: IpAddr) -> String {
    match ip.to_canonical() {
        IpAddr::V4(v4) => {
            let [a, b, _, _] = v4.octets();
            format!("{}.{}.*.*", a, b)
        }
        IpAddr::V6(v6) => {
            let segments = v6.segments();
            format!("{:x}:{:x}:*:*:*:*:*:*", segments[0], segments[1])
        }
    }
}

/// Mask a textual address, or `None` when it is not an IP address.
pub fn mask_ip_str(raw: &str) -> Option<String> {
    raw.trim().parse::<IpAddr>().ok().map(mask_ip)
}
