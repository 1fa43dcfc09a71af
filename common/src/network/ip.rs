use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

use crate::error::ConfigError;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpVersion {
    #[default]
    V4,
    V6,
}

impl IpVersion {
    pub fn matches(self, ip: &IpAddr) -> bool {
        matches!(
            (self, ip),
            (IpVersion::V4, IpAddr::V4(_)) | (IpVersion::V6, IpAddr::V6(_))
        )
    }

    pub fn number(self) -> u8 {
        match self {
            IpVersion::V4 => 4,
            IpVersion::V6 => 6,
        }
    }
}

impl TryFrom<u8> for IpVersion {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(IpVersion::V4),
            6 => Ok(IpVersion::V6),
            other => Err(ConfigError::InvalidIpVersion(other.to_string())),
        }
    }
}

/// Accepts `4`, `v4`, `ipv4` and the IPv6 equivalents, case-insensitive.
impl FromStr for IpVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered: String = s.trim().to_ascii_lowercase();
        let digits: &str = lowered.strip_prefix("ip").unwrap_or(&lowered);
        let digits: &str = digits.strip_prefix('v').unwrap_or(digits);
        match digits {
            "4" => Ok(IpVersion::V4),
            "6" => Ok(IpVersion::V6),
            _ => Err(ConfigError::InvalidIpVersion(s.to_string())),
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IPv{}", self.number())
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Ipv6Kind {
    GlobalUnicast,
    UniqueLocal,
    LinkLocal,
    Loopback,
    #[default]
    Other,
}

pub fn ipv6_kind(ipv6_addr: &Ipv6Addr) -> Ipv6Kind {
    match true {
        _ if in_global_unicast_block(ipv6_addr) => Ipv6Kind::GlobalUnicast,
        _ if ipv6_addr.is_unique_local() => Ipv6Kind::UniqueLocal,
        _ if ipv6_addr.is_unicast_link_local() => Ipv6Kind::LinkLocal,
        _ if ipv6_addr.is_loopback() => Ipv6Kind::Loopback,
        _ => Ipv6Kind::Other,
    }
}

// 2000::/3
fn in_global_unicast_block(ipv6_addr: &Ipv6Addr) -> bool {
    let first_byte = ipv6_addr.octets()[0];
    0x3F >= first_byte && first_byte >= 0x20
}

/// Reports whether `ip` can be used as a routable unicast address.
///
/// Loopback, link-local, multicast and unspecified addresses are rejected,
/// as is the IPv4 limited broadcast. Private ranges are accepted. An
/// IPv4-mapped IPv6 address is judged by its IPv4 form.
pub fn is_global_unicast(ip: IpAddr) -> bool {
    match ip {
        IpAddr::V4(v4) => is_global_unicast_v4(v4),
        IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
            Some(v4) => is_global_unicast_v4(v4),
            None => is_global_unicast_v6(v6),
        },
    }
}

fn is_global_unicast_v4(ip: Ipv4Addr) -> bool {
    !(ip.is_unspecified()
        || ip.is_loopback()
        || ip.is_multicast()
        || ip.is_link_local()
        || ip.is_broadcast())
}

fn is_global_unicast_v6(ip: Ipv6Addr) -> bool {
    !(ip.is_unspecified() || ip.is_loopback() || ip.is_multicast() || ip.is_unicast_link_local())
}
