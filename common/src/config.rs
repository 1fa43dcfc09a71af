use std::fmt;
use std::str::FromStr;

use crate::error::ConfigError;
use crate::network::ip::IpVersion;

/// Interfaces that never carry a node's registration address: container
/// bridges, veth pairs, overlay tunnels and loopback. Patterns are anchored
/// so that names like `wlo1` are not caught by `lo`.
pub const DEFAULT_INTERFACES_TO_EXCLUDE: &[&str] = &[
    "^docker.*",
    "^cbr.*",
    "^dummy.*",
    "^virbr.*",
    "^lxcbr.*",
    "^veth.*",
    "^lo$",
    "^cali.*",
    "^tunl.*",
    "^flannel.*",
    "^kube-ipvs.*",
    "^cni.*",
    "^vxlan.calico.*",
    "^vxlan-v6.calico.*",
    "^wireguard.cali$",
    "^wg-v6.cali$",
    "^nodelocaldns.*",
];

pub struct Config {
    /// How the registration address is picked.
    pub method: AutodetectionMethod,
    /// Only networks of this family are considered.
    pub ip_version: IpVersion,
    /// Replaces the method's include patterns when non-empty.
    pub include: Vec<String>,
    /// Replaces the method's exclude patterns when non-empty.
    pub exclude: Vec<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum AutodetectionMethod {
    /// First global unicast address, skipping the default virtual interfaces.
    #[default]
    FirstFound,
    /// Only interfaces matching one of the patterns.
    Interface(Vec<String>),
    /// Every interface except those matching one of the patterns.
    SkipInterface(Vec<String>),
    /// The local address the kernel routes through to reach a destination.
    CanReach(String),
}

const FIRST_FOUND: &str = "first-found";
const INTERFACE: &str = "interface=";
const SKIP_INTERFACE: &str = "skip-interface=";
const CAN_REACH: &str = "can-reach=";

impl AutodetectionMethod {
    /// Include and exclude patterns handed to the interface lister.
    pub fn patterns(&self) -> (Vec<String>, Vec<String>) {
        match self {
            AutodetectionMethod::FirstFound => (
                Vec::new(),
                DEFAULT_INTERFACES_TO_EXCLUDE
                    .iter()
                    .map(|p| p.to_string())
                    .collect(),
            ),
            AutodetectionMethod::Interface(include) => (include.clone(), Vec::new()),
            AutodetectionMethod::SkipInterface(exclude) => (Vec::new(), exclude.clone()),
            AutodetectionMethod::CanReach(_) => (Vec::new(), Vec::new()),
        }
    }
}

fn split_patterns(method: &str, value: &str) -> Result<Vec<String>, ConfigError> {
    let patterns: Vec<String> = value
        .split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect();

    if patterns.is_empty() {
        return Err(ConfigError::EmptyPatternList(method.to_string()));
    }
    Ok(patterns)
}

impl FromStr for AutodetectionMethod {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s == FIRST_FOUND {
            return Ok(AutodetectionMethod::FirstFound);
        }
        if let Some(value) = s.strip_prefix(INTERFACE) {
            return Ok(AutodetectionMethod::Interface(split_patterns(s, value)?));
        }
        if let Some(value) = s.strip_prefix(SKIP_INTERFACE) {
            return Ok(AutodetectionMethod::SkipInterface(split_patterns(s, value)?));
        }
        if let Some(value) = s.strip_prefix(CAN_REACH) {
            let destination = value.trim();
            if destination.is_empty() {
                return Err(ConfigError::EmptyPatternList(s.to_string()));
            }
            return Ok(AutodetectionMethod::CanReach(destination.to_string()));
        }
        Err(ConfigError::UnknownMethod(s.to_string()))
    }
}

impl fmt::Display for AutodetectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AutodetectionMethod::FirstFound => write!(f, "{FIRST_FOUND}"),
            AutodetectionMethod::Interface(p) => write!(f, "{INTERFACE}{}", p.join(",")),
            AutodetectionMethod::SkipInterface(p) => write!(f, "{SKIP_INTERFACE}{}", p.join(",")),
            AutodetectionMethod::CanReach(dest) => write!(f, "{CAN_REACH}{dest}"),
        }
    }
}
