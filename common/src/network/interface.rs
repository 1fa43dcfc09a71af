use std::fmt;
use std::net::IpAddr;

use pnet::ipnetwork::IpNetwork;

use crate::error::EnumerationError;
use crate::network::ip::IpVersion;

/// A host interface as seen by address selection: its name and the
/// networks configured on it, in the order the OS reported them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    pub name: String,
    pub cidrs: Vec<IpNetwork>,
}

impl Interface {
    pub fn new(name: impl Into<String>, cidrs: Vec<IpNetwork>) -> Self {
        Self {
            name: name.into(),
            cidrs,
        }
    }
}

/// The interface and network chosen for cluster registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimaryAddress {
    pub interface: Interface,
    pub cidr: IpNetwork,
}

impl PrimaryAddress {
    pub fn ip(&self) -> IpAddr {
        self.cidr.ip()
    }
}

impl fmt::Display for PrimaryAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.cidr, self.interface.name)
    }
}

/// Source of name-filtered interfaces.
///
/// `include` and `exclude` are regular expressions matched anywhere in the
/// interface name. Only networks of `version` are kept on each interface.
pub trait InterfaceLister {
    fn list_interfaces(
        &self,
        include: &[String],
        exclude: &[String],
        version: IpVersion,
    ) -> Result<Vec<Interface>, EnumerationError>;
}
