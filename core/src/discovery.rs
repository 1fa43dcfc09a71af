use std::io;
use std::net::{IpAddr, SocketAddr, ToSocketAddrs, UdpSocket};

use nodeaddr_common::error::EnumerationError;
use nodeaddr_common::network::interface::{Interface, InterfaceLister, PrimaryAddress};
use nodeaddr_common::network::ip::IpVersion;
use nodeaddr_common::utils::interface::NetworkInterfaceExtension;
use pnet::datalink::{self, NetworkInterface};
use regex::Regex;
use tracing::{debug, trace};

/// Port used when resolving a destination and connecting the probe socket.
/// Nothing is ever sent to it.
const PROBE_PORT: u16 = 80;

/// Include/exclude name filter.
///
/// Each list is compiled into a single alternation. Matching is unanchored,
/// so `eth` admits `veth0` unless the pattern says `^eth`.
#[derive(Debug, Clone)]
pub struct InterfaceFilter {
    include: Option<Regex>,
    exclude: Option<Regex>,
}

impl InterfaceFilter {
    pub fn new(include: &[String], exclude: &[String]) -> Result<Self, EnumerationError> {
        Ok(Self {
            include: compile_alternation(include)?,
            exclude: compile_alternation(exclude)?,
        })
    }

    pub fn admits(&self, name: &str) -> bool {
        let included = self.include.as_ref().is_none_or(|re| re.is_match(name));
        let excluded = self.exclude.as_ref().is_some_and(|re| re.is_match(name));
        included && !excluded
    }
}

fn compile_alternation(patterns: &[String]) -> Result<Option<Regex>, EnumerationError> {
    if patterns.is_empty() {
        return Ok(None);
    }

    // Compile each pattern alone first so the error names the culprit.
    for pattern in patterns {
        Regex::new(pattern).map_err(|source| EnumerationError::InvalidPattern {
            pattern: pattern.clone(),
            source,
        })?;
    }

    let joined: String = format!("({})", patterns.join(")|("));
    let regex = Regex::new(&joined).map_err(|source| EnumerationError::InvalidPattern {
        pattern: joined.clone(),
        source,
    })?;
    Ok(Some(regex))
}

/// Keeps admitted interfaces in OS order, each reduced to its networks of
/// `version`. An interface left with no networks is still returned.
pub fn filter_interfaces(
    raw: Vec<NetworkInterface>,
    filter: &InterfaceFilter,
    version: IpVersion,
) -> Vec<Interface> {
    raw.into_iter()
        .filter(|iface| {
            let admitted = filter.admits(&iface.name);
            trace!(name = %iface.name, admitted, "Filter interface");
            admitted
        })
        .map(|iface| iface.to_interface(version))
        .collect()
}

/// Interface lister backed by the operating system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemInterfaces;

impl InterfaceLister for SystemInterfaces {
    fn list_interfaces(
        &self,
        include: &[String],
        exclude: &[String],
        version: IpVersion,
    ) -> Result<Vec<Interface>, EnumerationError> {
        let filter = InterfaceFilter::new(include, exclude)?;
        let raw: Vec<NetworkInterface> = datalink::interfaces();
        debug!("Identified {} network interface(s)", raw.len());
        Ok(filter_interfaces(raw, &filter, version))
    }
}

/// Returns the local address the kernel would use as the source when
/// talking to `destination`, which may be an IP literal or a host name.
///
/// A UDP socket is connected but no packet leaves the host.
pub fn can_reach(destination: &str, version: IpVersion) -> Result<IpAddr, EnumerationError> {
    let unreachable = |source: io::Error| EnumerationError::Unreachable {
        destination: destination.to_string(),
        source,
    };

    let target: SocketAddr = resolve(destination, version).map_err(unreachable)?;
    let bind_addr = match version {
        IpVersion::V4 => "0.0.0.0:0",
        IpVersion::V6 => "[::]:0",
    };

    let socket = UdpSocket::bind(bind_addr).map_err(unreachable)?;
    socket.connect(target).map_err(unreachable)?;
    let source: IpAddr = socket.local_addr().map_err(unreachable)?.ip();
    debug!("Route to {target} leaves from {source}");
    Ok(source)
}

fn resolve(destination: &str, version: IpVersion) -> io::Result<SocketAddr> {
    if let Ok(ip) = destination.parse::<IpAddr>() {
        return if version.matches(&ip) {
            Ok(SocketAddr::new(ip, PROBE_PORT))
        } else {
            Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{ip} is not an {version} address"),
            ))
        };
    }

    (destination, PROBE_PORT)
        .to_socket_addrs()?
        .find(|addr| version.matches(&addr.ip()))
        .ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no {version} address for {destination}"),
            )
        })
}

/// Finds the interface and network that carry exactly `address`.
pub fn interface_for_address(interfaces: &[Interface], address: IpAddr) -> Option<PrimaryAddress> {
    interfaces.iter().find_map(|interface| {
        interface
            .cidrs
            .iter()
            .find(|cidr| cidr.ip() == address)
            .map(|cidr| PrimaryAddress {
                interface: interface.clone(),
                cidr: *cidr,
            })
    })
}
