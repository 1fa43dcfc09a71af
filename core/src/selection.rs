use nodeaddr_common::error::EnumerationError;
use nodeaddr_common::network::interface::{Interface, InterfaceLister, PrimaryAddress};
use nodeaddr_common::network::ip::{self, IpVersion};
use tracing::{debug, info};

/// Lists interfaces through `lister` and returns the first one carrying a
/// global unicast address.
///
/// `Ok(None)` means enumeration worked but nothing qualified. A lister error
/// is returned as-is and no selection is attempted.
pub fn select_primary_address<L: InterfaceLister + ?Sized>(
    lister: &L,
    include: &[String],
    exclude: &[String],
    version: IpVersion,
) -> Result<Option<PrimaryAddress>, EnumerationError> {
    let interfaces: Vec<Interface> = lister.list_interfaces(include, exclude, version)?;
    debug!("Scanning {} {} interface(s)", interfaces.len(), version);

    let selected = first_global_unicast(&interfaces);
    if let Some(primary) = &selected {
        info!("Selected {primary}");
    }
    Ok(selected)
}

/// Scans interfaces in order, and each interface's networks in order,
/// stopping at the first global unicast address.
pub fn first_global_unicast(interfaces: &[Interface]) -> Option<PrimaryAddress> {
    for interface in interfaces {
        debug!(name = %interface.name, "Check interface");
        for cidr in &interface.cidrs {
            debug!(cidr = %cidr, "Check address");
            if ip::is_global_unicast(cidr.ip()) {
                return Some(PrimaryAddress {
                    interface: interface.clone(),
                    cidr: *cidr,
                });
            }
        }
    }
    None
}
