use nodeaddr_common::config::AutodetectionMethod;
use nodeaddr_common::error::EnumerationError;
use nodeaddr_common::network::interface::{Interface, InterfaceLister, PrimaryAddress};
use nodeaddr_common::network::ip::IpVersion;
use tracing::{debug, info};

use crate::discovery;
use crate::selection;

/// Picks the registration address using `method`.
pub fn autodetect<L: InterfaceLister + ?Sized>(
    lister: &L,
    method: &AutodetectionMethod,
    version: IpVersion,
) -> Result<Option<PrimaryAddress>, EnumerationError> {
    autodetect_with_patterns(lister, method, &[], &[], version)
}

/// Like [`autodetect`], but a non-empty `include` or `exclude` replaces the
/// patterns the method would pass to the lister.
pub fn autodetect_with_patterns<L: InterfaceLister + ?Sized>(
    lister: &L,
    method: &AutodetectionMethod,
    include: &[String],
    exclude: &[String],
    version: IpVersion,
) -> Result<Option<PrimaryAddress>, EnumerationError> {
    debug!("Autodetecting {version} address using method {method}");

    let (include, exclude) = if include.is_empty() && exclude.is_empty() {
        method.patterns()
    } else {
        debug!("Interface patterns overridden: include {include:?}, exclude {exclude:?}");
        (include.to_vec(), exclude.to_vec())
    };

    match method {
        AutodetectionMethod::CanReach(destination) => {
            let source = discovery::can_reach(destination, version)?;
            let interfaces: Vec<Interface> = lister.list_interfaces(&include, &exclude, version)?;
            let found = discovery::interface_for_address(&interfaces, source);
            match &found {
                Some(primary) => info!("Selected {primary} (reaches {destination})"),
                None => debug!("No interface carries route source {source}"),
            }
            Ok(found)
        }
        _ => selection::select_primary_address(lister, &include, &exclude, version),
    }
}
