use pnet::datalink::NetworkInterface;
use pnet::ipnetwork::IpNetwork;

use crate::network::interface::Interface;
use crate::network::ip::IpVersion;

pub trait NetworkInterfaceExtension {
    fn get_nets(&self, version: IpVersion) -> Vec<IpNetwork>;
    fn to_interface(&self, version: IpVersion) -> Interface;
}

impl NetworkInterfaceExtension for NetworkInterface {
    fn get_nets(&self, version: IpVersion) -> Vec<IpNetwork> {
        self.ips
            .iter()
            .filter(|net| version.matches(&net.ip()))
            .copied()
            .collect()
    }

    fn to_interface(&self, version: IpVersion) -> Interface {
        Interface::new(self.name.clone(), self.get_nets(version))
    }
}
