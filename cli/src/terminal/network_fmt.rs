use colored::*;
use nodeaddr_common::network::interface::Interface;
use nodeaddr_common::network::ip::{self, Ipv6Kind};
use pnet::ipnetwork::IpNetwork;

use crate::terminal::{colors, print};

pub fn cidr_label(ip_network: &IpNetwork) -> &'static str {
    match ip_network {
        IpNetwork::V4(_) => "IPv4",
        IpNetwork::V6(ipv6_network) => match ip::ipv6_kind(&ipv6_network.ip()) {
            Ipv6Kind::GlobalUnicast => "GUA",
            Ipv6Kind::UniqueLocal => "ULA",
            Ipv6Kind::LinkLocal => "LLA",
            _ => "IPv6",
        },
    }
}

pub fn colored_cidr(ip_network: &IpNetwork) -> ColoredString {
    let (address, prefix): (ColoredString, ColoredString) = match ip_network {
        IpNetwork::V4(v4) => (
            v4.ip().to_string().color(colors::IPV4_ADDR),
            v4.prefix().to_string().color(colors::IPV4_PREFIX),
        ),
        IpNetwork::V6(v6) => (
            v6.ip().to_string().color(colors::IPV6_ADDR),
            v6.prefix().to_string().color(colors::IPV6_PREFIX),
        ),
    };
    format!("{address}/{prefix}").color(colors::SEPARATOR)
}

pub fn to_key_value_pair_net(ip_net: &[IpNetwork]) -> Vec<(String, ColoredString)> {
    ip_net
        .iter()
        .map(|ip_network| {
            let mut value: ColoredString = colored_cidr(ip_network);
            if !ip::is_global_unicast(ip_network.ip()) {
                value = format!("{value} {}", "(not routable)".dimmed()).normal();
            }
            (cidr_label(ip_network).to_string(), value)
        })
        .collect()
}

pub fn print_interface(interface: &Interface, idx: usize) {
    print::tree_head(idx, &interface.name);
    print::as_tree_one_level(to_key_value_pair_net(&interface.cidrs));
}
