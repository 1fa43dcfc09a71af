use nodeaddr_common::config::AutodetectionMethod;
use nodeaddr_common::network::ip::IpVersion;
use nodeaddr_core::autodetect::autodetect;
use nodeaddr_integration_tests::fixtures::*;
use nodeaddr_integration_tests::util::{ni, v4, v6};

/*************************************************************
                 Tests for autodetection methods
**************************************************************/

#[test]
fn first_found_skips_virtual_interfaces() {
    let host = MockHost::new(iface_all());
    let selected = autodetect(&host, &AutodetectionMethod::FirstFound, IpVersion::V4)
        .unwrap()
        .unwrap();
    assert_eq!(selected.interface.name, "enp9s0");
    assert_eq!(selected.cidr, v4(192, 168, 0, 32, 24));
}

#[test]
fn first_found_v6() {
    let host = MockHost::new(iface_all());
    let selected = autodetect(&host, &AutodetectionMethod::FirstFound, IpVersion::V6)
        .unwrap()
        .unwrap();
    assert_eq!(selected.cidr, v6("2a02:908:8c1:b880::b054", 128));
}

#[test]
fn first_found_does_not_drop_names_containing_lo() {
    let host = MockHost::new(vec![lo(), ni("wlo1", 3, None, &[v4(192, 168, 5, 5, 24)], 0)]);
    let selected = autodetect(&host, &AutodetectionMethod::FirstFound, IpVersion::V4)
        .unwrap()
        .unwrap();
    assert_eq!(selected.interface.name, "wlo1");
}

#[test]
fn interface_method_selects_matching_interface() {
    let host = MockHost::new(iface_all());
    let method: AutodetectionMethod = "interface=eth.*".parse().unwrap();
    let selected = autodetect(&host, &method, IpVersion::V4).unwrap().unwrap();
    assert_eq!(selected.interface.name, "eth1");
}

#[test]
fn interface_method_without_routable_address_finds_nothing() {
    let host = MockHost::new(iface_all());
    let method: AutodetectionMethod = "interface=^veth".parse().unwrap();
    assert!(autodetect(&host, &method, IpVersion::V6).unwrap().is_none());
}

#[test]
fn skip_interface_method_excludes_matches() {
    let host = MockHost::new(iface_all());
    let method: AutodetectionMethod = "skip-interface=^lo$,^docker,^enp,^tun".parse().unwrap();
    let selected = autodetect(&host, &method, IpVersion::V4).unwrap().unwrap();
    assert_eq!(selected.interface.name, "wlan0");
}

#[test]
fn can_reach_loopback_maps_to_lo() {
    let host = MockHost::new(iface_all());
    let method = AutodetectionMethod::CanReach("127.0.0.1".to_string());
    let selected = autodetect(&host, &method, IpVersion::V4).unwrap().unwrap();
    assert_eq!(selected.interface.name, "lo");
    assert_eq!(selected.cidr, v4(127, 0, 0, 1, 8));
}

#[test]
fn can_reach_forwards_enumeration_failure() {
    let method = AutodetectionMethod::CanReach("127.0.0.1".to_string());
    assert!(autodetect(&FailingHost, &method, IpVersion::V4).is_err());
}

#[test]
fn methods_forward_enumeration_failure() {
    let method = AutodetectionMethod::FirstFound;
    assert!(autodetect(&FailingHost, &method, IpVersion::V4).is_err());
}
