use colored::*;
use nodeaddr_common::config::Config;
use nodeaddr_common::network::interface::{InterfaceLister, PrimaryAddress};
use nodeaddr_core::autodetect;

use crate::terminal::{network_fmt, print};

const KEY_WIDTH: usize = 9;

/// Runs autodetection and prints the result. Returns whether an address
/// was found.
pub fn detect<L: InterfaceLister + ?Sized>(lister: &L, cfg: &Config) -> anyhow::Result<bool> {
    print::aligned_line("Method", KEY_WIDTH, cfg.method.to_string());
    print::aligned_line("Family", KEY_WIDTH, cfg.ip_version.to_string());

    if !cfg.include.is_empty() {
        print::aligned_line("Include", KEY_WIDTH, cfg.include.join(","));
    }
    if !cfg.exclude.is_empty() {
        print::aligned_line("Exclude", KEY_WIDTH, cfg.exclude.join(","));
    }

    let selected: Option<PrimaryAddress> = autodetect::autodetect_with_patterns(
        lister,
        &cfg.method,
        &cfg.include,
        &cfg.exclude,
        cfg.ip_version,
    )?;

    match selected {
        Some(primary) => {
            print::header("primary address");
            print::aligned_line("Interface", KEY_WIDTH, primary.interface.name.as_str().bold());
            print::aligned_line("Address", KEY_WIDTH, primary.ip().to_string().bold().green());
            print::aligned_line("Network", KEY_WIDTH, network_fmt::colored_cidr(&primary.cidr));
            print::fat_separator();
            Ok(true)
        }
        None => {
            print::header("nothing found");
            print::no_results(&format!(
                "No {} interface with a routable address matched {}",
                cfg.ip_version, cfg.method
            ));
            Ok(false)
        }
    }
}
