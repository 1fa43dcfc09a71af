use colored::*;
use nodeaddr_common::network::interface::{Interface, InterfaceLister};
use nodeaddr_common::network::ip::IpVersion;

use crate::terminal::{network_fmt, print};

pub fn list<L: InterfaceLister + ?Sized>(
    lister: &L,
    include: &[String],
    exclude: &[String],
    version: IpVersion,
) -> anyhow::Result<()> {
    let interfaces: Vec<Interface> = lister.list_interfaces(include, exclude, version)?;

    if interfaces.is_empty() {
        print::no_results("No interfaces matched the given patterns");
        return Ok(());
    }

    for (idx, interface) in interfaces.iter().enumerate() {
        network_fmt::print_interface(interface, idx);
    }

    let summary: ColoredString = format!("{} interface(s)", interfaces.len()).bold().green();
    print::fat_separator();
    print::print_status(format!("{summary} listed for {version}"));
    Ok(())
}
