pub mod detect;
pub mod list;

use clap::{ArgAction, Parser, Subcommand};
use nodeaddr_common::config::AutodetectionMethod;
use nodeaddr_common::network::ip::IpVersion;

#[derive(Parser)]
#[command(name = "nodeaddr")]
#[command(about = "Pick the address a node registers with its cluster.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Address family to consider (4 or 6)
    #[arg(long, global = true, env = "IP_VERSION", default_value = "4")]
    pub ip_version: IpVersion,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Select the primary address for this node
    #[command(alias = "d")]
    Detect {
        /// first-found, interface=<regex,...>, skip-interface=<regex,...>
        /// or can-reach=<destination>
        #[arg(long, env = "IP_AUTODETECTION_METHOD", default_value = "first-found")]
        method: AutodetectionMethod,
        /// Only consider interfaces matching this pattern (repeatable)
        #[arg(short, long)]
        include: Vec<String>,
        /// Skip interfaces matching this pattern (repeatable)
        #[arg(short, long)]
        exclude: Vec<String>,
    },
    /// Show the interfaces left after name filtering
    #[command(alias = "l")]
    List {
        /// Only list interfaces matching this pattern (repeatable)
        #[arg(short, long)]
        include: Vec<String>,
        /// Hide interfaces matching this pattern (repeatable)
        #[arg(short, long)]
        exclude: Vec<String>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
