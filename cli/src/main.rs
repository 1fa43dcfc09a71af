mod commands;
mod terminal;

use std::process::ExitCode;

use anyhow::Context;
use commands::{CommandLine, Commands, detect, list};
use nodeaddr_common::config::Config;
use nodeaddr_core::discovery::SystemInterfaces;
use terminal::{logging, print};

fn main() -> anyhow::Result<ExitCode> {
    let commands = CommandLine::parse_args();

    logging::init_logging(commands.verbose)?;

    match commands.command {
        Commands::Detect {
            method,
            include,
            exclude,
        } => {
            print::header("autodetecting address");
            let cfg = Config {
                method,
                ip_version: commands.ip_version,
                include,
                exclude,
            };
            let found = detect::detect(&SystemInterfaces, &cfg)
                .context("address autodetection failed")?;
            Ok(if found { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Commands::List { include, exclude } => {
            print::header("network interfaces");
            list::list(&SystemInterfaces, &include, &exclude, commands.ip_version)
                .context("listing interfaces failed")?;
            Ok(ExitCode::SUCCESS)
        }
    }
}
