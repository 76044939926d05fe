mod archiver;
mod cli;
mod config;
mod error;
mod packager;
mod utils;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::archiver::Archiver;
use crate::cli::Args;

fn main() -> Result<()> {
    // Parse command line arguments - usage errors go to stdout with exit code 1
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(err) => {
            println!("{}", err.render());
            std::process::exit(1);
        }
    };

    // Initialize tracing
    let filter = if args.verbose {
        EnvFilter::new("nft_dist=debug")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let archiver = Archiver::new(args)?;
    archiver.run()?;

    Ok(())
}
