//! Command-line interface.

use clap::Parser;
use std::error::Error;

use crate::models::Prefix;
use crate::{calc, output};

/// Calculate subnet information from CIDR notation
#[derive(Parser, Debug)]
#[command(name = "snc", version, about, long_about = None)]
pub struct Args {
    /// Network prefix in CIDR notation, e.g. 192.168.1.0/24
    pub cidr: String,

    /// Print the result as JSON instead of the text report
    #[arg(long)]
    pub json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Parse the CIDR argument, run the calculation and print the result.
pub fn run(args: &Args) -> Result<(), Box<dyn Error>> {
    log::info!("#Start run() cidr={}", args.cidr);

    let prefix = Prefix::new(&args.cidr).map_err(|e| format!("invalid prefix: {}", e))?;
    let info = calc::subnet_info(prefix)?;
    log::debug!("calculated {}", info);

    if args.json {
        println!("{}", output::to_json(&info)?);
    } else {
        output::print_report(&info);
    }

    Ok(())
}
