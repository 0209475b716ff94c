// SPDX-License-Identifier: CC0-1.0

//! Command line tool for checking and converting Ethereum addresses.

use std::str::FromStr;

use anyhow::{anyhow, Result};
use clap::{ArgAction, Parser, Subcommand};
use ethaddr::{Address, BigInt};
use hex::DisplayHex;
use log::{debug, info};

#[derive(Parser)]
#[command(name = "ethaddr", version, about)]
struct Cli {
    /// Increase logging verbosity (may be repeated)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Silence all logging
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the EIP-55 checksummed form of each address
    Checksum {
        #[arg(required = true, value_name = "ADDRESS")]
        addresses: Vec<String>,
    },
    /// Print the 20 bytes of an address as lowercase hex
    Bytes {
        #[arg(value_name = "ADDRESS")]
        address: String,
    },
    /// Print the decimal integer value of an address
    ToInt {
        #[arg(value_name = "ADDRESS")]
        address: String,
    },
    /// Print the address holding a decimal integer value
    FromInt {
        #[arg(value_name = "DECIMAL", allow_hyphen_values = true)]
        value: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    stderrlog::new()
        .module(module_path!())
        .quiet(cli.quiet)
        .verbosity(usize::from(cli.verbose))
        .init()?;

    match cli.cmd {
        Command::Checksum { addresses } => {
            for text in addresses {
                emit(parse_address(&text)?.to_text()?);
            }
        }
        Command::Bytes { address } => {
            let bytes = parse_address(&address)?.to_binary()?;
            emit(bytes.as_slice().to_lower_hex_string());
        }
        Command::ToInt { address } => {
            let n = parse_address(&address)?.to_big_int().ok_or(ethaddr::NothingError)?;
            emit(n.to_string());
        }
        Command::FromInt { value } => {
            let n = BigInt::from_str(&value)
                .map_err(|e| anyhow!("invalid decimal integer {:?}: {}", value, e))?;
            debug!("parsed integer {}", n);
            emit(Address::from_big_int(&n)?.to_text()?);
        }
    }
    Ok(())
}

fn parse_address(text: &str) -> Result<Address> {
    let address = text.parse::<Address>().map_err(|e| anyhow!("invalid address {:?}: {}", text, e))?;
    debug!("parsed {:?} as {:?}", text, address);
    Ok(address)
}

fn emit(line: String) {
    info!("{}", line);
    println!("{}", line);
}
