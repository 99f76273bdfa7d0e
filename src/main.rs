use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use librsn::element::RSN_ELEMENT_ID;
use librsn::{AkmSuite, CypherSuite, ElementOption, RsnInformation};
use log::{debug, warn, LevelFilter};

use std::fmt::Write;

#[derive(Parser, Debug)]
#[command(name = "rsn_tool", author, version, about, long_about = None)]
/// Decode and build 802.11 RSN information elements.
struct Arguments {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Decode a hex encoded RSN element and print its fields.
    Decode {
        /// Hex encoded element data. ':', '-' and whitespace separators are ignored.
        hex: String,

        /// The input starts with the element id and length.
        #[arg(short, long)]
        element: bool,
    },

    /// Build an RSN element and print it as hex.
    Encode {
        #[arg(long, default_value_t = 1)]
        rsn_version: u16,

        /// Group cipher suite, by name (ccmp, tkip, ...) or as 0x prefixed code.
        #[arg(short, long, default_value = "ccmp")]
        group: CypherSuite,

        /// Pairwise cipher suite, can be repeated.
        #[arg(short, long)]
        pairwise: Vec<CypherSuite>,

        /// AKM suite (psk, eap, sae, ...), can be repeated.
        #[arg(short, long)]
        akm: Vec<AkmSuite>,

        /// RSN capabilities bitmask, decimal or 0x prefixed.
        #[arg(short, long, default_value = "0", value_parser = parse_u16)]
        capabilities: u16,

        /// Prefix the output with the element id and length.
        #[arg(short, long)]
        element: bool,
    },

    /// Print the canonical WPA2-PSK element.
    Wpa2Psk {
        /// Prefix the output with the element id and length.
        #[arg(short, long)]
        element: bool,
    },
}

fn parse_u16(value: &str) -> Result<u16, String> {
    let parsed = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => value.parse(),
    };

    parsed.map_err(|e| format!("{value}: {e}"))
}

fn decode_hex(input: &str) -> Result<Vec<u8>> {
    let cleaned: String = input
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ':' && *c != '-')
        .collect();

    hex::decode(&cleaned).with_context(|| format!("Invalid hex input: {input}"))
}

fn decode(input: &str, element: bool) -> Result<RsnInformation> {
    let bytes = decode_hex(input)?;

    if !element {
        return RsnInformation::parse(&bytes).context("Invalid RSN element data");
    }

    let (option, remaining) = ElementOption::parse(&bytes).context("Invalid element header")?;
    if option.id != RSN_ELEMENT_ID {
        warn!(
            "Element id is {}, not the RSN element id {}",
            option.id, RSN_ELEMENT_ID
        );
    }
    if !remaining.is_empty() {
        debug!("Ignoring {} bytes after the element", remaining.len());
    }

    RsnInformation::from_option(&option).context("Invalid RSN element")
}

fn build(
    rsn_version: u16,
    group: CypherSuite,
    pairwise: Vec<CypherSuite>,
    akm: Vec<AkmSuite>,
    capabilities: u16,
) -> Result<RsnInformation> {
    let mut info = RsnInformation::new();
    info.set_version(rsn_version);
    info.set_group_suite(group);
    info.set_capabilities(capabilities);

    for cypher in pairwise {
        info.add_pairwise_cypher(cypher)?;
    }
    for suite in akm {
        info.add_akm_cypher(suite)?;
    }

    Ok(info)
}

fn encode(info: &RsnInformation, element: bool) -> Result<String> {
    let bytes = if element {
        info.to_element_bytes()?
    } else {
        info.serialize()
    };

    Ok(hex::encode(bytes))
}

fn join<T: ToString>(suites: &[T]) -> String {
    if suites.is_empty() {
        return "-".to_string();
    }

    suites
        .iter()
        .map(|suite| suite.to_string())
        .collect::<Vec<String>>()
        .join(", ")
}

/// Number of replay counters for the 2 bit capabilities field.
fn replay_counters(value: u8) -> u8 {
    match value {
        0 => 1,
        1 => 2,
        2 => 4,
        _ => 16,
    }
}

fn describe(info: &RsnInformation) -> Result<String, std::fmt::Error> {
    let flags = info.capability_flags();
    let mut output = String::new();

    writeln!(output, "Version: {}", info.version())?;
    writeln!(output, "Group cipher suite: {}", info.group_suite())?;
    writeln!(
        output,
        "Pairwise cipher suites ({}): {}",
        info.pairwise_cyphers().len(),
        join(info.pairwise_cyphers())
    )?;
    writeln!(
        output,
        "AKM suites ({}): {}",
        info.akm_cyphers().len(),
        join(info.akm_cyphers())
    )?;
    writeln!(output, "RSN capabilities: 0x{:04x}", flags.bits())?;
    writeln!(output, "  Pre-authentication: {}", flags.pre_auth())?;
    writeln!(output, "  No pairwise: {}", flags.no_pairwise())?;
    writeln!(
        output,
        "  PTKSA replay counters: {}",
        replay_counters(flags.ptksa_replay_counter())
    )?;
    writeln!(
        output,
        "  GTKSA replay counters: {}",
        replay_counters(flags.gtksa_replay_counter())
    )?;
    writeln!(output, "  MFP required: {}", flags.mfp_required())?;
    writeln!(output, "  MFP capable: {}", flags.mfp_capable())?;
    writeln!(
        output,
        "  Joint multi-band RSNA: {}",
        flags.joint_multi_band_rsna()
    )?;
    writeln!(output, "  PeerKey enabled: {}", flags.peerkey_enabled())?;
    writeln!(output, "  Extended key ID: {}", flags.extended_key_id())?;
    write!(output, "  OCVC: {}", flags.ocvc())?;

    Ok(output)
}

fn main() -> Result<()> {
    let args = Arguments::parse();

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    match args.command {
        Command::Decode { hex, element } => {
            let info = decode(&hex, element)?;
            println!("{}", describe(&info)?);
        }
        Command::Encode {
            rsn_version,
            group,
            pairwise,
            akm,
            capabilities,
            element,
        } => {
            let info = build(rsn_version, group, pairwise, akm, capabilities)?;
            println!("{}", encode(&info, element)?);
        }
        Command::Wpa2Psk { element } => {
            println!("{}", encode(&RsnInformation::wpa2_psk(), element)?);
        }
    }

    Ok(())
}
