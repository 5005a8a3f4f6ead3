use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};

use fitstats::config::AppConfig;
use fitstats::import::import_packets;
use fitstats::logging::{init_logging, LogFormat, LogLevel};
use fitstats::packet::SensorPacket;
use fitstats::summary::{summarize_batch, BatchEntry};

/// fitstats - Workout Statistics CLI
///
/// Decodes raw sensor packets and reports distance, mean speed and
/// calories burned for running, walking and swimming sessions.
#[derive(Parser)]
#[command(name = "fitstats")]
#[command(version = "0.1.0")]
#[command(about = "Workout statistics from sensor readings", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Log output format (pretty, json, compact)
    #[arg(long, value_name = "FORMAT")]
    log_format: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize workout packets from a file or the command line
    Summarize {
        /// Packet file path (.csv or .json)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Abort on the first bad packet instead of skipping it
        #[arg(long)]
        strict: bool,

        /// One inline packet: workout code followed by its values
        #[arg(value_name = "CODE VALUES", allow_negative_numbers = true)]
        packet: Vec<String>,
    },

    /// Print summaries for the built-in sample packets
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from_file(path)
            .with_context(|| format!("Cannot load config from {}", path.display()))?,
        None => AppConfig::load_or_default(),
    };

    // -v raises the configured level, --log-format overrides the format
    if cli.verbose > 0 {
        config.logging.level = match cli.verbose {
            1 => LogLevel::Debug,
            _ => LogLevel::Trace,
        };
        eprintln!(
            "{}",
            format!("Log level: {:?}", config.logging.level).dimmed()
        );
    }
    if let Some(format) = &cli.log_format {
        config.logging.format = format
            .parse::<LogFormat>()
            .map_err(|message| anyhow::anyhow!(message))?;
    }

    init_logging(&config.logging)?;

    match cli.command {
        Commands::Summarize {
            file,
            strict,
            packet,
        } => {
            let strict = strict || config.processing.strict;
            let packets = gather_packets(file.as_deref(), &packet)?;
            summarize_packets(&packets, strict)
        }
        Commands::Demo => {
            eprintln!("{}", "Built-in sample packets".green().bold());
            summarize_packets(&demo_packets(), false)
        }
    }
}

fn gather_packets(file: Option<&Path>, inline: &[String]) -> Result<Vec<SensorPacket>> {
    match (file, inline.is_empty()) {
        (Some(path), true) => {
            let packets = import_packets(path)
                .with_context(|| format!("Cannot read packets from {}", path.display()))?;
            tracing::info!(count = packets.len(), file = %path.display(), "Packets loaded");
            Ok(packets)
        }
        (None, false) => Ok(vec![parse_inline_packet(inline)?]),
        (Some(_), false) => anyhow::bail!("Give either --file or an inline packet, not both"),
        (None, true) => anyhow::bail!("No packets to summarize; pass --file or an inline packet"),
    }
}

fn parse_inline_packet(args: &[String]) -> Result<SensorPacket> {
    let code = &args[0];
    let mut values = Vec::with_capacity(args.len() - 1);
    for raw in &args[1..] {
        let value = raw
            .parse::<f64>()
            .with_context(|| format!("Cannot parse packet value {:?} as a number", raw))?;
        values.push(value);
    }
    Ok(SensorPacket::new(code, values))
}

/// Summaries go to stdout in input order; every diagnostic goes to stderr
fn summarize_packets(packets: &[SensorPacket], strict: bool) -> Result<()> {
    let mut skipped = 0usize;

    for entry in summarize_batch(packets, strict) {
        match entry {
            BatchEntry::Summarized(summary) => println!("{}", summary),
            BatchEntry::Rejected { index, code, error } => {
                if strict {
                    return Err(error)
                        .with_context(|| format!("Packet {} ({:?}) rejected", index + 1, code));
                }
                eprintln!(
                    "{}",
                    format!("Packet {} skipped: {}", index + 1, error.user_message()).yellow()
                );
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        eprintln!(
            "{}",
            format!("{} of {} packets skipped", skipped, packets.len())
                .yellow()
                .bold()
        );
    }

    Ok(())
}

fn demo_packets() -> Vec<SensorPacket> {
    vec![
        SensorPacket::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPacket::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPacket::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}
