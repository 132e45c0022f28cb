// SPDX-License-Identifier: Apache-2.0
// Copyright 2025 itsakeyfut
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use clap::Parser;
use ia64dec::core::decoder::Bundle;
use ia64dec::core::disassembler::{Disassembler, ListingFlags};
use ia64dec::core::error::{DecoderError, Result};
use ia64dec::core::loader::{parse_address, CodeImage};
use ia64dec::core::tracer::DecodeTracer;
use ia64dec::core::Config;
use log::{error, info, warn};
use serde::Serialize;
use std::io::{self, Write};

/// IA-64 bundle disassembler
#[derive(Parser)]
#[command(name = "ia64dec")]
#[command(about = "Disassemble IA-64 instruction bundles", long_about = None)]
struct Args {
    /// Raw code image, or a hex dump with --hex
    input: String,

    /// Read the input as hex text instead of raw bytes
    #[arg(long)]
    hex: bool,

    /// Load address of the image (hex with 0x, or decimal)
    #[arg(short = 'b', long)]
    base: Option<String>,

    /// First bundle address to decode
    #[arg(short = 's', long)]
    start: Option<String>,

    /// Number of bundles to decode
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Emit decoded bundles as JSON
    #[arg(long)]
    json: bool,

    /// TOML config file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Write a decode trace to this file
    #[arg(short = 't', long)]
    trace: Option<String>,

    /// Append raw syllable bits to each line
    #[arg(long)]
    bits: bool,

    /// Omit bundle addresses
    #[arg(long)]
    no_address: bool,

    /// Stop at the first bundle that fails to decode
    #[arg(long)]
    strict: bool,
}

/// One JSON record per bundle address
#[derive(Serialize)]
struct Record<'a> {
    address: String,
    bundle: Option<&'a Bundle>,
}

fn main() {
    if let Err(e) = dotenvy::dotenv() {
        // Only log if the error is NOT "file not found"
        if !e.to_string().contains("not found") {
            eprintln!("Warning: Failed to load .env file: {}", e);
        }
    }

    // Initialize logger with default level INFO
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("ia64dec v{}", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.apply_env()?;

    if let Some(base) = &args.base {
        config.base = base.clone();
    }
    if args.bits {
        config.show_raw_bits = true;
    }
    if args.no_address {
        config.show_address = false;
    }
    if args.strict {
        config.strict = true;
    }

    Ok(config)
}

fn run(args: &Args) -> Result<()> {
    let config = load_config(args)?;
    let base = config.base_address()?;

    info!("Loading {} at 0x{:016X}", args.input, base);
    let image = if args.hex {
        CodeImage::from_hex(base, &std::fs::read_to_string(&args.input)?)?
    } else {
        CodeImage::load(&args.input, base)?
    };
    info!("{} bundles in image", image.bundle_count());

    let start = match &args.start {
        Some(text) => {
            let address = parse_address(text)?;
            image.bundle_at(address)?;
            address & !0xF
        }
        None => image.base(),
    };
    let count = args.count.unwrap_or(usize::MAX);

    let mut tracer = args.trace.as_ref().map(DecodeTracer::new).transpose()?;
    let disassembler = Disassembler::new(config.listing_flags());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut decoded = Vec::new();
    let mut total = 0usize;
    let mut invalid = 0usize;

    for (address, bytes) in image
        .bundles()
        .skip_while(|&(address, _)| address < start)
        .take(count)
    {
        let bundle = Bundle::decode(bytes);
        total += 1;

        if let Some(tracer) = tracer.as_mut() {
            tracer.trace(address, bytes, bundle.as_ref())?;
        }

        if bundle.is_none() {
            invalid += 1;
            warn!("Invalid bundle at 0x{:016X}", address);
            if config.strict {
                return Err(DecoderError::InvalidBundle { address });
            }
        }

        if args.json {
            decoded.push((address, bundle));
            continue;
        }

        match &bundle {
            Some(bundle) => {
                for line in disassembler.disassemble_bundle(bundle, address) {
                    writeln!(out, "{}", line)?;
                }
            }
            None => {
                let raw = u128::from_le_bytes(*bytes);
                if disassembler.flags().contains(ListingFlags::ADDRESS) {
                    writeln!(out, "{:016x}  <invalid bundle {:032x}>", address, raw)?;
                } else {
                    writeln!(out, "<invalid bundle {:032x}>", raw)?;
                }
            }
        }
    }

    if args.json {
        let records: Vec<Record> = decoded
            .iter()
            .map(|(address, bundle)| Record {
                address: format!("0x{:016x}", address),
                bundle: bundle.as_ref(),
            })
            .collect();
        serde_json::to_writer_pretty(&mut out, &records)?;
        writeln!(out)?;
    }

    if let Some(tracer) = tracer.as_mut() {
        tracer.flush()?;
    }

    info!("Decoded {} bundles, {} invalid", total, invalid);
    Ok(())
}
