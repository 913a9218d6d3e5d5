// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context};

use switchyard::config::{load_and_validate_config, Domain, ResolverConfig, RuntimeBuilder};
use switchyard::engine::Resolution;
use switchyard::errors::ResolutionError;
use switchyard::providers::geocode::{Direction, GeocodeQuery};
use switchyard::providers::parser::{ParseDescriptor, ParseSource};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 3 {
        eprintln!("Usage: {} <config.yaml> <input>", args[0]);
        eprintln!("  parser domain:  input is the path of a file to parse");
        eprintln!("  geocode domain: input is an address, or 'lat,lon' for a reverse lookup");
        eprintln!();
        eprintln!("Example: {} configs/parser-demo.yaml data/export.json", args[0]);
        eprintln!("Example: {} configs/geocode-demo.yaml \"lisbon\"", args[0]);
        std::process::exit(1);
    }

    let cfg = load_and_validate_config(&args[1]).map_err(|e| anyhow!("{}", e))?;

    println!("🔀 Switchyard Provider Resolution");
    println!("═════════════════════════════════");
    println!("Config: {}", args[1]);
    println!("Input:  \"{}\"", args[2]);
    println!();

    match cfg.domain {
        Domain::Parser => run_parser(&cfg, &args[2]).await,
        Domain::Geocode => run_geocode(&cfg, &args[2]).await,
    }
}

async fn run_parser(cfg: &ResolverConfig, input: &str) -> anyhow::Result<()> {
    let executor = RuntimeBuilder::parser_runtime(cfg).map_err(|e| anyhow!("{}", e))?;

    let path = Path::new(input);
    let descriptor = ParseDescriptor::from_path(path)
        .ok_or_else(|| anyhow!("'{}' has no extension to select a parser by", input))?;
    let content =
        fs::read_to_string(path).with_context(|| format!("reading input file '{}'", input))?;

    match executor
        .resolve(&descriptor, &ParseSource::new(content))
        .await
    {
        Ok(resolution) => {
            report_acceptance(&resolution);
            println!(
                "Parsed {} record(s) as {}:",
                resolution.payload.records.len(),
                resolution.payload.format
            );
            for record in resolution.payload.records.iter().take(5) {
                println!("  {}", record);
            }
            if resolution.payload.records.len() > 5 {
                println!("  ... and {} more", resolution.payload.records.len() - 5);
            }
            Ok(())
        }
        Err(err) => report_failure(&err),
    }
}

async fn run_geocode(cfg: &ResolverConfig, input: &str) -> anyhow::Result<()> {
    let executor = RuntimeBuilder::geocode_runtime(cfg).map_err(|e| anyhow!("{}", e))?;

    let (direction, query) = match parse_coordinates(input) {
        Some((latitude, longitude)) => (
            Direction::Reverse,
            GeocodeQuery::Coordinates {
                latitude,
                longitude,
            },
        ),
        None => (Direction::Forward, GeocodeQuery::Address(input.to_string())),
    };

    match executor.resolve(&direction, &query).await {
        Ok(resolution) => {
            report_acceptance(&resolution);
            println!(
                "Location: {} ({:.2}, {:.2})",
                resolution.payload.label,
                resolution.payload.latitude,
                resolution.payload.longitude
            );
            Ok(())
        }
        Err(err) => report_failure(&err),
    }
}

/// Interpret "59.91,10.75" style input as reverse-lookup coordinates.
fn parse_coordinates(input: &str) -> Option<(f64, f64)> {
    let (lat, lon) = input.split_once(',')?;
    Some((lat.trim().parse().ok()?, lon.trim().parse().ok()?))
}

fn report_acceptance<T>(resolution: &Resolution<T>) {
    println!(
        "✅ Provider '{}' accepted (confidence {})",
        resolution.provider, resolution.confidence
    );
    for attempt in &resolution.rejected {
        println!("   tried first: {}", attempt);
    }
    println!();
}

fn report_failure(err: &ResolutionError) -> anyhow::Result<()> {
    println!("❌ Resolution failed");
    match err {
        ResolutionError::NoProviderSupports { skipped } => {
            println!("   no provider supports this input");
            for name in skipped {
                println!("   skipped (unsupported): {}", name);
            }
        }
        ResolutionError::AllProvidersExhausted { attempts, skipped } => {
            for attempt in attempts {
                println!("   {}", attempt);
            }
            for name in skipped {
                println!("   skipped (unsupported): {}", name);
            }
        }
    }
    std::process::exit(1);
}
