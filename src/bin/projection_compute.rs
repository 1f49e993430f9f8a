// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
//
//! projection_compute: CLI for the MES projection kernel
//!
//! Takes a request document on stdin or as --json argument and prints the
//! projection response as JSON on stdout. Diagnostics go to stderr
//! (`RUST_LOG=debug` for per-computation traces).
//!
//! Usage:
//!   echo '{"inputs":{"flowRate":1000},"scenario":"optimistic"}' | projection_compute
//!   projection_compute --json '{"inputs":{...},"config":{"carbon_credit_price":80}}'
//!   projection_compute --compare --json '{"inputs":{...}}'
//!   projection_compute --sensitivity 500 --variance 0.3 --seed 42 < request.json
//!
//! Output: `{ result, events, compute_time_ms }`, an array of those with
//!         --compare, or a sensitivity report with --sensitivity.

use std::env;
use std::io::{self, Read};
use tracing_subscriber::EnvFilter;

use mes_core::optimization::SensitivityAnalyzer;
use mes_core::projection_kernel::{ProjectionKernel, ProjectionRequest};

enum Mode {
    Single,
    Compare,
    Sensitivity { samples: usize, variance: f64, seed: u64 },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    let mode = match parse_mode(&args) {
        Ok(m) => m,
        Err(e) => fail(&e),
    };

    // Parse input: either --json '...' or stdin
    let input = match get_input(&args) {
        Ok(s) => s,
        Err(e) => fail(&format!("Failed to read stdin: {}", e)),
    };

    let output = match mode {
        Mode::Single => match ProjectionKernel::respond_to(&input) {
            Ok(response) => serde_json::to_string(&response),
            Err(e) => fail(&format!("Invalid request: {}", e)),
        },
        Mode::Compare => {
            let request = parse_request(&input);
            let responses: Vec<_> = mes_core::Scenario::ALL
                .iter()
                .map(|s| ProjectionKernel::respond(&request.inputs, *s, &request.config))
                .collect();
            serde_json::to_string(&responses)
        }
        Mode::Sensitivity {
            samples,
            variance,
            seed,
        } => {
            let request = parse_request(&input);
            match SensitivityAnalyzer::run(&request.inputs, request.scenario, samples, variance, seed)
            {
                Ok(report) => serde_json::to_string(&report),
                Err(e) => fail(&e.to_string()),
            }
        }
    };

    match output {
        Ok(json) => println!("{}", json),
        Err(e) => fail(&format!("Failed to serialize output: {}", e)),
    }
}

fn fail(message: &str) -> ! {
    eprintln!("ERROR: {}", message);
    std::process::exit(1);
}

fn parse_request(input: &str) -> ProjectionRequest {
    match ProjectionRequest::from_json(input) {
        Ok(r) => r,
        Err(e) => fail(&format!("Invalid request: {}", e)),
    }
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

fn parse_mode(args: &[String]) -> Result<Mode, String> {
    if let Some(samples) = flag_value(args, "--sensitivity") {
        let samples = samples
            .parse()
            .map_err(|_| format!("--sensitivity expects a sample count, got '{}'", samples))?;
        let variance = match flag_value(args, "--variance") {
            Some(v) => v
                .parse()
                .map_err(|_| format!("--variance expects a number, got '{}'", v))?,
            None => 0.3,
        };
        let seed = match flag_value(args, "--seed") {
            Some(v) => v
                .parse()
                .map_err(|_| format!("--seed expects an integer, got '{}'", v))?,
            None => 0,
        };
        return Ok(Mode::Sensitivity {
            samples,
            variance,
            seed,
        });
    }
    if args.iter().any(|a| a == "--compare") {
        return Ok(Mode::Compare);
    }
    Ok(Mode::Single)
}

fn get_input(args: &[String]) -> io::Result<String> {
    // Check for --json argument
    if let Some(json) = flag_value(args, "--json") {
        return Ok(json.to_string());
    }

    // Otherwise read from stdin
    let mut input = String::new();
    io::stdin().read_to_string(&mut input)?;
    Ok(input)
}
