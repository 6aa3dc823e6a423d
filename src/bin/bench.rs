//! Throughput benchmarks for Chuck Norris encoding and decoding.
//!
//! Measures encode/decode speed over built-in sample texts for regression
//! testing during development. Use for relative comparisons only.
//!
//! Usage:
//!   cargo run --release --bin bench          # Run with default 100 iterations
//!   cargo run --release --bin bench -- 1000  # Run with custom iteration count

#![allow(clippy::cast_precision_loss)]

use std::hint::black_box;
use std::time::Instant;

use anyhow::{Context, Result};
use chucknorris::{decode, encode};
use clap::Parser;

const DEFAULT_ITERATIONS: usize = 100;

/// Encode/decode throughput over sample texts.
#[derive(Parser, Debug)]
#[command(name = "bench")]
struct Args {
    /// Iterations per sample
    #[arg(default_value_t = DEFAULT_ITERATIONS)]
    iterations: usize,
}

struct Sample {
    name: &'static str,
    text: String,
}

fn samples() -> Vec<Sample> {
    let pangram = "The quick brown fox jumps over the lazy dog. ";
    let all_codes: String = (0u8..=127).map(char::from).collect();

    vec![
        Sample {
            name: "single",
            text: "C".to_string(),
        },
        Sample {
            name: "pangram",
            text: pangram.to_string(),
        },
        Sample {
            name: "pangram-x64",
            text: pangram.repeat(64),
        },
        Sample {
            name: "all-codes-x16",
            text: all_codes.repeat(16),
        },
        Sample {
            name: "nul-run-4k",
            text: "\0".repeat(4096),
        },
    ]
}

fn report(name: &str, chars: usize, per_iter_us: f64) {
    let chars_per_sec = chars as f64 * 1_000_000.0 / per_iter_us;
    println!(
        "{name:<20} {per_iter_us:>10.2} µs/iter  {chars_per_sec:>14.0} chars/s  ({chars} chars)"
    );
}

fn bench_encode(sample: &Sample, iterations: usize) -> Result<()> {
    let chars = sample.text.chars().count();

    // Warmup run
    encode(&sample.text).with_context(|| format!("encoding {}", sample.name))?;

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = black_box(encode(black_box(&sample.text)));
    }
    let per_iter_us = start.elapsed().as_secs_f64() * 1_000_000.0 / iterations as f64;

    report(sample.name, chars, per_iter_us);
    Ok(())
}

fn bench_decode(sample: &Sample, iterations: usize) -> Result<()> {
    let chars = sample.text.chars().count();
    let encoded = encode(&sample.text).with_context(|| format!("encoding {}", sample.name))?;

    // Warmup run
    decode(&encoded).with_context(|| format!("decoding {}", sample.name))?;

    let start = Instant::now();
    for _ in 0..iterations {
        let _ = black_box(decode(black_box(&encoded)));
    }
    let per_iter_us = start.elapsed().as_secs_f64() * 1_000_000.0 / iterations as f64;

    report(sample.name, chars, per_iter_us);
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let iterations = args.iterations.max(1);
    let samples = samples();

    println!("Chuck Norris Cipher Benchmarks");
    println!("==============================");
    println!("Iterations: {iterations}");

    println!("\nEncode:");
    for sample in &samples {
        bench_encode(sample, iterations)?;
    }

    println!("\nDecode:");
    for sample in &samples {
        bench_decode(sample, iterations)?;
    }

    println!("\nUse these results for relative comparisons only.");
    Ok(())
}
