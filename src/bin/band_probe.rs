//! Scaling probe: wall-clock time and resident-memory deltas for full vs
//! banded fills.
//!
//! Run with:
//! `cargo run --release --features probe --bin band_probe`
//!
//! Banded results are verified against the full fill wherever the full
//! table is still affordable; larger sizes are reported unchecked. Inputs
//! are near-diagonal (point mutations of a shared template), so the two
//! modes must agree on score.

use std::env;
use std::time::Instant;

use band_align::{align, Aligner, Band};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("band_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/2] Full fills (quadratic table)...");
    measurements.extend(run_full(&options, &mut sys));
    eprintln!("[2/2] Banded fills (corridor table)...");
    measurements.extend(run_banded(&options, &mut sys));

    println!("scenario,len,wall_s,rss_delta_kib,status");
    for m in &measurements {
        println!(
            "{},{},{:.3},{},{}",
            m.scenario, m.len, m.wall_s, m.rss_delta_kib, m.status
        );
    }

    if measurements.iter().any(|m| m.status == "failed") {
        std::process::exit(1);
    }
}

struct Options {
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut verify_limit = 2048usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_limit(value)?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = parse_limit(&value)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self { verify_limit })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --release --features probe --bin band_probe [-- <options>]

Options:
  --verify-limit <N>   Maximum length checked against the full fill (default: 2048)
  -h, --help           Print this help message
"
        );
    }
}

fn parse_limit(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| "verify limit must be a positive integer".to_string())
}

struct Measurement {
    scenario: &'static str,
    len: usize,
    wall_s: f64,
    rss_delta_kib: u64,
    status: &'static str,
}

fn run_full(_options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[256, 512, 1024, 2048];
    SIZES
        .iter()
        .map(|&len| {
            let (seq1, seq2) = mutated_pair(len);
            measure("full", len, sys, || {
                let result = align(&seq1, &seq2, false, len).expect("positive bound");
                eprintln!("      full len={len}: score={}", result.score);
                "not_checked"
            })
        })
        .collect()
}

fn run_banded(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[1024, 4096, 16384, 65536, 262144];
    let aligner = Aligner::new(Band::banded(), usize::MAX).expect("positive bound");
    SIZES
        .iter()
        .map(|&len| {
            let (seq1, seq2) = mutated_pair(len);
            measure("banded", len, sys, || {
                let result = aligner.align(&seq1, &seq2);
                if len > options.verify_limit {
                    eprintln!("      banded len={len}: score={}", result.score);
                    return "not_checked";
                }
                let baseline = align(&seq1, &seq2, false, len).expect("positive bound");
                if baseline.score == result.score {
                    eprintln!("      banded len={len}: score={} (matches full)", result.score);
                    "passed"
                } else {
                    eprintln!(
                        "      banded len={len}: score={} but full fill found {}",
                        result.score, baseline.score
                    );
                    "failed"
                }
            })
        })
        .collect()
}

fn measure<F>(scenario: &'static str, len: usize, sys: &mut System, compute: F) -> Measurement
where
    F: FnOnce() -> &'static str,
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let status = compute();
    let duration = start.elapsed();
    let after = rss_kib(sys);

    Measurement {
        scenario,
        len,
        wall_s: duration.as_secs_f64(),
        rss_delta_kib: after.saturating_sub(before),
        status,
    }
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

/// A template sequence and a copy with sparse point mutations: the optimal
/// path hugs the diagonal, so full and banded fills agree.
fn mutated_pair(len: usize) -> (Vec<u8>, Vec<u8>) {
    const ALPHABET: &[u8] = b"ACGT";
    let seq1: Vec<u8> = (0..len).map(|i| ALPHABET[(i / 7 + i) % 4]).collect();
    let mut seq2 = seq1.clone();
    for i in (0..len).step_by(97) {
        seq2[i] = if seq2[i] == b'A' { b'G' } else { b'A' };
    }
    (seq1, seq2)
}
