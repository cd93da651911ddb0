//! Example: Analyze many texts in parallel
//!
//! Usage:
//!   cargo run --release --example analyze_batch -- [--jobs N] [--json] [FILE]
//!
//! Notes:
//! - One text per non-empty line, read from FILE or stdin.
//! - Parallelism is across texts. Default workers: (available CPU threads - 1).

use finsent::{analyze_batch, BatchEntry};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::time::Instant;

fn default_jobs() -> usize {
    let n = std::thread::available_parallelism().map(|v| v.get()).unwrap_or(1);
    std::cmp::max(1, n.saturating_sub(1))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut args: Vec<String> = env::args().skip(1).collect();

    let mut json = false;
    let mut jobs: Option<usize> = None;
    let mut path: Option<String> = None;

    while let Some(a) = args.first().cloned() {
        args.remove(0);
        match a.as_str() {
            "--json" => json = true,
            "--jobs" => {
                let v = args
                    .first()
                    .ok_or("--jobs requires a value")?
                    .parse::<usize>()?;
                args.remove(0);
                jobs = Some(std::cmp::max(1, v));
            }
            "--help" | "-h" => {
                eprintln!(
                    "Usage: analyze_batch [--jobs N] [--json] [FILE]\n\
                     \n\
                     --jobs N   Parallel workers (default: CPU-1)\n\
                     --json     Emit one JSON object per line (JSONL)\n"
                );
                return Ok(());
            }
            _ => path = Some(a),
        }
    }

    let input = match path {
        Some(p) => fs::read_to_string(p)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let texts: Vec<&str> = input.lines().filter(|l| !l.trim().is_empty()).collect();

    if texts.is_empty() {
        eprintln!("ERROR: No input texts. Use --help for usage.");
        std::process::exit(2);
    }

    let jobs = jobs.unwrap_or_else(default_jobs);
    eprintln!("Batch: {} texts, jobs={}", texts.len(), jobs);

    let t0 = Instant::now();
    let pool = rayon::ThreadPoolBuilder::new().num_threads(jobs).build()?;
    let entries: Vec<BatchEntry> = pool.install(|| analyze_batch(&texts));

    for entry in &entries {
        if json {
            println!("{}", serde_json::to_string(entry)?);
        } else if let Some(err) = &entry.error {
            println!("[{}/{}] ERROR: {}", entry.index + 1, entries.len(), err);
        } else {
            println!(
                "[{}/{}] {} score={:.3} conf={:.3} | {}",
                entry.index + 1,
                entries.len(),
                entry.result.label,
                entry.result.score,
                entry.result.confidence,
                texts[entry.index]
            );
        }
    }

    let failed = entries.iter().filter(|e| e.error.is_some()).count();
    eprintln!(
        "Done: ok={}/{} wall={:.0}ms",
        entries.len() - failed,
        entries.len(),
        t0.elapsed().as_secs_f64() * 1000.0
    );

    Ok(())
}
