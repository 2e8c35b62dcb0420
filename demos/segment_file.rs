//! Segment a Chapter File
//!
//! Reads a plain-text chapter and prints the passages it would import as.
//!
//! ```bash
//! cargo run --example segment_file -- chapter.txt [min] [max]
//! RUST_LOG=quire=debug cargo run --example segment_file -- chapter.txt
//! ```

use std::process::ExitCode;

use quire::{normalize_bytes, PassageBounds, PassageSegmenter, Segmenter};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: segment_file <chapter.txt> [min] [max]");
        return ExitCode::FAILURE;
    };

    let min = args.next().and_then(|s| s.parse().ok()).unwrap_or(quire::MIN_LENGTH);
    let max = args.next().and_then(|s| s.parse().ok()).unwrap_or(quire::MAX_LENGTH);

    let bounds = match PassageBounds::new(min, max) {
        Ok(bounds) => bounds,
        Err(e) => {
            tracing::error!(error = %e, "invalid bounds");
            return ExitCode::FAILURE;
        }
    };

    let bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!(path = %path, error = %e, "failed to read chapter");
            return ExitCode::FAILURE;
        }
    };

    let text = match normalize_bytes(&bytes) {
        Ok(text) => text,
        Err(e) => {
            tracing::error!(path = %path, error = %e, "failed to decode chapter");
            return ExitCode::FAILURE;
        }
    };

    let passages = PassageSegmenter::new(bounds).segment(&text);
    if passages.is_empty() {
        tracing::warn!(path = %path, "nothing to import");
        return ExitCode::SUCCESS;
    }

    tracing::info!(path = %path, passages = passages.len(), "segmented chapter");
    for passage in &passages {
        println!("--- {passage}");
        println!("{}\n", passage.text);
    }

    ExitCode::SUCCESS
}
