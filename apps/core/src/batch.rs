//! Batch classification of JSON-lines input.
//!
//! Lines are split into contiguous chunks, one per worker, and classified on
//! scoped threads that share a single [`TaskIntake`]. Results come back in
//! input order.

use std::thread;
use tracing::{debug, warn};

use crate::error::AppError;
use crate::intake::TaskIntake;
use crate::models::{ClassifiedTask, CreateTaskRequest};

/// Outcome for one input line
#[derive(Debug)]
pub struct BatchItem {
    /// 1-based line number in the input
    pub line: usize,
    pub outcome: Result<ClassifiedTask, AppError>,
}

fn classify_line(intake: &TaskIntake, raw: &str) -> Result<ClassifiedTask, AppError> {
    let request: CreateTaskRequest = serde_json::from_str(raw)?;
    intake.classify(request)
}

/// Classify every non-blank line of `input` with up to `workers` threads
pub fn classify_lines(intake: &TaskIntake, input: &str, workers: usize) -> Vec<BatchItem> {
    let lines: Vec<(usize, &str)> = input
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty())
        .map(|(i, l)| (i + 1, l))
        .collect();

    if lines.is_empty() {
        return Vec::new();
    }

    let workers = workers.clamp(1, lines.len());
    let chunk_size = lines.len().div_ceil(workers);
    debug!(
        "Classifying {} lines on {} workers ({} per chunk)",
        lines.len(),
        workers,
        chunk_size
    );

    thread::scope(|scope| {
        let handles: Vec<_> = lines
            .chunks(chunk_size)
            .map(|chunk| {
                scope.spawn(move || {
                    chunk
                        .iter()
                        .map(|&(line, raw)| BatchItem {
                            line,
                            outcome: classify_line(intake, raw),
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        handles
            .into_iter()
            .zip(lines.chunks(chunk_size))
            .flat_map(|(handle, chunk)| match handle.join() {
                Ok(items) => items,
                Err(_) => {
                    warn!("Batch worker panicked; marking {} lines as failed", chunk.len());
                    chunk
                        .iter()
                        .map(|&(line, _)| BatchItem {
                            line,
                            outcome: Err(AppError::Internal("batch worker panicked".to_string())),
                        })
                        .collect()
                }
            })
            .collect()
    })
}
