//! Parallel fork-join reduction over record chunks
//!
//! The record sequence is split into contiguous, non-overlapping chunks, one
//! worker task sums each chunk on the blocking thread pool, and the partial
//! sums are combined after every worker has finished. Addition is commutative
//! here, so the result is identical for any worker count.

use crate::error::{Error, Result};
use crate::loader::Record;
use futures::future::join_all;
use std::ops::Range;
use std::sync::Arc;
use tracing::{debug, info};

/// Plan contiguous chunk ranges covering `[0, len)` for `workers` workers.
///
/// Chunks are `ceil(len / workers)` items wide; the last chunk absorbs any
/// remainder. Chunks that would start past the end of the sequence are not
/// emitted, so fewer than `workers` ranges may be returned. A worker count of
/// zero is rejected before any planning happens.
pub fn plan_chunks(len: usize, workers: usize) -> Result<Vec<Range<usize>>> {
    if workers == 0 {
        return Err(Error::InvalidArgument(
            "worker count must be at least 1".to_string(),
        ));
    }

    if len == 0 {
        return Ok(Vec::new());
    }

    let chunk_size = len.div_ceil(workers);
    let mut chunks = Vec::with_capacity(workers);
    let mut start = 0;
    while start < len {
        let end = usize::min(start + chunk_size, len);
        chunks.push(start..end);
        start = end;
    }
    Ok(chunks)
}

/// Sum `a + b` over one chunk of records.
///
/// Wrapping arithmetic: a total past the i64 range wraps around instead of
/// panicking, matching fixed-width integer behavior.
pub fn sum_chunk(records: &[Record]) -> i64 {
    records
        .iter()
        .fold(0i64, |acc, r| acc.wrapping_add(r.a.wrapping_add(r.b)))
}

/// Reduce all records to a single total using `workers` parallel workers.
///
/// Launches one blocking task per non-empty chunk over a shared read-only
/// view of the records, waits for all of them, then sums the partial results.
/// Each launched worker contributes exactly one partial through its join
/// handle; completion order does not matter.
pub async fn reduce_total(records: Vec<Record>, workers: usize) -> Result<i64> {
    let chunks = plan_chunks(records.len(), workers)?;
    debug!(
        "Planned {} chunk(s) for {} record(s) across {} worker(s)",
        chunks.len(),
        records.len(),
        workers
    );

    let records = Arc::new(records);
    let mut handles = Vec::with_capacity(chunks.len());
    for chunk in chunks {
        let records = Arc::clone(&records);
        debug!("Dispatching worker for records {}..{}", chunk.start, chunk.end);
        handles.push(tokio::task::spawn_blocking(move || {
            sum_chunk(&records[chunk])
        }));
    }

    let mut total = 0i64;
    for joined in join_all(handles).await {
        let partial = joined.map_err(|e| Error::Internal(format!("worker task failed: {e}")))?;
        total = total.wrapping_add(partial);
    }

    info!("Reduction complete: total {}", total);
    Ok(total)
}
