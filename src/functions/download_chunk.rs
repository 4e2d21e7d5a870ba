use std::io::SeekFrom;

use tokio::fs::File;
use tokio::io::AsyncSeekExt;
use tracing::{trace, warn};

use crate::functions::decompress_chunk;
use crate::structures::{DownloadRun, Error};

/// Fetches chunk `chunk_id` and appends its decompressed bytes to `output` at `offset`.
///
/// A failed attempt is rolled back by truncating `output` to `offset` before the chunk is fetched again, so
/// the file never contains bytes of an attempt that didn't finish. Progress is only advanced past the
/// largest amount of bytes an earlier attempt of this chunk already reported.
pub(crate) async fn download_chunk(run: &DownloadRun, output: &mut File, buffer: &mut [u8], chunk_id: u64, offset: u64) -> Result<u64, Error> {
  let mut reported = 0_u64;
  let mut failed_attempts = 0_u32;
  loop {
    let attempt = match run.source.fetch_chunk(&run.build_id, chunk_id).await {
      Ok(compressed) => {
        trace!("Fetched chunk {} ({} bytes compressed)", chunk_id, compressed.len());
        decompress_chunk(&compressed, output, buffer, |written| {
          if written > reported {
            run.progress.add_downloaded_bytes(written - reported);
            reported = written;
          }
        }).await
      },
      Err(e) => Err(e),
    };

    let error = match attempt {
      Ok(written) => return Ok(written),
      Err(e) if !e.is_retryable() => return Err(e),
      Err(e) => e,
    };

    output.set_len(offset).await?;
    output.seek(SeekFrom::Start(offset)).await?;

    failed_attempts += 1;
    if !run.retry_policy.allows_another_attempt(failed_attempts) {
      return Err(Error::OutOfRetries {
        build_id: run.build_id.clone(),
        chunk_id,
        attempts: failed_attempts,
        last_error: Box::new(error),
      });
    }
    let delay = run.retry_policy.delay_for(failed_attempts);
    warn!("Chunk {} failed (attempt {}), retrying in {:?}: {}", chunk_id, failed_attempts, delay, error);
    if delay.is_zero() {
      tokio::task::yield_now().await;
    } else {
      tokio::time::sleep(delay).await;
    }
  }
}
