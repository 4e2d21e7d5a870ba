use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info, warn};

use crate::functions::{download_chunk, is_already_downloaded};
use crate::structures::{ChunkedFile, DownloadRun, Error};

/// Produces `file` underneath the destination of `run`, chunk by chunk in manifest order.
///
/// A file that is already present with the expected size is counted as done without fetching anything.
pub(crate) async fn download_chunked_file(run: &DownloadRun, file: &ChunkedFile) -> Result<(), Error> {
  let path = file.destination(&run.destination)?;
  if is_already_downloaded(&path, file.expected_size).await {
    debug!("Skipping {}, already downloaded", &file.relative_path);
    run.progress.add_downloaded_bytes(file.expected_size);
    run.progress.increment_skipped_files();
    run.progress.increment_processed_files();
    return Ok(());
  }

  if let Some(parent) = path.parent() {
    tokio::fs::create_dir_all(parent).await?;
  }
  let mut output = OpenOptions::new().write(true).create(true).truncate(true).open(&path).await?;
  let mut buffer = vec![0_u8; run.buffer_size];
  let mut offset = 0_u64;

  // Chunks share a single output stream, they can't be downloaded concurrently
  for &chunk_id in file.chunk_ids.iter() {
    offset += download_chunk(run, &mut output, &mut buffer, chunk_id, offset).await?;
  }
  output.flush().await?;
  drop(output);

  if offset != file.expected_size {
    warn!("{} is {} bytes, however the manifest expects {} bytes", &file.relative_path, offset, file.expected_size);
  }
  info!("Downloaded {}", &file.relative_path);
  run.progress.increment_processed_files();
  Ok(())
}
