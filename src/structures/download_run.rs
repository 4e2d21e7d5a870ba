use std::path::PathBuf;
use std::sync::Arc;

use crate::structures::{Progress, RetryPolicy};
use crate::traits::ChunkSource;

/// State shared by every file task of a single download, lives only as long as the run
pub(crate) struct DownloadRun {
  pub destination: PathBuf,
  pub build_id: String,
  pub progress: Progress,
  pub source: Arc<dyn ChunkSource>,
  pub retry_policy: RetryPolicy,
  pub buffer_size: usize,
}
