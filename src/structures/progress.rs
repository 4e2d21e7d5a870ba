use std::sync::atomic::AtomicU64;
use std::sync::Arc;

/// Shared counters of a download run, cloning is cheap and every clone observes the same run
#[derive(Debug, Clone)]
pub struct Progress {
  /// Written .. out of .. bytes
  pub(crate) downloaded_bytes: Arc<(AtomicU64, AtomicU64)>,
  /// Finished .. out of .. files
  pub(crate) processed_files: Arc<(AtomicU64, AtomicU64)>,
  /// Files that were already present with the expected size
  pub(crate) skipped_files: Arc<AtomicU64>,
}
