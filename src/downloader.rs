use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::downloader_builder::DownloaderBuilder;
use crate::functions::download_build;
use crate::structures::{AbortOnDrop, DownloadRun, Endpoint, Error, Manifest, Progress, RetryPolicy};
use crate::traits::{BuildCatalog, ChunkSource};

/// Invoked with the progress of a running download every 250 milliseconds, and once more when it ends
pub type ProgressCallback = Box<dyn Fn(&Progress) + Send + Sync>;

pub struct Downloader {
  pub(crate) endpoint: Endpoint,
  pub(crate) catalog: Arc<dyn BuildCatalog>,
  pub(crate) chunk_source: Arc<dyn ChunkSource>,
  pub(crate) concurrency: usize,
  pub(crate) buffer_size: usize,
  pub(crate) retry_policy: RetryPolicy,
}

impl Downloader {
  pub fn builder() -> DownloaderBuilder {
    DownloaderBuilder::new()
  }

  pub fn endpoint(&self) -> &Endpoint {
    &self.endpoint
  }

  pub fn concurrency(&self) -> usize {
    self.concurrency
  }

  pub fn buffer_size(&self) -> usize {
    self.buffer_size
  }

  pub fn retry_policy(&self) -> RetryPolicy {
    self.retry_policy
  }

  /// Version labels of every build the server offers
  pub async fn list_builds(&self) -> Result<Vec<String>, Error> {
    self.catalog.list_builds().await
  }

  pub async fn fetch_manifest(&self, build_id: &str) -> Result<Manifest, Error> {
    self.catalog.fetch_manifest(build_id).await
  }

  /// Downloads every file of `manifest` into `destination`, creating it when needed.
  ///
  /// Files which already exist with the expected size are kept as is. Returns the final progress of the run.
  pub async fn download(&self, manifest: Manifest, build_id: &str, destination: impl AsRef<Path>, progress_callback: Option<ProgressCallback>) -> Result<Progress, Error> {
    if !manifest.is_consistent() {
      warn!("File sizes of {} don't add up to its size of {} bytes", &manifest.name, manifest.total_size);
    }
    info!("Downloading {} ({} files, {} chunks)", &manifest.name, manifest.files.len(), manifest.chunk_count());

    let progress = Progress::new(manifest.total_size, manifest.files.len() as u64);
    let run = Arc::new(DownloadRun {
      destination: destination.as_ref().to_path_buf(),
      build_id: build_id.to_string(),
      progress: progress.clone(),
      source: self.chunk_source.clone(),
      retry_policy: self.retry_policy,
      buffer_size: self.buffer_size,
    });

    // Dropping the guard stops the ticker, also when this future is dropped before the run ends
    let ticker = progress_callback.map(|callback| {
      let callback = Arc::new(callback);
      let repeated_callback = callback.clone();
      let repeated_progress = progress.clone();
      let handler = tokio::runtime::Handle::current().spawn(async move {
        loop {
          repeated_callback(&repeated_progress);
          tokio::time::sleep(Duration::from_millis(250)).await;
        }
      });
      (callback, AbortOnDrop::new(vec![handler.abort_handle()]))
    });

    let result = download_build(run, manifest.files, self.concurrency).await;

    if let Some((callback, guard)) = ticker {
      drop(guard);
      callback(&progress);
    }
    result.map(|_| progress)
  }
}
