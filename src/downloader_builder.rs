use std::sync::Arc;
use std::time::Duration;

use crate::downloader::Downloader;
use crate::structures::{Endpoint, Error, RetryPolicy};
use crate::traits::{BuildCatalog, ChunkSource};

pub const DEFAULT_ENDPOINT: &str = "https://manifest.fnbuilds.services";

pub struct DownloaderBuilder {
    pub(crate) endpoint: String,
    pub(crate) concurrency: usize,
    pub(crate) buffer_size: usize,
    pub(crate) fetch_timeout: Duration,
    pub(crate) retry_policy: RetryPolicy,
    pub(crate) chunk_source: Option<Arc<dyn ChunkSource>>,
    pub(crate) catalog: Option<Arc<dyn BuildCatalog>>,
}

impl Default for DownloaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DownloaderBuilder {
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            concurrency: 12,
            buffer_size: 16 * 1024 * 1024,
            fetch_timeout: Duration::from_secs(60),
            retry_policy: RetryPolicy::default(),
            chunk_source: None,
            catalog: None,
        }
    }

    pub fn set_endpoint(&mut self, endpoint: String) -> &mut Self {
        self.endpoint = endpoint;
        self
    }

    /// Amount of files downloaded at the same time
    pub fn set_concurrency(&mut self, concurrency: usize) -> &mut Self {
        self.concurrency = concurrency.max(1);
        self
    }

    /// Size of the buffer each file decompresses its chunks through
    pub fn set_buffer_size(&mut self, buffer_size: usize) -> &mut Self {
        self.buffer_size = buffer_size.max(1);
        self
    }

    pub fn set_fetch_timeout(&mut self, fetch_timeout: Duration) -> &mut Self {
        self.fetch_timeout = fetch_timeout;
        self
    }

    pub fn set_retry_policy(&mut self, retry_policy: RetryPolicy) -> &mut Self {
        self.retry_policy = retry_policy;
        self
    }

    /// Fetch chunks from `chunk_source` instead of the endpoint
    pub fn set_chunk_source(&mut self, chunk_source: Arc<dyn ChunkSource>) -> &mut Self {
        self.chunk_source = Some(chunk_source);
        self
    }

    /// List builds and fetch manifests from `catalog` instead of the endpoint
    pub fn set_catalog(&mut self, catalog: Arc<dyn BuildCatalog>) -> &mut Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn build(&self) -> Result<Downloader, Error> {
        let endpoint = Endpoint::new(&self.endpoint, self.fetch_timeout)?;
        Ok(Downloader {
            catalog: self.catalog.clone().unwrap_or_else(|| Arc::new(endpoint.clone())),
            chunk_source: self.chunk_source.clone().unwrap_or_else(|| Arc::new(endpoint.clone())),
            endpoint,
            concurrency: self.concurrency,
            buffer_size: self.buffer_size,
            retry_policy: self.retry_policy,
        })
    }
}
