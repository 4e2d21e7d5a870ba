use std::sync::Arc;
use std::time::Duration;

/// The content-delivery server hosting the catalog, the manifests and the chunks
#[derive(Debug, Clone)]
pub struct Endpoint {
  pub base: Arc<url::Url>,
  pub timeout: Duration,
}
