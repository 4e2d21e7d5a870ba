use std::time::Duration;

use tracing::trace;

use crate::structures::{Error, Response};

/// Downloads `url` into memory, failing when no response arrived within `timeout`
pub(crate) async fn download_file(url: &url::Url, timeout: Duration) -> Result<Response, Error> {
  let uri = url.as_str().parse::<download_async::http::Uri>()?;
  let user_agent = download_async::http::HeaderValue::from_str(&format!("chunked-installer ({})", env!("CARGO_PKG_VERSION")))?;

  let mut downloader = download_async::Downloader::new();
  downloader.use_uri(uri);
  if let Some(headers) = downloader.headers() {
    headers.append("User-Agent", user_agent);
  }
  downloader.allow_http();

  trace!("Downloading: {}", url);
  let mut buffer = vec![];
  let response = downloader.download(download_async::Body::empty(), &mut buffer);
  let parts = tokio::time::timeout(timeout, response).await??;
  Ok(Response::new(parts, buffer))
}
