use crate::structures::Error;

impl Error {
  /// Whether a chunk attempt that failed with this error may be attempted again.
  ///
  /// Network, status, timeout and decompression failures are transient as far as a chunk is concerned,
  /// anything touching the filesystem or the manifest is not.
  pub fn is_retryable(&self) -> bool {
    match self {
      Self::DownloadAsyncError(_) |
      Self::DownloadTimeout(_) |
      Self::InvalidStatus { .. } |
      Self::Decompression(_) => true,
      _ => false,
    }
  }
}

impl std::error::Error for Error {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      Self::InvalidUri(e) => Some(e),
      Self::InvalidUrl(e) => Some(e),
      Self::InvalidHeader(e) => Some(e),
      Self::IoError(e) => Some(e),
      Self::NotUtf8(e) => Some(e),
      Self::JoinError(e) => Some(e),
      Self::GateClosed(e) => Some(e),
      Self::DownloadAsyncError(e) => Some(e),
      Self::DownloadTimeout(e) => Some(e),
      Self::Decompression(e) => Some(e),
      Self::OutOfRetries { last_error, .. } => Some(last_error.as_ref()),
      _ => None,
    }
  }
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
    match self {
      Self::InvalidUri(e) => write!(f, "invalid uri: {}", e),
      Self::InvalidUrl(e) => write!(f, "invalid url: {}", e),
      Self::InvalidHeader(e) => write!(f, "invalid header value: {}", e),
      Self::IoError(e) => write!(f, "io error: {}", e),
      Self::NotUtf8(e) => write!(f, "response is not utf-8: {}", e),
      Self::JoinError(e) => write!(f, "task failed: {}", e),
      Self::GateClosed(e) => write!(f, "concurrency gate closed: {}", e),
      Self::InvalidJson(description, _) => write!(f, "{}", description),
      Self::InvalidManifest(description) => write!(f, "invalid manifest: {}", description),
      Self::UnsafePath(path) => write!(f, "refusing to write outside of the destination folder: {}", path),
      Self::NoVersions() => write!(f, "the server did not list any builds"),
      Self::InvalidSelection(attempts) => write!(f, "no valid build selected after {} attempts", attempts),
      Self::DownloadAsyncError(e) => write!(f, "download failed: {}", e),
      Self::DownloadTimeout(e) => write!(f, "download timed out: {}", e),
      Self::InvalidStatus { url, status } => write!(f, "{} responded with status {}", url, status),
      Self::Decompression(e) => write!(f, "could not decompress chunk: {}", e),
      Self::OutOfRetries { build_id, chunk_id, attempts, last_error } => write!(f, "chunk {} of build {} failed {} times, last error: {}", chunk_id, build_id, attempts, last_error),
    }
  }
}

impl From<download_async::http::uri::InvalidUri> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: download_async::http::uri::InvalidUri) -> Self {
    log_error(&error);
    Self::InvalidUri(error)
  }
}

impl From<url::ParseError> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: url::ParseError) -> Self {
    log_error(&error);
    Self::InvalidUrl(error)
  }
}

impl From<download_async::http::header::InvalidHeaderValue> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: download_async::http::header::InvalidHeaderValue) -> Self {
    log_error(&error);
    Self::InvalidHeader(error)
  }
}

impl From<download_async::Error> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: download_async::Error) -> Self {
    log_error(&error);
    Self::DownloadAsyncError(error)
  }
}

impl From<tokio::time::error::Elapsed> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: tokio::time::error::Elapsed) -> Self {
    log_error(&error);
    Self::DownloadTimeout(error)
  }
}

impl From<tokio::task::JoinError> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: tokio::task::JoinError) -> Self {
    log_error(&error);
    Self::JoinError(error)
  }
}

impl From<tokio::sync::AcquireError> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: tokio::sync::AcquireError) -> Self {
    log_error(&error);
    Self::GateClosed(error)
  }
}

impl From<std::io::Error> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: std::io::Error) -> Self {
    log_error(&error);
    Self::IoError(error)
  }
}

impl From<std::string::FromUtf8Error> for Error {
  #[track_caller]
  #[inline(always)]
  fn from(error: std::string::FromUtf8Error) -> Self {
    log_error(&error);
    Self::NotUtf8(error)
  }
}

#[track_caller]
fn log_error(error: &(impl std::error::Error + ?Sized)) {
  let location = core::panic::Location::caller();
  tracing::error!("{}:{}: {:?}", location.file(), location.line(), error);
}
