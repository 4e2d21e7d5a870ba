#[derive(Debug)]
pub enum Error {
  InvalidUri(download_async::http::uri::InvalidUri),
  InvalidUrl(url::ParseError),
  InvalidHeader(download_async::http::header::InvalidHeaderValue),
  IoError(std::io::Error),
  NotUtf8(std::string::FromUtf8Error),
  JoinError(tokio::task::JoinError),
  GateClosed(tokio::sync::AcquireError),

  /// Invalid Json, first argument describes the document, second argument is the text of the document
  InvalidJson(String, String),
  /// The manifest parsed as JSON but does not describe a build
  InvalidManifest(String),
  /// A manifest entry points outside of the destination folder
  UnsafePath(String),
  /// The catalog did not list a single build
  NoVersions(),
  /// No valid selection was made within the given amount of attempts
  InvalidSelection(usize),

  // Download related errors:
  DownloadAsyncError(download_async::Error),
  DownloadTimeout(tokio::time::error::Elapsed),
  InvalidStatus { url: String, status: u16 },
  /// The chunk could not be gunzipped, the whole chunk is fetched again
  Decompression(std::io::Error),
  OutOfRetries {
    build_id: String,
    chunk_id: u64,
    attempts: u32,
    last_error: Box<Error>,
  },
}
