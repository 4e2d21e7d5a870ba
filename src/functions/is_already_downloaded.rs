use std::path::Path;

/// A file counts as downloaded when a regular file with exactly the expected size exists at `path`.
///
/// Only the size is compared, the contents are never hashed.
pub(crate) async fn is_already_downloaded(path: &Path, expected_size: u64) -> bool {
  match tokio::fs::metadata(path).await {
    Ok(metadata) => metadata.is_file() && metadata.len() == expected_size,
    Err(_e) => false,
  }
}
