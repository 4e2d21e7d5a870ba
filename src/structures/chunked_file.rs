/// A file of a build, stored remotely as a sequence of gzip compressed chunks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkedFile {
  /// Path relative to the destination folder, may use `\` as separator
  pub relative_path: String,
  /// Size of the file once all chunks are decompressed
  pub expected_size: u64,
  /// Chunks in the order their decompressed bytes make up the file
  pub chunk_ids: Vec<u64>,
}
