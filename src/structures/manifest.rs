use crate::structures::ChunkedFile;

/// Description of a single build, as served next to its chunks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
  /// Human readable name of the build
  pub name: String,
  /// Sum of the decompressed sizes of every file
  pub total_size: u64,
  pub files: Vec<ChunkedFile>,
}
