//Modules
mod downloader;
mod downloader_builder;
mod functions;
mod implementations;
pub mod structures;
pub mod traits;

pub use crate::downloader::{Downloader, ProgressCallback};
pub use crate::downloader_builder::{DownloaderBuilder, DEFAULT_ENDPOINT};
pub use crate::functions::{build_id_from_label, human_readable_bytesize, parse_selection};
pub use crate::structures::{ChunkedFile, Endpoint, Error, Manifest, Progress, ProgressLine, RetryPolicy};
pub use crate::traits::{BuildCatalog, ChunkSource};
