pub mod error;
pub use error::Error;

pub mod manifest;
pub use manifest::Manifest;

pub mod chunked_file;
pub use chunked_file::ChunkedFile;

pub mod progress;
pub use progress::Progress;

pub mod progress_line;
pub use progress_line::ProgressLine;

pub mod retry_policy;
pub use retry_policy::RetryPolicy;

pub mod response;
pub use response::Response;

pub mod endpoint;
pub use endpoint::Endpoint;

pub(crate) mod download_run;
pub(crate) use download_run::DownloadRun;

pub(crate) mod abort_on_drop;
pub(crate) use abort_on_drop::AbortOnDrop;
