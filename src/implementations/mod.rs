mod abort_on_drop;
mod chunked_file;
mod endpoint;
mod error;
mod manifest;
mod progress;
mod progress_line;
mod response;
mod retry_policy;
