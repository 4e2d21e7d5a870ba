use std::collections::HashSet;
use std::sync::Arc;

use futures::stream::FuturesUnordered;
use futures::StreamExt;
use tokio::sync::Semaphore;
use tokio::task::JoinHandle;
use tracing::{error, info};

use crate::functions::download_chunked_file;
use crate::structures::{AbortOnDrop, ChunkedFile, DownloadRun, Error};

/// Downloads every file of a build, at most `concurrency` files at a time.
///
/// Returns once every file is done. The first file that fails aborts all other files and its error is
/// returned, as does dropping the returned future. Two entries resolving to the same destination are
/// rejected before anything is written.
pub(crate) async fn download_build(run: Arc<DownloadRun>, files: Vec<ChunkedFile>, concurrency: usize) -> Result<(), Error> {
  let mut destinations = HashSet::with_capacity(files.len());
  for file in files.iter() {
    if !destinations.insert(file.destination(&run.destination)?) {
      return Err(Error::InvalidManifest(format!("{} is listed more than once", &file.relative_path)));
    }
  }

  tokio::fs::create_dir_all(&run.destination).await?;
  info!("Downloading {} files of build {} into {:?}", files.len(), &run.build_id, &run.destination);

  let gate = Arc::new(Semaphore::new(concurrency.max(1)));
  let mut handlers : FuturesUnordered<JoinHandle<Result<(), Error>>> = FuturesUnordered::new();
  let mut guard = AbortOnDrop::new(Vec::with_capacity(files.len()));
  let handle = tokio::runtime::Handle::current();
  for file in files {
    let run = run.clone();
    let gate = gate.clone();
    let handler = handle.spawn(async move {
      let _permit = gate.acquire_owned().await?;
      download_chunked_file(&run, &file).await
    });
    guard.push(handler.abort_handle());
    handlers.push(handler);
  }

  while let Some(joined) = handlers.next().await {
    let result = match joined {
      Ok(result) => result,
      Err(e) => Err(Error::from(e)),
    };
    if let Err(e) = result {
      error!("Aborting download of build {}: {}", &run.build_id, e);
      drop(guard);
      return Err(e);
    }
  }
  info!("Finished downloading build {}", &run.build_id);
  Ok(())
}
