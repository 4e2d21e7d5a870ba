use std::io::Write;
use std::sync::{Arc, Mutex};

use chunked_installer::{build_id_from_label, parse_selection, Downloader, Error, Progress, ProgressLine};

const ENDPOINT_VARIABLE: &str = "CHUNKED_INSTALLER_ENDPOINT";
const MAX_SELECTION_ATTEMPTS: usize = 5;

#[tokio::main]
async fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "warn".into()),
    )
    .with_writer(std::io::stderr)
    .init();

  if let Err(e) = run().await {
    eprintln!("\n{}", e);
    std::process::exit(1);
  }
}

async fn run() -> Result<(), Error> {
  let mut builder = Downloader::builder();
  if let Ok(endpoint) = std::env::var(ENDPOINT_VARIABLE) {
    builder.set_endpoint(endpoint);
  }
  let downloader = builder.build()?;

  let versions = downloader.list_builds().await?;
  if versions.is_empty() {
    return Err(Error::NoVersions());
  }
  println!("\nAvailable manifests:");
  for (index, version) in versions.iter().enumerate() {
    println!(" * [{}] {}", index, version);
  }
  println!("\nTotal: {}", versions.len());

  let index = select_version(versions.len())?;
  let build_id = build_id_from_label(&versions[index]);
  let manifest = downloader.fetch_manifest(build_id).await?;

  let destination = prompt("Please enter a game folder location: ")?;
  println!();

  let line = Arc::new(Mutex::new(ProgressLine::new()));
  let callback = Box::new(move |progress: &Progress| {
    if let Ok(mut line) = line.lock() {
      print!("{}", line.render(progress));
      let _ = std::io::stdout().flush();
    }
  });
  downloader.download(manifest, build_id, destination.trim(), Some(callback)).await?;

  println!("\n\nFinished Downloading.");
  Ok(())
}

/// Asks for an index until a valid one is typed, giving up after `MAX_SELECTION_ATTEMPTS` tries
fn select_version(available: usize) -> Result<usize, Error> {
  for _ in 0..MAX_SELECTION_ATTEMPTS {
    let input = prompt("Please enter the number before the Build Version to select it: ")?;
    match parse_selection(&input, available) {
      Some(index) => return Ok(index),
      None => println!("Please enter a number between 0 and {}.", available - 1),
    }
  }
  Err(Error::InvalidSelection(MAX_SELECTION_ATTEMPTS))
}

fn prompt(question: &str) -> Result<String, Error> {
  print!("{}", question);
  std::io::stdout().flush()?;
  let mut input = String::new();
  std::io::stdin().read_line(&mut input)?;
  Ok(input)
}
