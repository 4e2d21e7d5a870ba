use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::functions::download_file;
use crate::structures::{Endpoint, Error, Manifest, Response};
use crate::traits::{AsString, BuildCatalog, ChunkSource};

impl Endpoint {
  /// `base` is the root of the server, a trailing `/` is added when missing so resources resolve below it
  pub fn new(base: &str, timeout: Duration) -> Result<Self, Error> {
    let mut base = url::Url::parse(base)?;
    if !base.path().ends_with('/') {
      let path = format!("{}/", base.path());
      base.set_path(&path);
    }
    Ok(Self {
      base: Arc::new(base),
      timeout,
    })
  }

  pub fn versions_url(&self) -> Result<url::Url, Error> {
    Ok(self.base.join("versions.json")?)
  }

  pub fn manifest_url(&self, build_id: &str) -> Result<url::Url, Error> {
    Ok(self.base.join(&format!("{}/{}.manifest", build_id, build_id))?)
  }

  pub fn chunk_url(&self, build_id: &str, chunk_id: u64) -> Result<url::Url, Error> {
    Ok(self.base.join(&format!("{}/{}.chunk", build_id, chunk_id))?)
  }

  /// Downloads `url`, anything but a 2xx response is an error
  pub(crate) async fn download_resource(&self, url: url::Url) -> Result<Response, Error> {
    let response = download_file(&url, self.timeout).await?;
    if !response.status().is_success() {
      return Err(Error::InvalidStatus { url: url.to_string(), status: response.status().as_u16() });
    }
    Ok(response)
  }
}

#[async_trait]
impl BuildCatalog for Endpoint {
  #[instrument(skip(self))]
  async fn list_builds(&self) -> Result<Vec<String>, Error> {
    let text = self.download_resource(self.versions_url()?).await?.text()?;
    let versions = match json::parse(&text) {
      Ok(result) => result,
      Err(e) => return Err(Error::InvalidJson(format!("versions.json is invalid: {}", e), text))
    };
    if !versions.is_array() {
      return Err(Error::InvalidJson("versions.json should be an array".to_string(), text));
    }
    let mut builds = Vec::with_capacity(versions.len());
    for version in versions.into_inner() {
      match version.as_string_option() {
        Some(version) => builds.push(version),
        None => return Err(Error::InvalidJson(format!("versions.json should only contain strings, however got: {}", version.dump()), text)),
      }
    }
    debug!("{} builds available", builds.len());
    Ok(builds)
  }

  #[instrument(skip(self))]
  async fn fetch_manifest(&self, build_id: &str) -> Result<Manifest, Error> {
    let text = self.download_resource(self.manifest_url(build_id)?).await?.text()?;
    Manifest::parse(&text)
  }
}

#[async_trait]
impl ChunkSource for Endpoint {
  #[instrument(level = "debug", skip(self))]
  async fn fetch_chunk(&self, build_id: &str, chunk_id: u64) -> Result<Vec<u8>, Error> {
    let response = self.download_resource(self.chunk_url(build_id, chunk_id)?).await?;
    Ok(response.into_body())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn resources_resolve_below_the_base() {
    let endpoint = Endpoint::new("https://manifest.fnbuilds.services", Duration::from_secs(60)).unwrap();
    assert_eq!(endpoint.versions_url().unwrap().as_str(), "https://manifest.fnbuilds.services/versions.json");
    assert_eq!(endpoint.manifest_url("14.40").unwrap().as_str(), "https://manifest.fnbuilds.services/14.40/14.40.manifest");
    assert_eq!(endpoint.chunk_url("14.40", 1234).unwrap().as_str(), "https://manifest.fnbuilds.services/14.40/1234.chunk");
  }

  #[test]
  fn base_path_is_kept() {
    let endpoint = Endpoint::new("http://localhost:8080/mirror", Duration::from_secs(1)).unwrap();
    assert_eq!(endpoint.chunk_url("1.0", 3).unwrap().as_str(), "http://localhost:8080/mirror/1.0/3.chunk");
  }

  #[test]
  fn invalid_base_is_rejected() {
    assert!(matches!(Endpoint::new("not a url", Duration::from_secs(1)), Err(Error::InvalidUrl(_))));
  }
}
