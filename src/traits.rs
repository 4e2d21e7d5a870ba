use async_trait::async_trait;

use crate::structures::{Error, Manifest};

pub trait AsString {
  fn as_string_option(&self) -> Option<String>;
  fn into_inner(self) -> Vec<json::JsonValue>;
}

impl AsString for json::JsonValue {
  fn as_string_option(&self) -> Option<String> {
    match *self {
      json::JsonValue::Short(ref value)  => Some(value.to_string()),
      json::JsonValue::String(ref value) => Some(value.to_string()),
      _                                  => None
    }
  }

  fn into_inner(self) -> Vec<json::JsonValue> {
    match self {
      json::JsonValue::Array(vec) => {
        vec
      },
      _ => vec![]
    }
  }
}

/// Something that hands out the compressed bytes of a chunk.
///
/// The HTTP `Endpoint` is the production implementation, any other transport (or a test double) can be
/// plugged into `DownloaderBuilder::set_chunk_source`.
#[async_trait]
pub trait ChunkSource: Send + Sync {
  /// Fetch the gzip compressed payload of chunk `chunk_id` of build `build_id`.
  async fn fetch_chunk(&self, build_id: &str, chunk_id: u64) -> Result<Vec<u8>, Error>;
}

/// The list of downloadable builds and their manifests
#[async_trait]
pub trait BuildCatalog: Send + Sync {
  async fn list_builds(&self) -> Result<Vec<String>, Error>;
  async fn fetch_manifest(&self, build_id: &str) -> Result<Manifest, Error>;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn strings_are_extracted() {
    let parsed = json::parse(r#"{"short": "a", "long": "a rather long string that does not fit inline", "number": 1}"#).unwrap();
    assert_eq!(parsed["short"].as_string_option(), Some("a".to_string()));
    assert_eq!(parsed["long"].as_string_option(), Some("a rather long string that does not fit inline".to_string()));
    assert_eq!(parsed["number"].as_string_option(), None);
    assert_eq!(parsed["missing"].as_string_option(), None);
  }

  #[test]
  fn into_inner_only_unwraps_arrays() {
    let parsed = json::parse(r#"[1, 2, 3]"#).unwrap();
    assert_eq!(parsed.into_inner().len(), 3);
    let parsed = json::parse(r#"{"a": 1}"#).unwrap();
    assert!(parsed.into_inner().is_empty());
  }
}
