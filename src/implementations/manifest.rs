use json::JsonValue;

use crate::structures::{ChunkedFile, Error, Manifest};
use crate::traits::AsString;

impl Manifest {
  /// Parses a `{build}.manifest` document.
  ///
  /// A missing `Name` is treated as an empty name, a missing or ill-typed `Size` or `Chunks` makes the
  /// manifest unusable.
  pub fn parse(text: &str) -> Result<Self, Error> {
    let manifest = match json::parse(text) {
      Ok(result) => result,
      Err(e) => return Err(Error::InvalidJson(format!("manifest is invalid: {}", e), text.to_string()))
    };
    Self::from_json(&manifest)
  }

  pub fn from_json(manifest: &JsonValue) -> Result<Self, Error> {
    let name = if manifest["Name"].is_null() {
      String::new()
    } else {
      manifest["Name"].as_string_option().ok_or_else(|| Error::InvalidManifest(format!("\"Name\" should be a string, however got: {}", manifest["Name"].dump())))?
    };
    let total_size = manifest["Size"].as_u64().ok_or_else(|| Error::InvalidManifest(format!("\"Size\" should be a non-negative integer, however got: {}", manifest["Size"].dump())))?;
    if !manifest["Chunks"].is_array() {
      return Err(Error::InvalidManifest(format!("\"Chunks\" should be an array, however got: {}", manifest["Chunks"].dump())));
    }
    let files = manifest["Chunks"].members().map(ChunkedFile::from_json).collect::<Result<Vec<_>, Error>>()?;
    Ok(Self {
      name,
      total_size,
      files,
    })
  }

  pub fn to_json(&self) -> JsonValue {
    let mut manifest = JsonValue::new_object();
    manifest["Name"] = self.name.as_str().into();
    manifest["Size"] = self.total_size.into();
    manifest["Chunks"] = JsonValue::Array(self.files.iter().map(ChunkedFile::to_json).collect());
    manifest
  }

  pub fn dump(&self) -> String {
    self.to_json().dump()
  }

  /// Whether the file sizes add up to the size of the build
  pub fn is_consistent(&self) -> bool {
    self.files.iter().map(|file| file.expected_size).sum::<u64>() == self.total_size
  }

  pub fn chunk_count(&self) -> usize {
    self.files.iter().map(|file| file.chunk_ids.len()).sum()
  }
}
