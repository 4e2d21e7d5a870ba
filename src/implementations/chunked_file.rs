use std::path::{Path, PathBuf};

use json::JsonValue;

use crate::structures::{ChunkedFile, Error};
use crate::traits::AsString;

impl ChunkedFile {
  pub fn from_json(entry: &JsonValue) -> Result<Self, Error> {
    let relative_path = entry["File"].as_string_option().ok_or_else(|| Error::InvalidManifest(format!("\"File\" should be a string, however got: {}", entry["File"].dump())))?;
    let expected_size = entry["FileSize"].as_u64().ok_or_else(|| Error::InvalidManifest(format!("\"FileSize\" of {} should be a non-negative integer, however got: {}", &relative_path, entry["FileSize"].dump())))?;
    if !entry["ChunksIds"].is_array() {
      return Err(Error::InvalidManifest(format!("\"ChunksIds\" of {} should be an array, however got: {}", &relative_path, entry["ChunksIds"].dump())));
    }
    let chunk_ids = entry["ChunksIds"].members()
      .map(|chunk_id| chunk_id.as_u64().ok_or_else(|| Error::InvalidManifest(format!("chunk id of {} should be a non-negative integer, however got: {}", &relative_path, chunk_id.dump()))))
      .collect::<Result<Vec<u64>, Error>>()?;
    Ok(Self {
      relative_path,
      expected_size,
      chunk_ids,
    })
  }

  pub fn to_json(&self) -> JsonValue {
    let mut entry = JsonValue::new_object();
    entry["File"] = self.relative_path.as_str().into();
    entry["FileSize"] = self.expected_size.into();
    entry["ChunksIds"] = JsonValue::Array(self.chunk_ids.iter().map(|chunk_id| (*chunk_id).into()).collect());
    entry
  }

  /// Resolves the location of this file underneath `root`.
  ///
  /// Both `/` and `\` separate directories. Absolute paths, components containing `:` (drive prefixes,
  /// drive relative paths and alternate data streams) and `..` components which would leave `root` are
  /// rejected.
  pub fn destination(&self, root: &Path) -> Result<PathBuf, Error> {
    let unsafe_path = || Error::UnsafePath(self.relative_path.clone());
    if self.relative_path.starts_with('/') || self.relative_path.starts_with('\\') {
      return Err(unsafe_path());
    }
    let mut destination = root.to_path_buf();
    let mut depth = 0_usize;
    for component in self.relative_path.split(|c| c == '/' || c == '\\') {
      match component {
        "" | "." => {},
        ".." => {
          if depth == 0 {
            return Err(unsafe_path());
          }
          destination.pop();
          depth -= 1;
        },
        component => {
          if component.contains(':') {
            return Err(unsafe_path());
          }
          destination.push(component);
          depth += 1;
        }
      }
    }
    // A path that resolves to root itself can't be written as a file
    if depth == 0 {
      return Err(unsafe_path());
    }
    Ok(destination)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn file(relative_path: &str) -> ChunkedFile {
    ChunkedFile {
      relative_path: relative_path.to_string(),
      expected_size: 0,
      chunk_ids: vec![],
    }
  }

  #[test]
  fn backslashes_separate_directories() {
    let root = Path::new("/games/build");
    let destination = file("FortniteGame\\Content\\Paks\\pakchunk0.pak").destination(root).unwrap();
    assert_eq!(destination, root.join("FortniteGame").join("Content").join("Paks").join("pakchunk0.pak"));
  }

  #[test]
  fn parent_components_inside_root_are_allowed() {
    let root = Path::new("/games/build");
    let destination = file("a/../b/./c.bin").destination(root).unwrap();
    assert_eq!(destination, root.join("b").join("c.bin"));
  }

  #[test]
  fn escaping_root_is_rejected() {
    let root = Path::new("/games/build");
    assert!(matches!(file("../outside.bin").destination(root), Err(Error::UnsafePath(_))));
    assert!(matches!(file("a/../../outside.bin").destination(root), Err(Error::UnsafePath(_))));
    assert!(matches!(file("/etc/passwd").destination(root), Err(Error::UnsafePath(_))));
    assert!(matches!(file("\\Windows\\win.ini").destination(root), Err(Error::UnsafePath(_))));
    assert!(matches!(file("C:\\Windows\\win.ini").destination(root), Err(Error::UnsafePath(_))));
    assert!(matches!(file("a/..").destination(root), Err(Error::UnsafePath(_))));
    assert!(matches!(file("C:evil.dll").destination(root), Err(Error::UnsafePath(_))));
    assert!(matches!(file("C:..\\outside.bin").destination(root), Err(Error::UnsafePath(_))));
    assert!(matches!(file("Binaries\\D:\\outside.bin").destination(root), Err(Error::UnsafePath(_))));
    assert!(matches!(file("").destination(root), Err(Error::UnsafePath(_))));
  }

  #[test]
  fn rejects_bad_chunk_ids() {
    let entry = json::parse(r#"{"File": "a.bin", "FileSize": 1, "ChunksIds": [1, "two"]}"#).unwrap();
    assert!(matches!(ChunkedFile::from_json(&entry), Err(Error::InvalidManifest(_))));
    let entry = json::parse(r#"{"File": "a.bin", "FileSize": 1}"#).unwrap();
    assert!(matches!(ChunkedFile::from_json(&entry), Err(Error::InvalidManifest(_))));
  }
}
