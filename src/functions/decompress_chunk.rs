use std::io::{ErrorKind, Read};

use flate2::read::GzDecoder;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::structures::Error;

/// Gunzips `compressed` into `output`, one `buffer` at a time.
///
/// After every write `on_written` receives the amount of decompressed bytes written by this call so far.
/// Returns the total amount of bytes written. A corrupt stream yields `Error::Decompression`, which may
/// leave a partial chunk in `output`; failing writes yield `Error::IoError`.
pub(crate) async fn decompress_chunk<W, F>(compressed: &[u8], output: &mut W, buffer: &mut [u8], mut on_written: F) -> Result<u64, Error>
where
  W: AsyncWrite + Unpin,
  F: FnMut(u64),
{
  let mut decoder = GzDecoder::new(compressed);
  let mut written = 0_u64;
  loop {
    let read = match decoder.read(buffer) {
      Ok(0) => break,
      Ok(read) => read,
      Err(ref e) if e.kind() == ErrorKind::Interrupted => continue,
      Err(e) => return Err(Error::Decompression(e)),
    };
    output.write_all(&buffer[..read]).await?;
    written += read as u64;
    on_written(written);
  }
  Ok(written)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::io::Write;
  use flate2::write::GzEncoder;
  use flate2::Compression;

  fn gzip(data: &[u8]) -> Vec<u8> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data).unwrap();
    encoder.finish().unwrap()
  }

  #[tokio::test]
  async fn streams_through_a_small_buffer() {
    let data : Vec<u8> = (0..10_000_u32).map(|i| (i % 251) as u8).collect();
    let compressed = gzip(&data);
    let mut output = Vec::new();
    let mut buffer = vec![0_u8; 64];
    let mut reports = vec![];

    let written = decompress_chunk(&compressed, &mut output, &mut buffer, |written| reports.push(written)).await.unwrap();

    assert_eq!(written, 10_000);
    assert_eq!(output, data);
    assert!(reports.len() > 1);
    assert!(reports.windows(2).all(|pair| pair[0] < pair[1]));
    assert_eq!(reports.last(), Some(&10_000));
  }

  #[tokio::test]
  async fn decompression_is_deterministic() {
    let compressed = gzip(b"the same bytes every time");
    let mut first = Vec::new();
    let mut second = Vec::new();
    let mut buffer = vec![0_u8; 8];
    decompress_chunk(&compressed, &mut first, &mut buffer, |_| {}).await.unwrap();
    decompress_chunk(&compressed, &mut second, &mut buffer, |_| {}).await.unwrap();
    assert_eq!(first, second);
  }

  #[tokio::test]
  async fn corrupt_trailer_is_a_decompression_error() {
    let mut compressed = gzip(&[7_u8; 1000]);
    let crc = compressed.len() - 8;
    compressed[crc] ^= 0xFF;
    let mut output = Vec::new();
    let mut buffer = vec![0_u8; 4096];
    let result = decompress_chunk(&compressed, &mut output, &mut buffer, |_| {}).await;
    assert!(matches!(result, Err(Error::Decompression(_))));
  }

  #[tokio::test]
  async fn garbage_is_a_decompression_error() {
    let mut output = Vec::new();
    let mut buffer = vec![0_u8; 16];
    let result = decompress_chunk(b"<html>503</html>", &mut output, &mut buffer, |_| {}).await;
    assert!(matches!(result, Err(Error::Decompression(_))));
    assert!(output.is_empty());
  }
}
