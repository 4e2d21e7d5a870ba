use crate::structures::Response;

impl Response {
  pub fn new(parts: download_async::http::response::Parts, body: Vec<u8>) -> Self {
    Self {
      parts,
      body
    }
  }

  pub fn status(&self) -> download_async::http::StatusCode {
    self.parts.status
  }

  pub fn text(self) -> Result<String, std::string::FromUtf8Error> {
    String::from_utf8(self.body)
  }

  pub fn into_body(self) -> Vec<u8> {
    self.body
  }
}

impl AsRef<[u8]> for Response {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        self.body.as_ref()
    }
}
