use tokio::task::AbortHandle;

use crate::structures::AbortOnDrop;

impl AbortOnDrop {
  pub(crate) fn new(handles: Vec<AbortHandle>) -> Self {
    Self {
      handles,
    }
  }

  pub(crate) fn push(&mut self, handle: AbortHandle) {
    self.handles.push(handle);
  }
}

impl Drop for AbortOnDrop {
  fn drop(&mut self) {
    for handle in self.handles.iter() {
      handle.abort();
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::time::Duration;

  #[tokio::test]
  async fn dropping_aborts_pending_tasks() {
    let pending = tokio::spawn(tokio::time::sleep(Duration::from_secs(60)));
    let finished = tokio::spawn(async { 7 });
    let finished_handle = finished.abort_handle();
    assert_eq!(finished.await.unwrap(), 7);

    let mut guard = AbortOnDrop::new(vec![pending.abort_handle()]);
    guard.push(finished_handle);
    drop(guard);

    assert!(pending.await.unwrap_err().is_cancelled());
  }
}
