/// Aborts the tasks it holds once it goes out of scope, so spawned work never outlives its caller
pub(crate) struct AbortOnDrop {
  pub(crate) handles: Vec<tokio::task::AbortHandle>,
}
