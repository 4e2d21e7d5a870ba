use std::time::Duration;

/// How often, and how patiently, a failing chunk is fetched again
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
  /// `None` keeps retrying forever
  pub max_attempts: Option<u32>,
  pub base_delay: Duration,
  pub max_delay: Duration,
}
