use std::time::Duration;

use crate::structures::RetryPolicy;

impl Default for RetryPolicy {
  fn default() -> Self {
    Self {
      max_attempts: Some(10),
      base_delay: Duration::from_millis(250),
      max_delay: Duration::from_secs(30),
    }
  }
}

impl RetryPolicy {
  /// Give up after `max_attempts` failed attempts, waiting exponentially longer between attempts
  pub fn bounded(max_attempts: u32, base_delay: Duration, max_delay: Duration) -> Self {
    Self {
      max_attempts: Some(max_attempts.max(1)),
      base_delay,
      max_delay,
    }
  }

  /// Retry immediately and forever
  pub fn unbounded() -> Self {
    Self {
      max_attempts: None,
      base_delay: Duration::ZERO,
      max_delay: Duration::ZERO,
    }
  }

  /// Delay before the next attempt, after `failed_attempts` attempts have failed: `base * 2^(failed - 1)`, capped at `max_delay`
  pub fn delay_for(&self, failed_attempts: u32) -> Duration {
    let multiplier = 2_u32.saturating_pow(failed_attempts.saturating_sub(1));
    self.base_delay.saturating_mul(multiplier).min(self.max_delay)
  }

  pub fn allows_another_attempt(&self, failed_attempts: u32) -> bool {
    match self.max_attempts {
      Some(max_attempts) => failed_attempts < max_attempts,
      None => true,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn delay_grows_exponentially_up_to_max() {
    let policy = RetryPolicy::bounded(10, Duration::from_millis(100), Duration::from_millis(500));
    assert_eq!(policy.delay_for(1), Duration::from_millis(100));
    assert_eq!(policy.delay_for(2), Duration::from_millis(200));
    assert_eq!(policy.delay_for(3), Duration::from_millis(400));
    assert_eq!(policy.delay_for(4), Duration::from_millis(500));
    assert_eq!(policy.delay_for(40), Duration::from_millis(500));
  }

  #[test]
  fn bounded_policy_runs_out() {
    let policy = RetryPolicy::bounded(3, Duration::ZERO, Duration::ZERO);
    assert!(policy.allows_another_attempt(2));
    assert!(!policy.allows_another_attempt(3));
    assert_eq!(RetryPolicy::bounded(0, Duration::ZERO, Duration::ZERO).max_attempts, Some(1));
  }

  #[test]
  fn unbounded_policy_never_waits_nor_gives_up() {
    let policy = RetryPolicy::unbounded();
    assert!(policy.allows_another_attempt(u32::MAX));
    assert_eq!(policy.delay_for(12), Duration::ZERO);
  }
}
