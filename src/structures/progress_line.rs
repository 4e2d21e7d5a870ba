/// Renders a `Progress` as a single terminal line which is overwritten in place
#[derive(Debug, Default)]
pub struct ProgressLine {
  pub(crate) last_length: usize,
}
