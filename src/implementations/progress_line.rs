use crate::functions::human_readable_bytesize;
use crate::structures::{Progress, ProgressLine};

impl ProgressLine {
  pub fn new() -> Self {
    Self {
      last_length: 0,
    }
  }

  pub fn render(&mut self, progress: &Progress) -> String {
    self.render_values(progress.completed_bytes(), progress.total_bytes())
  }

  /// Formats `completed/total` behind a carriage return, padded with spaces to cover whatever the previous
  /// render left on the line.
  pub fn render_values(&mut self, completed: u64, total: u64) -> String {
    let percentage = if total == 0 { 100.0 } else { completed as f64 / total as f64 * 100.0 };
    let mut message = format!("\rDownloaded: {} / {} ({:.2}%)", human_readable_bytesize(completed), human_readable_bytesize(total), percentage);
    let length = message.chars().count();
    if self.last_length > length {
      message.push_str(&" ".repeat(self.last_length - length));
    }
    self.last_length = message.chars().count();
    message
  }
}
