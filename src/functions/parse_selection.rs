/// Parses the index typed by the user, `None` unless it points into a list of `available` entries
pub fn parse_selection(input: &str, available: usize) -> Option<usize> {
  match input.trim().parse::<usize>() {
    Ok(index) if index < available => Some(index),
    _ => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn accepts_indices_in_range() {
    assert_eq!(parse_selection("0\n", 3), Some(0));
    assert_eq!(parse_selection(" 2 ", 3), Some(2));
  }

  #[test]
  fn rejects_everything_else() {
    assert_eq!(parse_selection("3", 3), None);
    assert_eq!(parse_selection("-1", 3), None);
    assert_eq!(parse_selection("two", 3), None);
    assert_eq!(parse_selection("", 3), None);
    assert_eq!(parse_selection("0", 0), None);
  }
}
