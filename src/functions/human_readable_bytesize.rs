/// Convert a raw bytesize into a human readable string using 1024 as delimiter, e.g. 1_572_864 returns 1.5 MB
pub fn human_readable_bytesize(num: u64) -> String {
  const UNITS : [&str; 5] = ["B", "KB", "MB", "GB", "TB"];
  const DELIMITER : f64 = 1024_f64;

  let mut pretty_bytes = num as f64;
  let mut exponent = 0;
  while pretty_bytes >= DELIMITER && exponent < UNITS.len() - 1 {
    pretty_bytes /= DELIMITER;
    exponent += 1;
  }
  // At most two decimals, trailing zeroes dropped
  let pretty_bytes = (pretty_bytes * 100.0).round() / 100.0;
  format!("{} {}", pretty_bytes, UNITS[exponent])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_sizes_are_bytes() {
        assert_eq!(human_readable_bytesize(0), "0 B");
        assert_eq!(human_readable_bytesize(300), "300 B");
        assert_eq!(human_readable_bytesize(1023), "1023 B");
    }

    #[test]
    fn uses_1024_as_delimiter() {
        assert_eq!(human_readable_bytesize(1024), "1 KB");
        assert_eq!(human_readable_bytesize(1536), "1.5 KB");
        assert_eq!(human_readable_bytesize(1_572_864), "1.5 MB");
        assert_eq!(human_readable_bytesize(4_248_578_547), "3.96 GB");
    }

    #[test]
    fn terabytes_is_the_largest_unit() {
        assert_eq!(human_readable_bytesize(5 * 1024_u64.pow(5)), "5120 TB");
    }
}
