/// The catalog lists builds as `<prefix>-<build id>[-...]`, the build id is the second segment.
///
/// A label without any `-` is used as build id as is.
pub fn build_id_from_label(label: &str) -> &str {
  label.split('-').nth(1).unwrap_or(label)
}
