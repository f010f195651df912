/// Canonicalize text for keyword matching.
///
/// Lower-cases, turns every character that is not a letter, digit or
/// whitespace into a separator, collapses separator runs into a single space
/// and trims both ends. Idempotent.
pub fn normalize(text: &str) -> String {
  let lower = text.to_lowercase();
  let mut out = String::with_capacity(lower.len());
  let mut pending_space = false;

  for ch in lower.chars() {
    if ch.is_alphanumeric() {
      if pending_space && !out.is_empty() {
        out.push(' ');
      }
      pending_space = false;
      out.push(ch);
    } else {
      pending_space = true;
    }
  }

  out
}

/// Keywords (in caller order) that occur as substrings of the normalized text
pub fn find_matches<'k, S: AsRef<str>>(text: &str, keywords: &'k [S]) -> Vec<&'k str> {
  matches_in_normalized(&normalize(text), keywords)
}

/// Same as [`find_matches`] against text that is already normalized, so one
/// normalization can serve every keyword table.
pub(crate) fn matches_in_normalized<'k, S: AsRef<str>>(normalized: &str, keywords: &'k [S]) -> Vec<&'k str> {
  keywords
    .iter()
    .map(AsRef::<str>::as_ref)
    .filter(|keyword| normalized.contains(keyword.to_lowercase().as_str()))
    .collect()
}
