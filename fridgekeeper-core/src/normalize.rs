//! Food-name canonicalization.
//!
//! Receipt lines and vision-model labels arrive with packaging noise
//! ("Fresh Organic Bananas 2lb Bag"); catalog matching wants the bare food
//! identity. Normalization is deterministic, does no I/O, and is
//! idempotent for ordinary food names.

/// Filler descriptors removed wherever they occur as substrings.
/// "slice" runs before "sliced", so the trailing "d" of "sliced" is what
/// the second pass sees.
const FILLER_TOKENS: &[&str] = &["fresh", "organic", "bag", "pack", "slice", "sliced"];

/// Canonicalize a raw food name: lowercase, keep only alphanumerics and
/// whitespace, drop filler descriptors, trim.
pub fn normalize(raw: &str) -> String {
    let lowered = raw.to_lowercase();
    let mut name: String = lowered
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    for token in FILLER_TOKENS {
        name = name.replace(token, "");
    }

    name.trim().to_string()
}
