//! Pluralization helpers for status lines.

/// "s" suffix for a count: `0 paths`, `1 path`, `5 paths`.
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Count followed by the noun, pluralized: `plural_count(3, "group")` is `"3 groups"`.
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{count} {noun}{}", plural_s(count))
}
