// crates/urbanpulse-core/src/text.rs

/// Folded key for forgiving name comparison: Unicode transliterated to ASCII
/// (`Łódź` → `Lodz`), then lowercased and trimmed.
///
/// ```rust
/// use urbanpulse_core::text::fold_key;
///
/// assert_eq!(fold_key("Łódź"), "lodz");
/// assert_eq!(fold_key(" São Paulo "), "sao paulo");
/// ```
pub fn fold_key(s: &str) -> String {
    deunicode::deunicode(s.trim()).to_lowercase()
}

