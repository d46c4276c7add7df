//! Log sanitization utilities for masking personal data.
//!
//! User names are personal data; only a short prefix is written to the logs.

/// Number of leading characters left visible.
const VISIBLE_CHARS: usize = 3;

/// Mask a person's name for safe logging.
///
/// Shows only the first 3 characters followed by asterisks. Counts characters
/// rather than bytes so multi-byte names never split inside a code point.
///
/// # Examples
/// ```ignore
/// assert_eq!(mask_name("Berra"), "Ber***");
/// assert_eq!(mask_name("Åsa"), "Åsa***");
/// ```
pub fn mask_name(name: &str) -> String {
    let visible: String = name.trim().chars().take(VISIBLE_CHARS).collect();
    format!("{}***", visible)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_name_normal() {
        assert_eq!(mask_name("Berra"), "Ber***");
        assert_eq!(mask_name("  Gurksvarvare "), "Gur***");
    }

    #[test]
    fn test_mask_name_short() {
        assert_eq!(mask_name("Al"), "Al***");
        assert_eq!(mask_name(""), "***");
    }

    #[test]
    fn test_mask_name_multibyte() {
        assert_eq!(mask_name("Ögrens"), "Ögr***");
        assert_eq!(mask_name("Åsa-Britt"), "Åsa***");
    }
}
