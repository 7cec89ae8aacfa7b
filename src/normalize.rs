// 🔤 Text Normalizer - Canonical form for keyword matching
// Lowercase + whitespace collapse, the single entry point for all free text

// ============================================================================
// TEXT NORMALIZATION
// ============================================================================

/// Normalize free text for keyword matching.
///
/// Missing/empty input yields an empty string (not an error). Otherwise the
/// text is lowercased, any run of whitespace (spaces, tabs, newlines) is
/// collapsed to a single space, and leading/trailing whitespace is stripped.
///
/// Pure and total; idempotent by construction.
pub fn normalize_text(text: Option<&str>) -> String {
    let Some(text) = text else {
        return String::new();
    };

    let lowered = text.to_lowercase();
    lowered.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Trim and title-case a raw field value ("hIGH" → "High", "in progress" →
/// "In Progress"). Used by the priority/status normalizers before matching
/// against their closed sets.
pub fn title_case(raw: &str) -> String {
    raw.trim()
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_missing_and_empty() {
        assert_eq!(normalize_text(None), "");
        assert_eq!(normalize_text(Some("")), "");
        assert_eq!(normalize_text(Some("   \t\n  ")), "");
    }

    #[test]
    fn test_normalize_lowercases_and_collapses() {
        assert_eq!(
            normalize_text(Some("  Cannot   RESET\tmy\n\npassword ")),
            "cannot reset my password"
        );
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let samples = [
            "WiFi   keeps\tdisconnecting",
            "  already clean  ",
            "MIXED Case\nAnd\nNewlines",
            "",
        ];

        for sample in samples {
            let once = normalize_text(Some(sample));
            let twice = normalize_text(Some(&once));
            assert_eq!(once, twice, "normalize must be idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("  high "), "High");
        assert_eq!(title_case("CLOSED"), "Closed");
        assert_eq!(title_case("in progress"), "In Progress");
        assert_eq!(title_case(""), "");
    }
}
