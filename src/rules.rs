// 🏷️ Category Rules - Rules as Data
// Ordered keyword table for ticket categorization; first match wins

use crate::normalize::normalize_text;

// ============================================================================
// RULE DEFINITION
// ============================================================================

/// One categorization rule: a category label and the keyword phrases that
/// select it. Matching is plain case-insensitive substring containment over
/// normalized text, not word-boundary matching: a short phrase can match
/// inside a longer word ("app" inside "happy").
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    /// Category label assigned on match
    pub category: &'static str,

    /// Keyword phrases; any single match suffices
    pub keywords: &'static [&'static str],
}

impl CategoryRule {
    /// Check whether any keyword is contained in the (already normalized)
    /// search text.
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|keyword| text.contains(keyword))
    }
}

/// Fallback category when no rule matches.
pub const FALLBACK_CATEGORY: &str = "Other";

/// The canonical rule table, in priority order. Table order is the tie-break:
/// a ticket matching several categories gets the first one listed here.
/// Keywords must be lowercase since they are compared against normalized text.
pub const CATEGORY_RULES: &[CategoryRule] = &[
    CategoryRule {
        category: "Login/Account",
        keywords: &[
            "login",
            "log in",
            "password",
            "reset",
            "locked",
            "account",
            "invalid password",
        ],
    },
    CategoryRule {
        category: "Security",
        keywords: &[
            "phishing",
            "malware",
            "virus",
            "spam",
            "security",
            "suspicious",
            "hack",
        ],
    },
    CategoryRule {
        category: "VPN",
        keywords: &[
            "vpn",
            "remote access",
            "cannot connect",
            "connection error",
            "timeout",
        ],
    },
    CategoryRule {
        category: "Device Setup",
        keywords: &["new computer", "new device", "setup", "workstation", "configure"],
    },
    CategoryRule {
        category: "Network/Connectivity",
        keywords: &[
            "wifi",
            "wi-fi",
            "internet",
            "ethernet",
            "network",
            "disconnect",
            "dropped",
        ],
    },
    CategoryRule {
        category: "Hardware",
        keywords: &[
            "laptop",
            "desktop",
            "keyboard",
            "mouse",
            "monitor",
            "battery",
            "charger",
            "blue screen",
            "crash",
        ],
    },
    CategoryRule {
        category: "Software",
        keywords: &[
            "install",
            "update",
            "application",
            "app",
            "software",
            "driver",
            "zoom",
        ],
    },
    CategoryRule {
        category: "Performance",
        keywords: &["slow", "lag", "freezing", "performance"],
    },
    CategoryRule {
        category: "Printing",
        keywords: &["printer", "print", "scanner"],
    },
];

// ============================================================================
// CATEGORIZER
// ============================================================================

/// Assign a category to a ticket from its subject and description.
///
/// The search text is `normalize(subject) + " " + normalize(description)`;
/// the first rule in table order with a matching keyword wins, and a ticket
/// matching no rule gets [`FALLBACK_CATEGORY`]. Pure and total: never fails,
/// deterministic given the fixed table.
pub fn categorize(subject: &str, description: &str) -> &'static str {
    let text = format!(
        "{} {}",
        normalize_text(Some(subject)),
        normalize_text(Some(description))
    );

    for rule in CATEGORY_RULES {
        if rule.matches(&text) {
            return rule.category;
        }
    }

    FALLBACK_CATEGORY
}

/// All category labels a ticket can carry, in table order plus the fallback.
pub fn known_categories() -> Vec<&'static str> {
    CATEGORY_RULES
        .iter()
        .map(|rule| rule.category)
        .chain(std::iter::once(FALLBACK_CATEGORY))
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
