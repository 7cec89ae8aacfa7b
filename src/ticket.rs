// 🎫 Ticket Record - Core data model
// One helpdesk request: raw text fields plus normalized priority/status and
// a derived category

use serde::{Deserialize, Serialize};

use crate::normalize::title_case;
use crate::rules::categorize;

// ============================================================================
// PRIORITY
// ============================================================================

/// Ticket priority, always one of a closed set. Raw input is normalized
/// through [`Priority::normalize`]; no raw value survives into aggregation
/// or export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Canonicalize a raw priority value.
    ///
    /// Trims and title-cases, then accepts exactly High/Medium/Low. Missing,
    /// empty, and unrecognized values all default to Medium.
    pub fn normalize(raw: Option<&str>) -> Self {
        match title_case(raw.unwrap_or_default()).as_str() {
            "High" => Priority::High,
            "Low" => Priority::Low,
            "Medium" => Priority::Medium,
            _ => Priority::Medium,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

// ============================================================================
// STATUS
// ============================================================================

/// Ticket status, Open or Closed. "Close" is an accepted alias for Closed;
/// anything else defaults to Open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    Open,
    Closed,
}

impl Status {
    /// Canonicalize a raw status value.
    pub fn normalize(raw: Option<&str>) -> Self {
        let mut value = title_case(raw.unwrap_or_default());

        // Explicit alias from legacy exports
        if value == "Close" {
            value = "Closed".to_string();
        }

        match value.as_str() {
            "Closed" => Status::Closed,
            "Open" => Status::Open,
            _ => Status::Open,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::Closed => "Closed",
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Status::Open)
    }
}

// ============================================================================
// TICKET
// ============================================================================

/// One helpdesk ticket, normalized and categorized.
///
/// `subject` and `description` keep their raw text (the export must preserve
/// them); categorization normalizes them internally. `category` is derived
/// from the rule table every run and never trusted from stored input.
/// `extra` carries the values of any input columns beyond the base schema,
/// aligned with the store's extra-header list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    /// Raw id as stored; numeric ids feed next-id allocation
    pub id: String,

    pub subject: String,
    pub description: String,

    pub priority: Priority,
    pub status: Status,

    /// Derived category, one of the rule-table labels or "Other"
    pub category: String,

    /// Pass-through values for columns outside the base schema
    #[serde(default)]
    pub extra: Vec<String>,
}

impl Ticket {
    /// Build a ticket from raw field values, normalizing priority/status and
    /// computing the category.
    pub fn from_raw(
        id: String,
        subject: String,
        description: String,
        priority: Option<&str>,
        status: Option<&str>,
    ) -> Self {
        let category = categorize(&subject, &description).to_string();

        Ticket {
            id,
            subject,
            description,
            priority: Priority::normalize(priority),
            status: Status::normalize(status),
            category,
            extra: Vec::new(),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_normalize_valid() {
        assert_eq!(Priority::normalize(Some("High")), Priority::High);
        assert_eq!(Priority::normalize(Some("  low ")), Priority::Low);
        assert_eq!(Priority::normalize(Some("MEDIUM")), Priority::Medium);
    }

    #[test]
    fn test_priority_defaults_to_medium() {
        assert_eq!(Priority::normalize(None), Priority::Medium);
        assert_eq!(Priority::normalize(Some("")), Priority::Medium);
        assert_eq!(Priority::normalize(Some("urgent")), Priority::Medium);
    }

    #[test]
    fn test_status_normalize_and_alias() {
        assert_eq!(Status::normalize(Some("close")), Status::Closed);
        assert_eq!(Status::normalize(Some("CLOSED")), Status::Closed);
        assert_eq!(Status::normalize(Some("Open")), Status::Open);
    }

    #[test]
    fn test_status_defaults_to_open() {
        assert_eq!(Status::normalize(None), Status::Open);
        assert_eq!(Status::normalize(Some("")), Status::Open);
        assert_eq!(Status::normalize(Some("pending")), Status::Open);
    }

    #[test]
    fn test_from_raw_password_reset() {
        let ticket = Ticket::from_raw(
            "1".to_string(),
            "Cannot reset my password".to_string(),
            String::new(),
            Some(""),
            Some("open"),
        );

        assert_eq!(ticket.category, "Login/Account");
        assert_eq!(ticket.priority, Priority::Medium);
        assert_eq!(ticket.status, Status::Open);
    }

    #[test]
    fn test_from_raw_wifi_on_laptop() {
        let ticket = Ticket::from_raw(
            "2".to_string(),
            "WiFi keeps disconnecting on laptop".to_string(),
            String::new(),
            Some("High"),
            Some("Close"),
        );

        assert_eq!(ticket.category, "Network/Connectivity");
        assert_eq!(ticket.priority, Priority::High);
        assert_eq!(ticket.status, Status::Closed);
    }

    #[test]
    fn test_from_raw_all_fields_unusable() {
        let ticket = Ticket::from_raw(
            "3".to_string(),
            String::new(),
            String::new(),
            Some("X"),
            Some("Y"),
        );

        assert_eq!(ticket.category, "Other");
        assert_eq!(ticket.priority, Priority::Medium);
        assert_eq!(ticket.status, Status::Open);
    }
}
