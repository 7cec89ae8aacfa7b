// 📥 Ticket Intake - New-ticket records before they enter the store
// An injected draft record, so the pipeline is exercisable without a prompt

use crate::ticket::Ticket;

/// Placeholder subject for drafts submitted without one.
pub const NO_SUBJECT: &str = "No subject";

/// Placeholder description for drafts submitted without one.
pub const NO_DESCRIPTION: &str = "No description";

// ============================================================================
// TICKET DRAFT
// ============================================================================

/// Raw new-ticket input, before normalization or id allocation.
///
/// Every field is optional; whatever collects the draft (a CLI prompt, a
/// test, an embedding caller) hands it over as-is and the conversion to
/// [`Ticket`] applies the placeholder/default policy.
#[derive(Debug, Clone, Default)]
pub struct TicketDraft {
    pub subject: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
}

impl TicketDraft {
    pub fn new() -> Self {
        TicketDraft::default()
    }

    /// Builder: set the subject.
    pub fn with_subject(mut self, subject: &str) -> Self {
        self.subject = Some(subject.to_string());
        self
    }

    /// Builder: set the description.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Builder: set the raw priority value.
    pub fn with_priority(mut self, priority: &str) -> Self {
        self.priority = Some(priority.to_string());
        self
    }

    /// Builder: set the raw status value.
    pub fn with_status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }

    /// Turn the draft into a full ticket under the given id.
    ///
    /// Empty or missing subject/description become the literal placeholders;
    /// priority and status go through their closed-set normalizers; the
    /// category is computed from the final text.
    pub fn into_ticket(self, id: u64) -> Ticket {
        let subject = match self.subject.as_deref().map(str::trim) {
            Some(s) if !s.is_empty() => s.to_string(),
            _ => NO_SUBJECT.to_string(),
        };
        let description = match self.description.as_deref().map(str::trim) {
            Some(d) if !d.is_empty() => d.to_string(),
            _ => NO_DESCRIPTION.to_string(),
        };

        Ticket::from_raw(
            id.to_string(),
            subject,
            description,
            self.priority.as_deref(),
            self.status.as_deref(),
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================
