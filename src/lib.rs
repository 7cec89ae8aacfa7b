// IT Ticket Analyzer - Core Library
// Exposes all modules for use in the CLI and tests

pub mod normalize;
pub mod rules;
pub mod ticket;
pub mod aggregate;
pub mod store;
pub mod intake;
pub mod report;

// Re-export commonly used types
pub use normalize::normalize_text;
pub use rules::{categorize, known_categories, CategoryRule, CATEGORY_RULES, FALLBACK_CATEGORY};
pub use ticket::{Priority, Status, Ticket};
pub use aggregate::{OrderedCounter, TicketSummary};
pub use store::{append_ticket, TicketStore, BASE_HEADERS, CATEGORY_HEADER};
pub use intake::{TicketDraft, NO_DESCRIPTION, NO_SUBJECT};
pub use report::{render as render_report, REPORT_TITLE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
