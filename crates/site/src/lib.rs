pub mod config;
pub mod contact;
pub mod content;
pub mod markup;

pub use config::{ConfigError, SiteConfig};
pub use contact::{ContactDraft, ContactField, FieldIssue, SubmitOutcome};
pub use content::{ContentError, Portfolio};
pub use markup::render_document;
