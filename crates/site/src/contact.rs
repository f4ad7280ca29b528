//! Contact form model.
//!
//! The form collects a draft and validates it locally. There is no delivery
//! channel: a valid draft is acknowledged and dropped.

use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    /// Element id of the matching form control.
    pub fn id(self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            ContactField::Name => "John Doe",
            ContactField::Email => "hello@example.com",
            ContactField::Subject => "Project Inquiry",
            ContactField::Message => "Tell me about your project...",
        }
    }

    pub fn is_required(self) -> bool {
        !matches!(self, ContactField::Subject)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldIssue {
    Missing(ContactField),
    InvalidEmail,
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldIssue::Missing(field) => write!(f, "{} is required", field.label()),
            FieldIssue::InvalidEmail => write!(f, "Email address looks incomplete"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactDraft {
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let value = value.into();
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Issues in form order; empty when the draft is complete.
    pub fn validate(&self) -> Vec<FieldIssue> {
        let mut issues: Vec<FieldIssue> = ContactField::ALL
            .into_iter()
            .filter(|f| f.is_required() && self.field(*f).trim().is_empty())
            .map(FieldIssue::Missing)
            .collect();
        let email = self.email.trim();
        if !email.is_empty() && !looks_like_email(email) {
            issues.push(FieldIssue::InvalidEmail);
        }
        issues
    }
}

/// `local@domain.tld` with no whitespace. Deliberately loose.
fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rejected(Vec<FieldIssue>),
    /// The draft was valid but the form has no delivery channel.
    NotSent,
}

impl SubmitOutcome {
    pub fn notice(&self) -> String {
        match self {
            SubmitOutcome::Rejected(issues) => issues
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(". "),
            SubmitOutcome::NotSent => {
                "Thanks! Messages can't be sent from this page yet, please use email instead."
                    .to_string()
            }
        }
    }
}

pub fn submit(draft: &ContactDraft) -> SubmitOutcome {
    let issues = draft.validate();
    if issues.is_empty() {
        SubmitOutcome::NotSent
    } else {
        SubmitOutcome::Rejected(issues)
    }
}
