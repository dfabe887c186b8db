//! Contact inquiry form.
//!
//! Mirrors the backend's contact model so callers can reject obviously bad
//! input before sending. `PortfolioClient::submit_contact` does not call
//! `validate` itself; the backend stays the authority.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ContactError;

/// Longest message the backend accepts.
pub const MAX_MESSAGE_CHARS: usize = 2000;

static EMAIL_RE: Lazy<Option<Regex>> = Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").ok());

static PHONE_RE: Lazy<Option<Regex>> = Lazy::new(|| {
    Regex::new(r"^[+]?[(]?[0-9]{3}[)]?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}$").ok()
});

/// What the inquiry is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactSubject {
    Project,
    Consultation,
    Teaching,
    Job,
    Other,
}

impl ContactSubject {
    pub const ALL: [ContactSubject; 5] = [
        Self::Project,
        Self::Consultation,
        Self::Teaching,
        Self::Job,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Consultation => "consultation",
            Self::Teaching => "teaching",
            Self::Job => "job",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for ContactSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactSubject {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|subject| subject.as_str() == wanted)
            .ok_or_else(|| ContactError::UnknownSubject(s.to_string()))
    }
}

/// Body of `POST /contact`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub subject: ContactSubject,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: ContactSubject,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            phone: String::new(),
            subject,
            message: message.into(),
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Check the form against the backend's rules, reporting the first
    /// violation.
    pub fn validate(&self) -> Result<(), ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::Missing { field: "name" });
        }

        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::Missing { field: "email" });
        }
        if !matches_pattern(&EMAIL_RE, email) {
            return Err(ContactError::InvalidEmail(self.email.clone()));
        }

        let phone = self.phone.trim();
        if !phone.is_empty() && !matches_pattern(&PHONE_RE, phone) {
            return Err(ContactError::InvalidPhone(self.phone.clone()));
        }

        if self.message.trim().is_empty() {
            return Err(ContactError::Missing { field: "message" });
        }
        let len = self.message.chars().count();
        if len > MAX_MESSAGE_CHARS {
            return Err(ContactError::MessageTooLong {
                len,
                max: MAX_MESSAGE_CHARS,
            });
        }

        Ok(())
    }
}

// A pattern that failed to compile accepts everything; the backend validates again.
fn matches_pattern(re: &Lazy<Option<Regex>>, text: &str) -> bool {
    re.as_ref().is_none_or(|re| re.is_match(text))
}
