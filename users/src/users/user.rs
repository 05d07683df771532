use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid email address provided")]
    InvalidEmail,
}

/// A user record. Empty strings and unset timestamps are left out when
/// serialized, and missing keys deserialize to those same empty values.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    #[serde(skip_serializing_if = "String::is_empty")]
    pub first_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub last_name: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub mobile: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub email: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl User {
    pub(crate) fn set_defaults(&mut self) {
        self.set_defaults_at(Utc::now());
    }

    fn set_defaults_at(&mut self, now: DateTime<Utc>) {
        self.created_at.get_or_insert(now);
        self.updated_at.get_or_insert(now);
    }

    /// Trims surrounding whitespace from the text fields.
    pub fn sanitize(&mut self) {
        for field in [
            &mut self.first_name,
            &mut self.last_name,
            &mut self.email,
            &mut self.mobile,
        ] {
            trim_in_place(field);
        }
    }

    /// Only the email is checked, and only when present: it must have
    /// exactly one `@`.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.email.is_empty() && self.email.split('@').count() != 2 {
            return Err(ValidationError::InvalidEmail);
        }
        Ok(())
    }
}

fn trim_in_place(field: &mut String) {
    let trimmed = field.trim();
    if trimmed.len() != field.len() {
        *field = trimmed.to_owned();
    }
}
