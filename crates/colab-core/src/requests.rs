//! Validated input types for mutating operations.
//!
//! Enum-typed fields are parsed at the boundary (CLI, transport) through
//! `FromStr`; the checks here cover what the type system cannot.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ProjectStatus, Visibility};
use crate::errors::CoreError;

/// Input for project creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub visibility: Visibility,
    #[serde(default)]
    pub status: ProjectStatus,
}

impl NewProject {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_skills = skills.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub const fn status(mut self, status: ProjectStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub const fn visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Check the request and return it with the title trimmed.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the title is blank.
    pub fn validated(mut self) -> Result<Self, CoreError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(CoreError::Validation("title must not be empty".into()));
        }
        self.title = title.to_string();
        Ok(self)
    }
}

/// Trim and lower-case an email, rejecting values that cannot be addresses.
///
/// # Errors
///
/// Returns `CoreError::Validation` for empty input, whitespace inside the
/// address, or anything other than exactly one `@` between non-empty parts.
pub fn normalize_email(raw: &str) -> Result<String, CoreError> {
    let email = raw.trim().to_lowercase();
    let invalid = || CoreError::Validation(format!("invalid email '{}'", raw.trim()));

    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    Ok(email)
}
