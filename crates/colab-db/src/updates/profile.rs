//! Profile update builder.

use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub projects: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
}

impl ProfileUpdate {
    /// Column/value pairs for the fields that are set, in column order.
    pub(crate) fn assignments(&self) -> Vec<(&'static str, &str)> {
        [
            ("full_name", self.full_name.as_deref()),
            ("bio", self.bio.as_deref()),
            ("affiliation", self.affiliation.as_deref()),
            ("skills", self.skills.as_deref()),
            ("role", self.role.as_deref()),
            ("projects", self.projects.as_deref()),
            ("location", self.location.as_deref()),
            ("github", self.github.as_deref()),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.map(|v| (column, v)))
        .collect()
    }
}

pub struct ProfileUpdateBuilder(ProfileUpdate);

impl ProfileUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ProfileUpdate::default())
    }

    #[must_use]
    pub fn full_name(mut self, full_name: impl Into<String>) -> Self {
        self.0.full_name = Some(full_name.into());
        self
    }

    #[must_use]
    pub fn bio(mut self, bio: impl Into<String>) -> Self {
        self.0.bio = Some(bio.into());
        self
    }

    #[must_use]
    pub fn affiliation(mut self, affiliation: impl Into<String>) -> Self {
        self.0.affiliation = Some(affiliation.into());
        self
    }

    #[must_use]
    pub fn skills(mut self, skills: impl Into<String>) -> Self {
        self.0.skills = Some(skills.into());
        self
    }

    #[must_use]
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.0.role = Some(role.into());
        self
    }

    #[must_use]
    pub fn projects(mut self, projects: impl Into<String>) -> Self {
        self.0.projects = Some(projects.into());
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.0.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn github(mut self, github: impl Into<String>) -> Self {
        self.0.github = Some(github.into());
        self
    }

    #[must_use]
    pub fn build(self) -> ProfileUpdate {
        self.0
    }
}

impl Default for ProfileUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
