//! Project update builder.

use colab_core::enums::ProjectStatus;
use serde::Serialize;

/// Owner-editable project fields. Title and owner never change.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProjectStatus>,
}

impl ProjectUpdate {
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.description.is_none() && self.status.is_none()
    }
}

pub struct ProjectUpdateBuilder(ProjectUpdate);

impl ProjectUpdateBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(ProjectUpdate::default())
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.0.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn status(mut self, status: ProjectStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn build(self) -> ProjectUpdate {
        self.0
    }
}

impl Default for ProjectUpdateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
