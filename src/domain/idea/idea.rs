//! ProjectIdea entity.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{require, IdeaId, ValidationError};

use super::Comment;

/// Review lifecycle of an idea.
///
/// Administrators may move an idea between any two statuses; there is no
/// guarded transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum IdeaStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Converted,
}

impl IdeaStatus {
    /// Display label, identical to the serialized form.
    pub fn label(&self) -> &'static str {
        match self {
            IdeaStatus::Pending => "Pending",
            IdeaStatus::Approved => "Approved",
            IdeaStatus::Rejected => "Rejected",
            IdeaStatus::Converted => "Converted",
        }
    }
}

impl fmt::Display for IdeaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Channel through which an idea reached the county.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionChannel {
    #[default]
    Web,
    Sms,
    Voice,
}

/// A citizen-submitted project idea.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectIdea {
    pub id: IdeaId,
    pub title: String,
    pub description: String,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub sub_county: String,
    #[serde(default)]
    pub ward: String,
    #[serde(default)]
    pub submitted_via: SubmissionChannel,
    #[serde(default)]
    pub votes: u32,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub status: IdeaStatus,
}

impl ProjectIdea {
    /// Returns a copy with one more vote.
    pub fn with_vote(&self) -> Self {
        Self {
            votes: self.votes.saturating_add(1),
            ..self.clone()
        }
    }

    /// Returns a copy with the comment appended.
    pub fn with_comment(&self, comment: Comment) -> Self {
        let mut comments = self.comments.clone();
        comments.push(comment);
        Self {
            comments,
            ..self.clone()
        }
    }

    /// Returns a copy with the status overwritten.
    pub fn with_status(&self, status: IdeaStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

/// Fields a citizen provides when submitting an idea.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIdea {
    pub title: String,
    pub description: String,
    pub location: String,
    #[serde(default)]
    pub sub_county: String,
    #[serde(default)]
    pub ward: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub is_anonymous: bool,
    #[serde(default)]
    pub submitted_via: Option<SubmissionChannel>,
}

impl NewIdea {
    /// Creates a submission with the three required fields.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            location: location.into(),
            ..Default::default()
        }
    }

    /// Sets the structured sub-county and ward.
    pub fn in_ward(mut self, sub_county: impl Into<String>, ward: impl Into<String>) -> Self {
        self.sub_county = sub_county.into();
        self.ward = ward.into();
        self
    }

    /// Sets the category hint.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Checks the required fields.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("description", &self.description)?;
        require("location", &self.location)?;
        Ok(())
    }

    /// Builds the idea: fresh id, no votes, no comments, pending review.
    pub fn into_idea(self) -> Result<ProjectIdea, ValidationError> {
        self.validate()?;
        Ok(ProjectIdea {
            id: IdeaId::generate(),
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            location: self.location.trim().to_string(),
            category: self.category.filter(|c| !c.trim().is_empty()),
            sub_county: self.sub_county,
            ward: self.ward,
            submitted_via: self.submitted_via.unwrap_or_default(),
            votes: 0,
            comments: Vec::new(),
            is_anonymous: self.is_anonymous,
            status: IdeaStatus::Pending,
        })
    }
}
