//! OfficialProject entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{require, PostId, ProjectId, ValidationError};
use crate::domain::idea::{Comment, ProjectIdea};

use super::{ForumPost, ProgressReport};

/// Implementation status of an official project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ProjectStatus {
    #[default]
    #[serde(rename = "Not Started")]
    NotStarted,
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
    Stalled,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 4] = [
        ProjectStatus::NotStarted,
        ProjectStatus::InProgress,
        ProjectStatus::Completed,
        ProjectStatus::Stalled,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::NotStarted => "Not Started",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Stalled => "Stalled",
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Planned start and end dates. The end date may be left open.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    pub start: NaiveDate,
    #[serde(default, with = "optional_date")]
    pub end: Option<NaiveDate>,
}

/// Contractor that won the tender.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Implementer {
    pub company_name: String,
    pub tender_value: i64,
    #[serde(default)]
    pub directors: Vec<String>,
}

/// A county-funded project tracked by citizens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfficialProject {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub budget: i64,
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_county: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ward: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub timeline: Timeline,
    #[serde(default)]
    pub status: ProjectStatus,
    /// Newest first.
    #[serde(default)]
    pub reports: Vec<ProgressReport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementer: Option<Implementer>,
    /// Newest first.
    #[serde(default)]
    pub forum: Vec<ForumPost>,
}

/// Location value marking projects that apply to every ward.
pub const COUNTY_WIDE: &str = "County-wide";

impl OfficialProject {
    /// Seeds a project from an idea being converted.
    ///
    /// Budget starts at zero and the end date is left open for the
    /// administrator to fill in.
    pub fn from_idea(idea: &ProjectIdea, today: NaiveDate) -> Self {
        Self {
            id: ProjectId::generate(),
            name: idea.title.clone(),
            description: idea.description.clone(),
            budget: 0,
            location: idea.location.clone(),
            sub_county: non_blank(&idea.sub_county),
            ward: non_blank(&idea.ward),
            category: idea.category.clone(),
            timeline: Timeline {
                start: today,
                end: None,
            },
            status: ProjectStatus::NotStarted,
            reports: Vec::new(),
            implementer: None,
            forum: Vec::new(),
        }
    }

    pub fn is_county_wide(&self) -> bool {
        self.location == COUNTY_WIDE
    }

    /// Returns a copy with the report prepended.
    pub fn with_report(&self, report: ProgressReport) -> Self {
        let mut reports = Vec::with_capacity(self.reports.len() + 1);
        reports.push(report);
        reports.extend(self.reports.iter().cloned());
        Self {
            reports,
            ..self.clone()
        }
    }

    /// Returns a copy with the forum post prepended.
    pub fn with_forum_post(&self, post: ForumPost) -> Self {
        let mut forum = Vec::with_capacity(self.forum.len() + 1);
        forum.push(post);
        forum.extend(self.forum.iter().cloned());
        Self {
            forum,
            ..self.clone()
        }
    }

    /// Returns a copy with the reply appended to the given post, or `None`
    /// if the post does not exist.
    pub fn with_forum_reply(&self, post_id: &PostId, reply: Comment) -> Option<Self> {
        let index = self.forum.iter().position(|p| &p.id == post_id)?;
        let mut forum = self.forum.clone();
        forum[index] = forum[index].with_reply(reply);
        Some(Self {
            forum,
            ..self.clone()
        })
    }

    /// Estimated completion in percent for the given day.
    ///
    /// Completed projects are always 100 and projects that have not
    /// started are always 0. Past the planned end a project reads 100 even
    /// if it is stalled. An open end date yields 0.
    pub fn completion_percentage(&self, today: NaiveDate) -> u8 {
        match self.status {
            ProjectStatus::Completed => return 100,
            ProjectStatus::NotStarted => return 0,
            _ => {}
        }
        let start = self.timeline.start;
        let Some(end) = self.timeline.end else {
            return 0;
        };
        if today < start {
            return 0;
        }
        if today > end {
            return 100;
        }
        let total = (end - start).num_days();
        if total <= 0 {
            return 100;
        }
        let elapsed = (today - start).num_days();
        let percent = (elapsed as f64 / total as f64 * 100.0).round();
        percent.min(100.0) as u8
    }
}

/// Fields an administrator provides when creating a project directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProject {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub budget: i64,
    pub sub_county: String,
    pub ward: String,
    pub category: String,
    pub timeline: Timeline,
    #[serde(default)]
    pub status: ProjectStatus,
}

impl NewProject {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("description", &self.description)?;
        require("subCounty", &self.sub_county)?;
        require("ward", &self.ward)?;
        require("category", &self.category)?;
        if self.timeline.end.is_none() {
            return Err(ValidationError::empty_field("timeline.end"));
        }
        Ok(())
    }

    /// Builds the project. The location string is composed from ward and
    /// sub-county.
    pub fn into_project(self) -> Result<OfficialProject, ValidationError> {
        self.validate()?;
        Ok(OfficialProject {
            id: ProjectId::generate(),
            location: format!("{}, {}", self.ward, self.sub_county),
            name: self.name,
            description: self.description,
            budget: self.budget,
            sub_county: Some(self.sub_county),
            ward: Some(self.ward),
            category: Some(self.category),
            timeline: self.timeline,
            status: self.status,
            reports: Vec::new(),
            implementer: None,
            forum: Vec::new(),
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Serde helper: `YYYY-MM-DD`, with an empty string meaning "unset".
mod optional_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format(FORMAT).to_string()),
            None => serializer.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(s) => NaiveDate::parse_from_str(s, FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}
