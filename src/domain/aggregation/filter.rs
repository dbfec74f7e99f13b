//! Dashboard filtering by sub-county, ward and free text.

use serde::{Deserialize, Serialize};

use crate::domain::idea::ProjectIdea;
use crate::domain::project::{OfficialProject, ProjectStatus};

/// Value meaning "no constraint" for either level.
pub const ALL: &str = "all";

/// Sub-county and ward selection. `None` matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationFilter {
    #[serde(default, deserialize_with = "all_as_none")]
    pub sub_county: Option<String>,
    #[serde(default, deserialize_with = "all_as_none")]
    pub ward: Option<String>,
}

fn all_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(constraint))
}

fn constraint(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL) {
        None
    } else {
        Some(trimmed.to_string())
    }
}

impl LocationFilter {
    pub fn all() -> Self {
        Self::default()
    }

    /// Builds a filter from raw selector values, where blank or "all"
    /// means no constraint.
    pub fn from_selection(sub_county: Option<String>, ward: Option<String>) -> Self {
        Self {
            sub_county: sub_county.and_then(constraint),
            ward: ward.and_then(constraint),
        }
    }

    pub fn sub_county(sub_county: impl Into<String>) -> Self {
        Self {
            sub_county: Some(sub_county.into()),
            ward: None,
        }
    }

    pub fn ward(mut self, ward: impl Into<String>) -> Self {
        self.ward = Some(ward.into());
        self
    }

    fn accepts(&self, sub_county: Option<&str>, ward: Option<&str>) -> bool {
        let sub_county_ok = match &self.sub_county {
            None => true,
            Some(wanted) => sub_county == Some(wanted.as_str()),
        };
        let ward_ok = match &self.ward {
            None => true,
            Some(wanted) => ward == Some(wanted.as_str()),
        };
        sub_county_ok && ward_ok
    }

    pub fn matches_idea(&self, idea: &ProjectIdea) -> bool {
        self.accepts(Some(&idea.sub_county), Some(&idea.ward))
    }

    /// County-wide projects pass any location filter.
    pub fn matches_project(&self, project: &OfficialProject) -> bool {
        project.is_county_wide()
            || self.accepts(project.sub_county.as_deref(), project.ward.as_deref())
    }
}

pub fn filter_ideas<'a>(ideas: &'a [ProjectIdea], filter: &LocationFilter) -> Vec<&'a ProjectIdea> {
    ideas.iter().filter(|i| filter.matches_idea(i)).collect()
}

/// Projects matching the location filter whose name or description
/// contains `search` (case-insensitive). A blank search matches all.
pub fn filter_projects<'a>(
    projects: &'a [OfficialProject],
    filter: &LocationFilter,
    search: &str,
) -> Vec<&'a OfficialProject> {
    let needle = search.trim().to_lowercase();
    projects
        .iter()
        .filter(|p| filter.matches_project(p))
        .filter(|p| {
            needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .collect()
}

pub fn ongoing_projects<'a>(
    projects: &'a [OfficialProject],
    filter: &LocationFilter,
) -> Vec<&'a OfficialProject> {
    projects
        .iter()
        .filter(|p| p.status == ProjectStatus::InProgress && filter.matches_project(p))
        .collect()
}
