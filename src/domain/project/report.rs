//! Citizen progress reports on official projects.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{require, ReportId, Timestamp, ValidationError};

use super::ProjectStatus;

/// Outcome of automated media verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VerificationStatus {
    Verified,
    #[default]
    Pending,
    Rejected,
}

/// Supporting evidence attached to a report.
///
/// A verification status only exists when media was attached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvidence {
    Plain,
    WithMedia {
        media_url: String,
        verification: VerificationStatus,
    },
}

impl ReportEvidence {
    pub fn media(media_url: impl Into<String>) -> Self {
        ReportEvidence::WithMedia {
            media_url: media_url.into(),
            verification: VerificationStatus::Pending,
        }
    }

    pub fn media_url(&self) -> Option<&str> {
        match self {
            ReportEvidence::Plain => None,
            ReportEvidence::WithMedia { media_url, .. } => Some(media_url),
        }
    }

    pub fn verification(&self) -> Option<VerificationStatus> {
        match self {
            ReportEvidence::Plain => None,
            ReportEvidence::WithMedia { verification, .. } => Some(*verification),
        }
    }
}

/// A citizen's observation of a project on the ground.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ReportRecord", into = "ReportRecord")]
pub struct ProgressReport {
    pub id: ReportId,
    pub author: String,
    pub status: ProjectStatus,
    pub observation: String,
    pub date: Timestamp,
    pub evidence: ReportEvidence,
}

/// Flat persisted shape of a report.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReportRecord {
    id: ReportId,
    author: String,
    status: ProjectStatus,
    observation: String,
    date: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    media_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    ai_verification_status: Option<VerificationStatus>,
}

impl From<ReportRecord> for ProgressReport {
    fn from(record: ReportRecord) -> Self {
        let evidence = match record.media_url.filter(|url| !url.trim().is_empty()) {
            Some(media_url) => ReportEvidence::WithMedia {
                media_url,
                verification: record.ai_verification_status.unwrap_or_default(),
            },
            None => ReportEvidence::Plain,
        };
        Self {
            id: record.id,
            author: record.author,
            status: record.status,
            observation: record.observation,
            date: record.date,
            evidence,
        }
    }
}

impl From<ProgressReport> for ReportRecord {
    fn from(report: ProgressReport) -> Self {
        let (media_url, ai_verification_status) = match report.evidence {
            ReportEvidence::Plain => (None, None),
            ReportEvidence::WithMedia {
                media_url,
                verification,
            } => (Some(media_url), Some(verification)),
        };
        Self {
            id: report.id,
            author: report.author,
            status: report.status,
            observation: report.observation,
            date: report.date,
            media_url,
            ai_verification_status,
        }
    }
}

/// Fields a citizen provides when reporting on a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReport {
    #[serde(default = "default_author")]
    pub author: String,
    pub status: ProjectStatus,
    pub observation: String,
    #[serde(default)]
    pub media_url: Option<String>,
}

fn default_author() -> String {
    "Citizen Reporter".to_string()
}

impl NewReport {
    pub fn into_report(self) -> Result<ProgressReport, ValidationError> {
        require("observation", &self.observation)?;
        let evidence = match self.media_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => ReportEvidence::media(url),
            None => ReportEvidence::Plain,
        };
        Ok(ProgressReport {
            id: ReportId::generate(),
            author: self.author,
            status: self.status,
            observation: self.observation,
            date: Timestamp::now(),
            evidence,
        })
    }
}
