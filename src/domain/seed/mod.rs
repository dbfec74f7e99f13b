//! Seed dataset used when nothing has been persisted yet.

use once_cell::sync::Lazy;

use crate::domain::assistant::CountyDocument;
use crate::domain::foundation::DocumentId;
use crate::domain::idea::ProjectIdea;
use crate::domain::project::OfficialProject;

static IDEAS: Lazy<Vec<ProjectIdea>> = Lazy::new(|| {
    serde_json::from_str(include_str!("ideas.json")).expect("seed ideas must be valid")
});

static PROJECTS: Lazy<Vec<OfficialProject>> = Lazy::new(|| {
    serde_json::from_str(include_str!("projects.json")).expect("seed projects must be valid")
});

static DOCUMENTS: Lazy<Vec<CountyDocument>> = Lazy::new(|| {
    serde_json::from_str(include_str!("documents.json")).expect("seed documents must be valid")
});

pub fn project_ideas() -> Vec<ProjectIdea> {
    IDEAS.clone()
}

pub fn official_projects() -> Vec<OfficialProject> {
    PROJECTS.clone()
}

/// Reference documents the assistant can be grounded on.
pub fn county_documents() -> &'static [CountyDocument] {
    &DOCUMENTS
}

pub fn county_document(id: &DocumentId) -> Option<&'static CountyDocument> {
    DOCUMENTS.iter().find(|d| &d.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::idea::{IdeaStatus, SubmissionChannel};
    use crate::domain::project::{ProjectStatus, ReportEvidence, VerificationStatus};

    #[test]
    fn seed_ideas_load_with_defaults() {
        let ideas = project_ideas();
        assert_eq!(ideas.len(), 12);
        assert!(ideas.iter().all(|i| i.votes == 0));
        assert!(ideas.iter().all(|i| i.status == IdeaStatus::Pending));
        assert_eq!(ideas[1].submitted_via, SubmissionChannel::Sms);
    }

    #[test]
    fn seed_projects_load() {
        let projects = official_projects();
        assert_eq!(projects.len(), 3);
        assert_eq!(projects[0].status, ProjectStatus::InProgress);
        assert!(projects[0].implementer.is_some());
        assert!(projects[2].is_county_wide());
        assert!(projects[2].timeline.end.is_some());
    }

    #[test]
    fn media_report_without_status_reads_as_pending() {
        let projects = official_projects();
        let report = &projects[2].reports[0];
        assert_eq!(
            report.evidence.verification(),
            Some(VerificationStatus::Pending)
        );
        assert_eq!(projects[0].reports[1].evidence, ReportEvidence::Plain);
    }

    #[test]
    fn documents_are_addressable_by_id() {
        let id = DocumentId::new("doc-cidp").unwrap();
        assert!(county_document(&id).is_some());
        assert_eq!(county_documents().len(), 3);
    }
}
