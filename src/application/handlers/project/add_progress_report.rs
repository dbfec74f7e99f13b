//! AddProgressReportHandler - Command handler for citizen progress reports.

use std::sync::Arc;
use tracing::info;

use crate::application::PortalStore;
use crate::domain::foundation::{DomainError, ProjectId};
use crate::domain::project::{NewReport, ProgressReport};

#[derive(Debug, Clone)]
pub struct AddProgressReportCommand {
    pub project_id: ProjectId,
    pub report: NewReport,
}

pub struct AddProgressReportHandler {
    store: Arc<PortalStore>,
}

impl AddProgressReportHandler {
    pub fn new(store: Arc<PortalStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: AddProgressReportCommand) -> Result<ProgressReport, DomainError> {
        let report = self
            .store
            .apply(|s| s.add_progress_report(&cmd.project_id, cmd.report))
            .await?;
        info!(
            project_id = %cmd.project_id,
            report_id = %report.id,
            has_media = report.evidence.media_url().is_some(),
            "progress report added"
        );
        Ok(report)
    }
}
