//! Assembles every portal endpoint under `/api`.

use std::sync::Arc;

use axum::{routing::get, Router};

use crate::application::handlers::analysis::{AggregationEngine, GetDashboardHandler};
use crate::application::handlers::assistant::AssistantService;
use crate::application::handlers::budget::{
    GetBudgetCandidatesHandler, GetBudgetOverviewHandler, SubmitAllocationHandler,
};
use crate::application::handlers::idea::{
    CommentOnIdeaHandler, ConvertIdeaHandler, EnhanceDescriptionHandler, ListIdeasHandler,
    SubmitIdeaHandler, UpdateIdeaStatusHandler, VoteIdeaHandler,
};
use crate::application::handlers::project::{
    AddForumPostHandler, AddForumReplyHandler, AddProgressReportHandler, CreateProjectHandler,
    GetProjectHandler, ListProjectsHandler, UpdateProjectHandler,
};
use crate::application::PortalStore;
use crate::ports::CivicIntelligence;

use super::assistant::{assistant_routes, AssistantHandlers};
use super::budget::{budget_routes, BudgetHandlers};
use super::dashboard::{dashboard_routes, DashboardHandlers};
use super::ideas::{idea_routes, IdeaHandlers};
use super::projects::{project_routes, ProjectHandlers};

/// Builds the API router over a loaded store and an AI collaborator.
pub async fn portal_router(
    store: Arc<PortalStore>,
    intelligence: Arc<dyn CivicIntelligence>,
) -> Router {
    let engine = Arc::new(AggregationEngine::new(intelligence.clone()));
    let list_ideas = Arc::new(ListIdeasHandler::new(store.clone()));
    let list_projects = Arc::new(ListProjectsHandler::new(store.clone()));

    let ideas = IdeaHandlers {
        list: list_ideas.clone(),
        submit: Arc::new(SubmitIdeaHandler::new(store.clone(), intelligence.clone())),
        vote: Arc::new(VoteIdeaHandler::new(store.clone())),
        comment: Arc::new(CommentOnIdeaHandler::new(store.clone())),
        update_status: Arc::new(UpdateIdeaStatusHandler::new(store.clone())),
        convert: Arc::new(ConvertIdeaHandler::new(store.clone())),
        enhance: Arc::new(EnhanceDescriptionHandler::new(intelligence.clone())),
    };

    let projects = ProjectHandlers {
        list: list_projects.clone(),
        get: Arc::new(GetProjectHandler::new(store.clone())),
        create: Arc::new(CreateProjectHandler::new(store.clone())),
        update: Arc::new(UpdateProjectHandler::new(store.clone())),
        add_report: Arc::new(AddProgressReportHandler::new(store.clone())),
        add_post: Arc::new(AddForumPostHandler::new(store.clone())),
        add_reply: Arc::new(AddForumReplyHandler::new(store.clone())),
    };

    let budget = BudgetHandlers {
        overview: Arc::new(GetBudgetOverviewHandler::new(store.clone())),
        candidates: Arc::new(GetBudgetCandidatesHandler::new(store.clone(), engine.clone())),
        submit: Arc::new(SubmitAllocationHandler::new(store.clone())),
    };

    let dashboard = DashboardHandlers {
        dashboard: Arc::new(GetDashboardHandler::new(store.clone(), engine)),
        ideas: list_ideas,
        projects: list_projects,
    };

    let assistant = AssistantHandlers {
        service: Arc::new(AssistantService::resume(store, intelligence).await),
    };

    let api = Router::new()
        .nest("/ideas", idea_routes(ideas))
        .nest("/projects", project_routes(projects))
        .nest("/budget", budget_routes(budget))
        .nest("/assistant", assistant_routes(assistant))
        .merge(dashboard_routes(dashboard));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .nest("/api", api)
}
