//! HTTP handlers for project endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::{bad_id, ApiError, ErrorResponse};
use crate::application::handlers::project::{
    AddForumPostCommand, AddForumPostHandler, AddForumReplyCommand, AddForumReplyHandler,
    AddProgressReportCommand, AddProgressReportHandler, CreateProjectCommand,
    CreateProjectHandler, GetProjectHandler, ListProjectsHandler, UpdateProjectCommand,
    UpdateProjectHandler,
};
use crate::domain::aggregation::LocationFilter;
use crate::domain::foundation::{PostId, ProjectId, Timestamp};
use crate::domain::project::{NewForumPost, NewProject, NewReport, OfficialProject};

use super::dto::{ProjectListQuery, ReplyRequest};

#[derive(Clone)]
pub struct ProjectHandlers {
    pub list: Arc<ListProjectsHandler>,
    pub get: Arc<GetProjectHandler>,
    pub create: Arc<CreateProjectHandler>,
    pub update: Arc<UpdateProjectHandler>,
    pub add_report: Arc<AddProgressReportHandler>,
    pub add_post: Arc<AddForumPostHandler>,
    pub add_reply: Arc<AddForumReplyHandler>,
}

/// GET /api/projects - List projects by location and search text
pub async fn list_projects(
    State(handlers): State<ProjectHandlers>,
    Query(query): Query<ProjectListQuery>,
) -> Response {
    let filter = LocationFilter::from_selection(query.sub_county, query.ward);
    Json(handlers.list.handle(&filter, &query.search).await).into_response()
}

/// POST /api/projects - Create a project directly
pub async fn create_project(
    State(handlers): State<ProjectHandlers>,
    Json(project): Json<NewProject>,
) -> Result<Response, ApiError> {
    let project = handlers.create.handle(CreateProjectCommand { project }).await?;
    Ok((StatusCode::CREATED, Json(project)).into_response())
}

/// GET /api/projects/:id - Project with its completion estimate
pub async fn get_project(
    State(handlers): State<ProjectHandlers>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let Ok(project_id) = id.parse::<ProjectId>() else {
        return Ok(bad_id("project", &id));
    };
    let detail = handlers
        .get
        .handle(&project_id, Timestamp::now().date())
        .await?;
    Ok(Json(detail).into_response())
}

/// PUT /api/projects/:id - Replace a project
pub async fn update_project(
    State(handlers): State<ProjectHandlers>,
    Path(id): Path<String>,
    Json(project): Json<OfficialProject>,
) -> Result<Response, ApiError> {
    if project.id.as_str() != id {
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("Project ID in path and body differ")),
        )
            .into_response());
    }
    let project = handlers.update.handle(UpdateProjectCommand { project }).await?;
    Ok(Json(project).into_response())
}

/// POST /api/projects/:id/reports - Add a citizen progress report
pub async fn add_progress_report(
    State(handlers): State<ProjectHandlers>,
    Path(id): Path<String>,
    Json(report): Json<NewReport>,
) -> Result<Response, ApiError> {
    let Ok(project_id) = id.parse::<ProjectId>() else {
        return Ok(bad_id("project", &id));
    };
    let report = handlers
        .add_report
        .handle(AddProgressReportCommand { project_id, report })
        .await?;
    Ok((StatusCode::CREATED, Json(report)).into_response())
}

/// POST /api/projects/:id/forum - Start a discussion thread
pub async fn add_forum_post(
    State(handlers): State<ProjectHandlers>,
    Path(id): Path<String>,
    Json(post): Json<NewForumPost>,
) -> Result<Response, ApiError> {
    let Ok(project_id) = id.parse::<ProjectId>() else {
        return Ok(bad_id("project", &id));
    };
    let post = handlers
        .add_post
        .handle(AddForumPostCommand { project_id, post })
        .await?;
    Ok((StatusCode::CREATED, Json(post)).into_response())
}

/// POST /api/projects/:id/forum/:post_id/replies - Reply to a thread
pub async fn add_forum_reply(
    State(handlers): State<ProjectHandlers>,
    Path((id, post_id)): Path<(String, String)>,
    Json(req): Json<ReplyRequest>,
) -> Result<Response, ApiError> {
    let Ok(project_id) = id.parse::<ProjectId>() else {
        return Ok(bad_id("project", &id));
    };
    let Ok(post_id) = post_id.parse::<PostId>() else {
        return Ok(bad_id("post", &post_id));
    };
    let reply = handlers
        .add_reply
        .handle(AddForumReplyCommand {
            project_id,
            post_id,
            author: req.author,
            text: req.text,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(reply)).into_response())
}
