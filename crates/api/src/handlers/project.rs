//! Handlers for the `/projects` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, RawQuery, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use portfolio_core::error::CoreError;
use portfolio_core::types::DbId;
use portfolio_core::validation::field_errors;
use portfolio_db::models::project::{CreateProject, ATTRIBUTE_ORDER};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::listing::{self, ListingResult};
use crate::middleware::api_key::RequireApiKey;
use crate::query::ListProjectsParams;
use crate::response::ResourceDocument;
use crate::state::AppState;

/// Entity name used in not-found errors.
const ENTITY: &str = "project";

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// `POST /projects` body: `{ "data": { "attributes": { ... } } }`.
#[derive(Debug, Deserialize)]
pub struct CreateProjectDocument {
    pub data: CreateProjectData,
}

#[derive(Debug, Deserialize)]
pub struct CreateProjectData {
    pub attributes: CreateProject,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /projects
pub async fn list(
    _: RequireApiKey,
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> AppResult<ListingResult> {
    let params = ListProjectsParams::from_query(query.as_deref());
    let result = listing::list_projects(
        state.projects.as_ref(),
        &state.links,
        params.sort.as_deref(),
        params.page.as_deref(),
    )
    .await?;
    Ok(result)
}

/// GET /projects/{id}
///
/// Ids that are not integers cannot exist, so they are reported as not found.
pub async fn get_by_id(
    _: RequireApiKey,
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Response> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: ENTITY,
            id: raw_id.clone(),
        })
    };

    let id: DbId = raw_id.parse().map_err(|_| not_found())?;
    let project = state
        .projects
        .find_by_id(id)
        .await?
        .ok_or_else(not_found)?;

    Ok(Json(ResourceDocument::project(&project, &state.links)).into_response())
}

/// POST /projects
pub async fn create(
    _: RequireApiKey,
    State(state): State<AppState>,
    body: Result<Json<CreateProjectDocument>, JsonRejection>,
) -> AppResult<Response> {
    let Json(document) = body.map_err(|rejection| AppError::MalformedBody(rejection.body_text()))?;

    let input = document.data.attributes.validated().map_err(|errors| {
        let errors = field_errors(&errors, ATTRIBUTE_ORDER);
        tracing::debug!(failed = errors.len(), "Rejected project attributes");
        AppError::Core(CoreError::InvalidFields(errors))
    })?;

    let project = state.projects.create(&input).await?;
    tracing::info!(project_id = project.id, name = %project.name, "Created project");

    Ok((
        StatusCode::CREATED,
        Json(ResourceDocument::project(&project, &state.links)),
    )
        .into_response())
}
