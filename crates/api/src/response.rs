//! JSON:API-flavoured response documents.
//!
//! Listings render the reduced attribute set directly under `data`; a single
//! project is wrapped in a resource object with `type`, `id` and a `self` link.
//! Errors use either a flat status body (`title`/`description`/`status`) or an
//! `errors` array with one entry per failed attribute.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use portfolio_core::decimal::format_decimal;
use portfolio_core::types::DbId;
use portfolio_core::validation::FieldError;
use portfolio_db::models::project::Project;
use serde::Serialize;

use crate::links::{PaginationLinks, ResourceLinks};
use crate::listing::ListingResult;

/// `type` discriminator of project resource objects.
pub const PROJECT_TYPE: &str = "projects";

/// Status code carried by each entry of a field-validation `errors` array.
///
/// Deliberately differs from the enclosing 400 response status.
pub const FIELD_ERROR_STATUS: &str = "422";

// ---------------------------------------------------------------------------
// Success documents
// ---------------------------------------------------------------------------

/// Public attributes of a project. `budget` is a decimal string such as
/// `"22.0"` or `"1200.5"`.
#[derive(Debug, Serialize)]
pub struct ProjectAttributes<'a> {
    pub name: &'a str,
    pub customer_name: Option<&'a str>,
    pub budget: String,
    pub technologies: &'a [String],
}

impl<'a> From<&'a Project> for ProjectAttributes<'a> {
    fn from(project: &'a Project) -> Self {
        Self {
            name: &project.name,
            customer_name: project.customer_name.as_deref(),
            budget: format_decimal(&project.budget),
            technologies: &project.technologies,
        }
    }
}

/// `{ "data": [attributes...], "links": {...} }`
#[derive(Debug, Serialize)]
pub struct CollectionDocument<'a> {
    pub data: Vec<ProjectAttributes<'a>>,
    pub links: &'a PaginationLinks,
}

#[derive(Debug, Serialize)]
pub struct ResourceObject<'a> {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub id: DbId,
    pub attributes: ProjectAttributes<'a>,
}

#[derive(Debug, Serialize)]
pub struct SelfLink {
    #[serde(rename = "self")]
    pub current: String,
}

/// `{ "data": { "type", "id", "attributes" }, "links": { "self" } }`
#[derive(Debug, Serialize)]
pub struct ResourceDocument<'a> {
    pub data: ResourceObject<'a>,
    pub links: SelfLink,
}

impl<'a> ResourceDocument<'a> {
    pub fn project(project: &'a Project, links: &ResourceLinks) -> Self {
        Self {
            data: ResourceObject {
                kind: PROJECT_TYPE,
                id: project.id,
                attributes: ProjectAttributes::from(project),
            },
            links: SelfLink {
                current: links.project(project.id),
            },
        }
    }
}

// ---------------------------------------------------------------------------
// Error documents
// ---------------------------------------------------------------------------

/// Flat error body: `{ "title", "description"?, "status" }`.
#[derive(Debug, Serialize)]
pub struct StatusBody {
    pub title: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub status: String,
}

impl StatusBody {
    pub fn new(status: StatusCode, title: &'static str, description: Option<String>) -> Self {
        Self {
            title,
            description,
            status: status.as_str().to_string(),
        }
    }

    /// Render with `status` as both the HTTP status and the body's `status`.
    pub fn respond(status: StatusCode, title: &'static str, description: Option<String>) -> Response {
        (status, Json(Self::new(status, title, description))).into_response()
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorSource {
    pub pointer: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorObject {
    pub status: &'static str,
    pub source: ErrorSource,
    pub detail: String,
}

impl ErrorObject {
    pub fn new(pointer: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            status: FIELD_ERROR_STATUS,
            source: ErrorSource {
                pointer: pointer.into(),
            },
            detail: detail.into(),
        }
    }

    /// Entry for a failed attribute rule, pointing at `/data/attributes/<field>`.
    pub fn attribute(error: &FieldError) -> Self {
        Self::new(
            format!("/data/attributes/{}", error.field),
            error.message.clone(),
        )
    }
}

/// `{ "errors": [...] }`
#[derive(Debug, Serialize)]
pub struct ErrorDocument {
    pub errors: Vec<ErrorObject>,
}

impl IntoResponse for ErrorDocument {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Listing renderer
// ---------------------------------------------------------------------------

impl IntoResponse for ListingResult {
    fn into_response(self) -> Response {
        match self {
            ListingResult::Invalid { .. } => StatusBody::respond(
                StatusCode::BAD_REQUEST,
                "Bad request",
                Some("Not supported attribute by sorting!".to_string()),
            ),
            ListingResult::Ok { page, links } => {
                let document = CollectionDocument {
                    data: page.items.iter().map(ProjectAttributes::from).collect(),
                    links: &links,
                };
                (StatusCode::OK, Json(document)).into_response()
            }
        }
    }
}
