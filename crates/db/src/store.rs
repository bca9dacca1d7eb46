//! The project storage seam used by the HTTP layer.
//!
//! Handlers talk to a [`ProjectStore`] instead of a pool so the listing
//! pipeline can run against any backend. [`PgProjectStore`] is the PostgreSQL
//! implementation and owns the configured page size.

use async_trait::async_trait;
use portfolio_core::pagination::PageRequest;
use portfolio_core::sorting::ProjectOrder;
use portfolio_core::types::DbId;

use crate::models::project::{NewProject, Project, ProjectPage};
use crate::repositories::ProjectRepo;
use crate::DbPool;

#[async_trait]
pub trait ProjectStore: Send + Sync {
    /// Rows per page.
    fn page_size(&self) -> i64;

    /// Fetch page `number` (1-based) in `order`, ties broken by id.
    async fn page(&self, order: &[ProjectOrder], number: i64) -> Result<ProjectPage, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Project>, sqlx::Error>;

    async fn create(&self, input: &NewProject) -> Result<Project, sqlx::Error>;
}

/// [`ProjectStore`] backed by [`ProjectRepo`].
#[derive(Debug, Clone)]
pub struct PgProjectStore {
    pool: DbPool,
    page_size: i64,
}

impl PgProjectStore {
    pub fn new(pool: DbPool, page_size: i64) -> Self {
        Self {
            pool,
            page_size: page_size.max(1),
        }
    }
}

#[async_trait]
impl ProjectStore for PgProjectStore {
    fn page_size(&self) -> i64 {
        self.page_size
    }

    async fn page(&self, order: &[ProjectOrder], number: i64) -> Result<ProjectPage, sqlx::Error> {
        ProjectRepo::page(&self.pool, order, PageRequest::new(number, self.page_size)).await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        ProjectRepo::find_by_id(&self.pool, id).await
    }

    async fn create(&self, input: &NewProject) -> Result<Project, sqlx::Error> {
        ProjectRepo::create(&self.pool, input).await
    }
}
