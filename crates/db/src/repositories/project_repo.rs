//! Repository for the `projects` table.

use portfolio_core::pagination::{PageInfo, PageRequest};
use portfolio_core::sorting::ProjectOrder;
use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{NewProject, Project, ProjectPage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, customer_name, budget, technologies, created_at, updated_at";

/// Final ORDER BY key of every listing, so rows never tie across pages.
const TIEBREAKER: &str = "id ASC";

/// Provides create/read operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (name, customer_name, budget, technologies)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.customer_name)
            .bind(&input.budget)
            .bind(&input.technologies)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Fetch one page of projects in the given order.
    ///
    /// The row count and the page are read inside one REPEATABLE READ
    /// transaction, so `info` always describes the same snapshot as `items`.
    pub async fn page(
        pool: &PgPool,
        order: &[ProjectOrder],
        request: PageRequest,
    ) -> Result<ProjectPage, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ READ ONLY")
            .execute(&mut *tx)
            .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM projects")
            .fetch_one(&mut *tx)
            .await?;

        let query = format!(
            "SELECT {COLUMNS} FROM projects ORDER BY {} LIMIT $1 OFFSET $2",
            order_by_clause(order)
        );
        let items = sqlx::query_as::<_, Project>(&query)
            .bind(request.limit())
            .bind(request.offset())
            .fetch_all(&mut *tx)
            .await?;

        tx.commit().await?;

        tracing::debug!(
            page = request.number,
            size = request.size,
            total,
            returned = items.len(),
            "Fetched project page"
        );

        Ok(ProjectPage {
            items,
            info: PageInfo::new(request, total),
        })
    }
}

/// Render validated sort keys as an ORDER BY list, `id ASC` always last.
///
/// Only allow-listed field names (which are also the column names) are
/// interpolated; user input never reaches the SQL text.
pub fn order_by_clause(order: &[ProjectOrder]) -> String {
    order
        .iter()
        .map(|key| format!("{} {}", key.field.name(), key.direction.as_sql()))
        .chain(std::iter::once(TIEBREAKER.to_string()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use portfolio_core::sorting::{ProjectSortField, SortDirection, SortOrder};

    use super::*;

    #[test]
    fn empty_order_falls_back_to_insertion_order() {
        assert_eq!(order_by_clause(&[]), "id ASC");
    }

    #[test]
    fn keys_keep_priority_and_end_with_tiebreaker() {
        let order = [
            SortOrder {
                field: ProjectSortField::Budget,
                direction: SortDirection::Desc,
            },
            SortOrder {
                field: ProjectSortField::Name,
                direction: SortDirection::Asc,
            },
        ];
        assert_eq!(order_by_clause(&order), "budget DESC, name ASC, id ASC");
    }
}
