//! Project entity model and DTOs.

use bigdecimal::BigDecimal;
use portfolio_core::pagination::PageInfo;
use portfolio_core::types::{DbId, Timestamp};
use portfolio_core::decimal::parse_decimal;
use portfolio_core::validation::{validate_amount, validate_present, MSG_BLANK, MSG_NOT_A_NUMBER};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationErrors};

/// Attribute order used when reporting validation failures.
pub const ATTRIBUTE_ORDER: &[&str] = &["name", "customer_name", "budget", "technologies"];

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub customer_name: Option<String>,
    pub budget: BigDecimal,
    pub technologies: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Client-supplied attributes for a new project, before validation.
///
/// `budget` stays a raw JSON value until validation so that a non-numeric
/// budget is reported as an attribute error and numbers keep their digits.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(required(message = "can't be blank"), custom(function = "validate_present"))]
    pub name: Option<String>,
    pub customer_name: Option<String>,
    #[validate(required(message = "can't be blank"), custom(function = "validate_amount"))]
    pub budget: Option<serde_json::Value>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

impl CreateProject {
    /// Run the attribute rules and, if they all pass, produce the insert DTO.
    pub fn validated(self) -> Result<NewProject, ValidationErrors> {
        self.validate()?;

        let budget = self.budget.as_ref().and_then(parse_decimal);
        match (self.name, budget) {
            (Some(name), Some(budget)) => Ok(NewProject {
                name,
                customer_name: self.customer_name,
                budget,
                technologies: self.technologies,
            }),
            (name, budget) => {
                // Unreachable while `required` and `validate_amount` guard both fields.
                let mut errors = ValidationErrors::new();
                if name.is_none() {
                    errors.add("name", blank_error());
                }
                if budget.is_none() {
                    errors.add(
                        "budget",
                        validator::ValidationError::new("not_a_number")
                            .with_message(MSG_NOT_A_NUMBER.into()),
                    );
                }
                Err(errors)
            }
        }
    }
}

fn blank_error() -> validator::ValidationError {
    validator::ValidationError::new("required").with_message(MSG_BLANK.into())
}

/// A validated project ready to insert.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub name: String,
    pub customer_name: Option<String>,
    pub budget: BigDecimal,
    pub technologies: Vec<String>,
}

/// One page of projects plus its position in the full listing.
#[derive(Debug, Clone)]
pub struct ProjectPage {
    pub items: Vec<Project>,
    pub info: PageInfo,
}
