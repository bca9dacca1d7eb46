//! Sort expression parsing and allow-list validation.
//!
//! A sort expression is the raw `?sort=` query value, e.g. `-budget,name`.
//! Parsing never fails; validation decides whether every requested field is
//! sortable and, if so, hands back typed keys that are safe to turn into SQL.

use std::collections::BTreeSet;

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Prefix marking a descending sort key.
pub const DESCENDING_PREFIX: char = '-';

/// Separator between sort keys.
pub const KEY_SEPARATOR: char = ',';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// SQL keyword for this direction.
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

// ---------------------------------------------------------------------------
// Parsed (unvalidated) expression
// ---------------------------------------------------------------------------

/// One `field` / `-field` token of a sort expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortKey {
    pub field: String,
    pub direction: SortDirection,
}

/// Ordered sort keys, primary key first.
///
/// Field names are not checked here; see [`SortSpec::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortSpec {
    keys: Vec<SortKey>,
}

impl SortSpec {
    /// Parse a raw sort expression.
    ///
    /// - `None` and `""` yield no keys.
    /// - Tokens are split on `,`; empty tokens are skipped.
    /// - A single leading `-` selects descending order and is stripped.
    /// - When a field repeats, its first occurrence is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use portfolio_core::sorting::{SortDirection, SortSpec};
    /// let spec = SortSpec::parse(Some("-budget,name"));
    /// assert_eq!(spec.keys()[0].field, "budget");
    /// assert_eq!(spec.keys()[0].direction, SortDirection::Desc);
    /// assert_eq!(spec.keys()[1].direction, SortDirection::Asc);
    /// ```
    pub fn parse(raw: Option<&str>) -> Self {
        let mut keys: Vec<SortKey> = Vec::new();

        for token in raw.unwrap_or_default().split(KEY_SEPARATOR) {
            if token.is_empty() {
                continue;
            }

            let (field, direction) = match token.strip_prefix(DESCENDING_PREFIX) {
                Some(rest) => (rest, SortDirection::Desc),
                None => (token, SortDirection::Asc),
            };

            if keys.iter().any(|k| k.field == field) {
                continue;
            }

            keys.push(SortKey {
                field: field.to_string(),
                direction,
            });
        }

        Self { keys }
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Distinct field names requested, regardless of order or direction.
    pub fn field_names(&self) -> BTreeSet<&str> {
        self.keys.iter().map(|k| k.field.as_str()).collect()
    }

    /// Check the requested fields against `F`'s allow-list.
    ///
    /// The request is admissible iff its field set is a subset of
    /// [`SortableField::ALLOWED`]. A single unknown field rejects the whole
    /// expression. On success the keys are returned in priority order.
    pub fn validate<F: SortableField>(&self) -> Result<Vec<SortOrder<F>>, UnsupportedSortField> {
        let allowed: BTreeSet<&str> = F::ALLOWED.iter().copied().collect();
        let requested = self.field_names();

        if !requested.is_subset(&allowed) {
            return Err(UnsupportedSortField {
                fields: requested
                    .difference(&allowed)
                    .map(|f| f.to_string())
                    .collect(),
            });
        }

        Ok(self
            .keys
            .iter()
            .filter_map(|k| {
                F::from_name(&k.field).map(|field| SortOrder {
                    field,
                    direction: k.direction,
                })
            })
            .collect())
    }
}

// ---------------------------------------------------------------------------
// Validated keys
// ---------------------------------------------------------------------------

/// A resource attribute that may appear in a sort expression.
pub trait SortableField: Copy + Sized {
    /// Permitted field names, in lexicographic order.
    const ALLOWED: &'static [&'static str];

    /// Map an allow-listed name to its typed field.
    fn from_name(name: &str) -> Option<Self>;
}

/// A validated sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortOrder<F> {
    pub field: F,
    pub direction: SortDirection,
}

/// Returned when a sort expression names a field outside the allow-list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported sort attribute: {}", .fields.join(", "))]
pub struct UnsupportedSortField {
    /// The offending field names, deduplicated and sorted.
    pub fields: Vec<String>,
}

/// Sortable attributes of a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectSortField {
    Budget,
    Name,
}

impl ProjectSortField {
    pub fn name(self) -> &'static str {
        match self {
            ProjectSortField::Budget => "budget",
            ProjectSortField::Name => "name",
        }
    }
}

impl SortableField for ProjectSortField {
    const ALLOWED: &'static [&'static str] = &["budget", "name"];

    fn from_name(name: &str) -> Option<Self> {
        match name {
            "budget" => Some(ProjectSortField::Budget),
            "name" => Some(ProjectSortField::Name),
            _ => None,
        }
    }
}

/// A validated project sort key.
pub type ProjectOrder = SortOrder<ProjectSortField>;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn pairs(spec: &SortSpec) -> Vec<(&str, SortDirection)> {
        spec.keys()
            .iter()
            .map(|k| (k.field.as_str(), k.direction))
            .collect()
    }

    // -- parse ---------------------------------------------------------------

    #[test]
    fn parse_none_is_empty() {
        assert!(SortSpec::parse(None).is_empty());
    }

    #[test]
    fn parse_empty_string_is_empty() {
        assert!(SortSpec::parse(Some("")).is_empty());
    }

    #[test]
    fn parse_keeps_token_order() {
        let spec = SortSpec::parse(Some("name,budget"));
        assert_eq!(
            pairs(&spec),
            vec![("name", SortDirection::Asc), ("budget", SortDirection::Asc)]
        );
    }

    #[test]
    fn parse_dash_prefix_is_descending() {
        let spec = SortSpec::parse(Some("-budget"));
        assert_eq!(pairs(&spec), vec![("budget", SortDirection::Desc)]);
    }

    #[test]
    fn parse_mixed_directions() {
        let spec = SortSpec::parse(Some("-budget,name"));
        assert_eq!(
            pairs(&spec),
            vec![("budget", SortDirection::Desc), ("name", SortDirection::Asc)]
        );
    }

    #[test]
    fn parse_first_duplicate_wins() {
        let spec = SortSpec::parse(Some("name,-budget,-name"));
        assert_eq!(
            pairs(&spec),
            vec![("name", SortDirection::Asc), ("budget", SortDirection::Desc)]
        );
    }

    #[test]
    fn parse_skips_empty_tokens() {
        let spec = SortSpec::parse(Some(",name,,budget,"));
        assert_eq!(
            pairs(&spec),
            vec![("name", SortDirection::Asc), ("budget", SortDirection::Asc)]
        );
    }

    #[test]
    fn parse_strips_only_one_dash() {
        let spec = SortSpec::parse(Some("--name"));
        assert_eq!(pairs(&spec), vec![("-name", SortDirection::Desc)]);
    }

    #[test]
    fn parse_keeps_unknown_fields() {
        let spec = SortSpec::parse(Some("id,-created_at"));
        assert_eq!(
            pairs(&spec),
            vec![("id", SortDirection::Asc), ("created_at", SortDirection::Desc)]
        );
    }

    // -- validate ------------------------------------------------------------

    #[test]
    fn validate_empty_spec_is_admissible() {
        let order = SortSpec::parse(None).validate::<ProjectSortField>().unwrap();
        assert!(order.is_empty());
    }

    #[test]
    fn validate_accepts_allowed_fields_in_any_order() {
        for raw in ["name", "budget", "name,budget", "budget,name", "-name,-budget"] {
            assert!(
                SortSpec::parse(Some(raw))
                    .validate::<ProjectSortField>()
                    .is_ok(),
                "{raw} should be admissible"
            );
        }
    }

    #[test]
    fn validate_accepts_repeated_allowed_fields() {
        let order = SortSpec::parse(Some("name,name,-name"))
            .validate::<ProjectSortField>()
            .unwrap();
        assert_eq!(
            order,
            vec![SortOrder {
                field: ProjectSortField::Name,
                direction: SortDirection::Asc,
            }]
        );
    }

    #[test]
    fn validate_returns_typed_keys_in_priority_order() {
        let order = SortSpec::parse(Some("-budget,name"))
            .validate::<ProjectSortField>()
            .unwrap();
        assert_eq!(
            order,
            vec![
                SortOrder {
                    field: ProjectSortField::Budget,
                    direction: SortDirection::Desc,
                },
                SortOrder {
                    field: ProjectSortField::Name,
                    direction: SortDirection::Asc,
                },
            ]
        );
    }

    #[test]
    fn validate_rejects_unknown_field() {
        let result = SortSpec::parse(Some("customer_name")).validate::<ProjectSortField>();
        assert_matches!(result, Err(UnsupportedSortField { fields }) if fields == vec!["customer_name"]);
    }

    #[test]
    fn validate_rejects_whole_expression_with_one_unknown_field() {
        let result = SortSpec::parse(Some("name,-id,budget")).validate::<ProjectSortField>();
        assert_matches!(result, Err(UnsupportedSortField { fields }) if fields == vec!["id"]);
    }

    #[test]
    fn validate_reports_all_unknown_fields_sorted() {
        let err = SortSpec::parse(Some("zeta,name,alpha"))
            .validate::<ProjectSortField>()
            .unwrap_err();
        assert_eq!(err.fields, vec!["alpha", "zeta"]);
        assert_eq!(err.to_string(), "unsupported sort attribute: alpha, zeta");
    }

    #[test]
    fn allow_list_is_sorted() {
        let mut sorted = ProjectSortField::ALLOWED.to_vec();
        sorted.sort_unstable();
        assert_eq!(sorted, ProjectSortField::ALLOWED);
    }

    #[test]
    fn project_field_names_round_trip() {
        for name in ProjectSortField::ALLOWED {
            let field = ProjectSortField::from_name(name).unwrap();
            assert_eq!(field.name(), *name);
        }
    }

    #[test]
    fn direction_sql_keywords() {
        assert_eq!(SortDirection::Asc.as_sql(), "ASC");
        assert_eq!(SortDirection::Desc.as_sql(), "DESC");
    }
}
