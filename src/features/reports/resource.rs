//! The one shape every report resource shares: typed records with audit
//! stamps, paginated listing, partial update with derived-field
//! recomputation, and soft deletion behind `is_archived`.
//!
//! Instead of one hand-written service per table, each report type
//! implements [`ReportResource`] and gets its service, handlers and router
//! from the generic implementations in this feature. Adding a report type
//! means one model file, one DTO file and a mount line.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgRow;
use sqlx::query_builder::Separated;
use sqlx::{FromRow, Postgres};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::features::summaries::SummaryDelta;
use crate::shared::constants::DEFAULT_PAGE_SIZE;
use crate::shared::types::PaginationQuery;

/// Descriptor implemented by every archivable report entity.
///
/// `COLUMNS` lists the domain columns in the order `push_values` binds
/// them; the generic service derives its INSERT and UPDATE statements from
/// that pairing. Audit columns, timestamps and `is_archived` are managed by
/// the service and the database, never by implementors.
pub trait ReportResource:
    for<'r> FromRow<'r, PgRow> + Serialize + Send + Sync + Unpin + 'static
{
    /// Table backing this resource
    const TABLE: &'static str;
    /// URL segment under /api, e.g. "ration-reports"
    const RESOURCE_PATH: &'static str;
    /// Human-readable name used in messages and logs
    const RESOURCE_NAME: &'static str;
    /// Domain columns written on insert/update, in `push_values` order
    const COLUMNS: &'static [&'static str];
    /// Fields accepted as `sortField` in list queries
    const SORTABLE_FIELDS: &'static [&'static str];
    /// Roles allowed to reach this resource's endpoints
    const ALLOWED_ROLES: &'static [&'static str];

    type Create: DeserializeOwned + Validate + Send + 'static;
    type Update: DeserializeOwned + Validate + Send + 'static;

    /// Build a record from a validated create payload. Identity, audit and
    /// archive fields are placeholders; the database row returned by the
    /// service is authoritative.
    fn from_create(input: Self::Create) -> Self;

    /// Merge the provided fields of a partial update into the record.
    fn apply_update(&mut self, patch: Self::Update);

    /// Recalculate derived fields after a create or merge.
    fn recompute(&mut self) {}

    /// Bind the domain column values in `COLUMNS` order.
    fn push_values<'qb, 'args: 'qb>(
        &'args self,
        sep: &mut Separated<'qb, 'args, Postgres, &'static str>,
    );

    /// Increment applied to a summary row in the same transaction as the
    /// insert, when this resource feeds one.
    fn summary_delta(&self) -> Option<SummaryDelta> {
        None
    }

    fn id(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Query parameters accepted by every resource list endpoint.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    /// Page number (1-indexed, default: 1)
    #[serde(default = "default_page")]
    pub page: i64,

    /// Number of items per page (default: 10, max: 100)
    #[serde(default = "default_page_size")]
    pub page_size: i64,

    /// Column to order by (default: created_at)
    pub sort_field: Option<String>,

    /// asc or desc (default: desc)
    #[serde(default)]
    pub sort_order: SortOrder,
}

fn default_page() -> i64 {
    1
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            sort_field: None,
            sort_order: SortOrder::Desc,
        }
    }
}

impl ListQuery {
    pub fn pagination(&self) -> PaginationQuery {
        PaginationQuery {
            page: self.page,
            page_size: self.page_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_order_sql() {
        assert_eq!(SortOrder::Asc.as_sql(), "ASC");
        assert_eq!(SortOrder::Desc.as_sql(), "DESC");
    }

    #[test]
    fn test_list_query_defaults() {
        let query: ListQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, DEFAULT_PAGE_SIZE);
        assert!(query.sort_field.is_none());
        assert_eq!(query.sort_order, SortOrder::Desc);
    }

    #[test]
    fn test_list_query_camel_case() {
        let query: ListQuery = serde_json::from_str(
            r#"{"page":2,"pageSize":25,"sortField":"report_date","sortOrder":"asc"}"#,
        )
        .unwrap();
        assert_eq!(query.page, 2);
        assert_eq!(query.page_size, 25);
        assert_eq!(query.sort_field.as_deref(), Some("report_date"));
        assert_eq!(query.sort_order, SortOrder::Asc);
    }
}
