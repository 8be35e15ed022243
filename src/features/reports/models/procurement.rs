use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::query_builder::Separated;
use sqlx::{FromRow, Postgres};
use utoipa::ToSchema;

use crate::features::reports::dtos::{CreateProcurementReportDto, UpdateProcurementReportDto};
use crate::features::reports::resource::ReportResource;
use crate::shared::constants::FINANCE_ROLES;

/// Procurement report
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProcurementReport {
    pub id: i64,
    pub report_date: NaiveDate,
    pub supplier: String,
    pub items: i32,
    pub total_cost: Decimal,
    pub description: Option<String>,
    pub created_by: Option<i64>,
    pub updated_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_archived: bool,
}

impl ReportResource for ProcurementReport {
    const TABLE: &'static str = "procurement_reports";
    const RESOURCE_PATH: &'static str = "procurement-reports";
    const RESOURCE_NAME: &'static str = "Procurement report";
    const COLUMNS: &'static [&'static str] = &[
        "report_date",
        "supplier",
        "items",
        "total_cost",
        "description",
    ];
    const SORTABLE_FIELDS: &'static [&'static str] = &[
        "id",
        "report_date",
        "supplier",
        "total_cost",
        "created_at",
        "updated_at",
    ];
    const ALLOWED_ROLES: &'static [&'static str] = FINANCE_ROLES;

    type Create = CreateProcurementReportDto;
    type Update = UpdateProcurementReportDto;

    fn from_create(input: Self::Create) -> Self {
        Self {
            id: 0,
            report_date: input.report_date,
            supplier: input.supplier,
            items: input.items,
            total_cost: input.total_cost,
            description: input.description,
            created_by: None,
            updated_by: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            is_archived: false,
        }
    }

    fn apply_update(&mut self, patch: Self::Update) {
        if let Some(report_date) = patch.report_date {
            self.report_date = report_date;
        }
        if let Some(supplier) = patch.supplier {
            self.supplier = supplier;
        }
        if let Some(items) = patch.items {
            self.items = items;
        }
        if let Some(total_cost) = patch.total_cost {
            self.total_cost = total_cost;
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
    }

    fn push_values<'qb, 'args: 'qb>(
        &'args self,
        sep: &mut Separated<'qb, 'args, Postgres, &'static str>,
    ) {
        sep.push_bind(self.report_date);
        sep.push_bind(self.supplier.as_str());
        sep.push_bind(self.items);
        sep.push_bind(self.total_cost);
        sep.push_bind(self.description.as_deref());
    }

    fn id(&self) -> i64 {
        self.id
    }
}
