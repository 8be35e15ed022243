use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::query_builder::Separated;
use sqlx::{FromRow, Postgres};
use utoipa::ToSchema;

use crate::features::reports::dtos::{CreateRationReportDto, UpdateRationReportDto};
use crate::features::reports::resource::ReportResource;
use crate::shared::constants::REPORT_ROLES;

/// Daily ration distribution report.
///
/// `total` is derived: quantity + addition - left. The `left` API field is
/// stored as `left_over` (LEFT is taken in SQL).
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RationReport {
    pub id: i64,
    pub report_date: NaiveDate,
    pub quantity: i32,
    pub addition: i32,
    #[serde(rename = "left")]
    pub left_over: i32,
    pub total: i32,
    pub orphans: i32,
    pub divorced: i32,
    pub disabled: i32,
    pub indigent: i32,
    pub created_by: Option<i64>,
    pub updated_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_archived: bool,
}

impl ReportResource for RationReport {
    const TABLE: &'static str = "ration_reports";
    const RESOURCE_PATH: &'static str = "ration-reports";
    const RESOURCE_NAME: &'static str = "Ration report";
    const COLUMNS: &'static [&'static str] = &[
        "report_date",
        "quantity",
        "addition",
        "left_over",
        "total",
        "orphans",
        "divorced",
        "disabled",
        "indigent",
    ];
    const SORTABLE_FIELDS: &'static [&'static str] = &[
        "id",
        "report_date",
        "quantity",
        "total",
        "created_at",
        "updated_at",
    ];
    const ALLOWED_ROLES: &'static [&'static str] = REPORT_ROLES;

    type Create = CreateRationReportDto;
    type Update = UpdateRationReportDto;

    fn from_create(input: Self::Create) -> Self {
        Self {
            id: 0,
            report_date: input.report_date,
            quantity: input.quantity,
            addition: input.addition,
            left_over: input.left_over,
            total: 0,
            orphans: input.orphans,
            divorced: input.divorced,
            disabled: input.disabled,
            indigent: input.indigent,
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
        if let Some(quantity) = patch.quantity {
            self.quantity = quantity;
        }
        if let Some(addition) = patch.addition {
            self.addition = addition;
        }
        if let Some(left_over) = patch.left_over {
            self.left_over = left_over;
        }
        if let Some(orphans) = patch.orphans {
            self.orphans = orphans;
        }
        if let Some(divorced) = patch.divorced {
            self.divorced = divorced;
        }
        if let Some(disabled) = patch.disabled {
            self.disabled = disabled;
        }
        if let Some(indigent) = patch.indigent {
            self.indigent = indigent;
        }
    }

    fn recompute(&mut self) {
        self.total = self.quantity + self.addition - self.left_over;
    }

    fn push_values<'qb, 'args: 'qb>(
        &'args self,
        sep: &mut Separated<'qb, 'args, Postgres, &'static str>,
    ) {
        sep.push_bind(self.report_date);
        sep.push_bind(self.quantity);
        sep.push_bind(self.addition);
        sep.push_bind(self.left_over);
        sep.push_bind(self.total);
        sep.push_bind(self.orphans);
        sep.push_bind(self.divorced);
        sep.push_bind(self.disabled);
        sep.push_bind(self.indigent);
    }

    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_dto(quantity: i32, addition: i32, left_over: i32) -> CreateRationReportDto {
        CreateRationReportDto {
            report_date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            quantity,
            addition,
            left_over,
            orphans: 0,
            divorced: 0,
            disabled: 0,
            indigent: 0,
        }
    }

    #[test]
    fn test_total_recomputed_on_create() {
        let mut report = RationReport::from_create(create_dto(5, 0, 1));
        report.recompute();
        assert_eq!(report.total, 4);
        assert!(!report.is_archived);
    }

    #[test]
    fn test_total_recomputed_after_patch() {
        let mut report = RationReport::from_create(create_dto(5, 0, 1));
        report.recompute();

        report.apply_update(UpdateRationReportDto {
            addition: Some(2),
            ..Default::default()
        });
        report.recompute();

        assert_eq!(report.total, 6);
    }

    #[test]
    fn test_update_touching_all_derived_inputs() {
        let mut report = RationReport::from_create(create_dto(1, 1, 1));
        report.recompute();

        report.apply_update(UpdateRationReportDto {
            quantity: Some(10),
            addition: Some(3),
            left_over: Some(2),
            ..Default::default()
        });
        report.recompute();

        assert_eq!(report.total, 11);
    }

    #[test]
    fn test_untouched_fields_survive_merge() {
        let mut report = RationReport::from_create(CreateRationReportDto {
            orphans: 7,
            ..create_dto(5, 0, 1)
        });
        report.recompute();

        report.apply_update(UpdateRationReportDto {
            divorced: Some(3),
            ..Default::default()
        });
        report.recompute();

        assert_eq!(report.orphans, 7);
        assert_eq!(report.divorced, 3);
        assert_eq!(report.total, 4);
    }
}
