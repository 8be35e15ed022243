use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use sqlx::query_builder::Separated;
use sqlx::{FromRow, Postgres};
use utoipa::ToSchema;

use crate::features::reports::dtos::{
    CreateFinancialAssistanceReportDto, UpdateFinancialAssistanceReportDto,
};
use crate::features::reports::resource::ReportResource;
use crate::features::summaries::SummaryDelta;
use crate::shared::constants::FINANCE_ROLES;

/// Financial assistance report.
///
/// Creating one increments the summary row for its category, in the same
/// transaction as the insert.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FinancialAssistanceReport {
    pub id: i64,
    pub report_date: NaiveDate,
    pub category: String,
    pub amount: Decimal,
    pub beneficiaries: i32,
    pub notes: Option<String>,
    pub created_by: Option<i64>,
    pub updated_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_archived: bool,
}

impl ReportResource for FinancialAssistanceReport {
    const TABLE: &'static str = "financial_assistance_reports";
    const RESOURCE_PATH: &'static str = "financial-assistance-reports";
    const RESOURCE_NAME: &'static str = "Financial assistance report";
    const COLUMNS: &'static [&'static str] = &[
        "report_date",
        "category",
        "amount",
        "beneficiaries",
        "notes",
    ];
    const SORTABLE_FIELDS: &'static [&'static str] = &[
        "id",
        "report_date",
        "category",
        "amount",
        "created_at",
        "updated_at",
    ];
    const ALLOWED_ROLES: &'static [&'static str] = FINANCE_ROLES;

    type Create = CreateFinancialAssistanceReportDto;
    type Update = UpdateFinancialAssistanceReportDto;

    fn from_create(input: Self::Create) -> Self {
        Self {
            id: 0,
            report_date: input.report_date,
            category: input.category,
            amount: input.amount,
            beneficiaries: input.beneficiaries,
            notes: input.notes,
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
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(amount) = patch.amount {
            self.amount = amount;
        }
        if let Some(beneficiaries) = patch.beneficiaries {
            self.beneficiaries = beneficiaries;
        }
        if let Some(notes) = patch.notes {
            self.notes = Some(notes);
        }
    }

    fn push_values<'qb, 'args: 'qb>(
        &'args self,
        sep: &mut Separated<'qb, 'args, Postgres, &'static str>,
    ) {
        sep.push_bind(self.report_date);
        sep.push_bind(self.category.as_str());
        sep.push_bind(self.amount);
        sep.push_bind(self.beneficiaries);
        sep.push_bind(self.notes.as_deref());
    }

    fn summary_delta(&self) -> Option<SummaryDelta> {
        Some(SummaryDelta {
            category: self.category.clone(),
            amount: self.amount,
        })
    }

    fn id(&self) -> i64 {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::reports::dtos::CreateFinancialAssistanceReportDto;

    #[test]
    fn test_summary_delta_matches_record() {
        let report = FinancialAssistanceReport::from_create(CreateFinancialAssistanceReportDto {
            report_date: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
            category: "winter-aid".to_string(),
            amount: Decimal::new(12_500, 2),
            beneficiaries: 40,
            notes: None,
        });

        let delta = report.summary_delta().unwrap();
        assert_eq!(delta.category, "winter-aid");
        assert_eq!(delta.amount, Decimal::new(12_500, 2));
    }
}
