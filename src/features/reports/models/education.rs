use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::query_builder::Separated;
use sqlx::{FromRow, Postgres};
use utoipa::ToSchema;

use crate::features::reports::dtos::{CreateEducationReportDto, UpdateEducationReportDto};
use crate::features::reports::resource::ReportResource;
use crate::shared::constants::REPORT_ROLES;

/// Education program report
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EducationReport {
    pub id: i64,
    pub report_date: NaiveDate,
    pub program: String,
    pub level: String,
    pub students: i32,
    pub teachers: i32,
    pub graduates: i32,
    pub created_by: Option<i64>,
    pub updated_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_archived: bool,
}

impl ReportResource for EducationReport {
    const TABLE: &'static str = "education_reports";
    const RESOURCE_PATH: &'static str = "education-reports";
    const RESOURCE_NAME: &'static str = "Education report";
    const COLUMNS: &'static [&'static str] = &[
        "report_date",
        "program",
        "level",
        "students",
        "teachers",
        "graduates",
    ];
    const SORTABLE_FIELDS: &'static [&'static str] = &[
        "id",
        "report_date",
        "program",
        "students",
        "created_at",
        "updated_at",
    ];
    const ALLOWED_ROLES: &'static [&'static str] = REPORT_ROLES;

    type Create = CreateEducationReportDto;
    type Update = UpdateEducationReportDto;

    fn from_create(input: Self::Create) -> Self {
        Self {
            id: 0,
            report_date: input.report_date,
            program: input.program,
            level: input.level,
            students: input.students,
            teachers: input.teachers,
            graduates: input.graduates,
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
        if let Some(program) = patch.program {
            self.program = program;
        }
        if let Some(level) = patch.level {
            self.level = level;
        }
        if let Some(students) = patch.students {
            self.students = students;
        }
        if let Some(teachers) = patch.teachers {
            self.teachers = teachers;
        }
        if let Some(graduates) = patch.graduates {
            self.graduates = graduates;
        }
    }

    fn push_values<'qb, 'args: 'qb>(
        &'args self,
        sep: &mut Separated<'qb, 'args, Postgres, &'static str>,
    ) {
        sep.push_bind(self.report_date);
        sep.push_bind(self.program.as_str());
        sep.push_bind(self.level.as_str());
        sep.push_bind(self.students);
        sep.push_bind(self.teachers);
        sep.push_bind(self.graduates);
    }

    fn id(&self) -> i64 {
        self.id
    }
}
