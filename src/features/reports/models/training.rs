use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use sqlx::query_builder::Separated;
use sqlx::{FromRow, Postgres};
use utoipa::ToSchema;

use crate::features::reports::dtos::{CreateTrainingReportDto, UpdateTrainingReportDto};
use crate::features::reports::resource::ReportResource;
use crate::shared::constants::REPORT_ROLES;

/// Vocational training report
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrainingReport {
    pub id: i64,
    pub report_date: NaiveDate,
    pub course: String,
    pub skill_level: String,
    pub gender: String,
    pub trainees: i32,
    pub sessions: i32,
    pub completed: i32,
    pub created_by: Option<i64>,
    pub updated_by: Option<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_archived: bool,
}

impl ReportResource for TrainingReport {
    const TABLE: &'static str = "training_reports";
    const RESOURCE_PATH: &'static str = "training-reports";
    const RESOURCE_NAME: &'static str = "Training report";
    const COLUMNS: &'static [&'static str] = &[
        "report_date",
        "course",
        "skill_level",
        "gender",
        "trainees",
        "sessions",
        "completed",
    ];
    const SORTABLE_FIELDS: &'static [&'static str] = &[
        "id",
        "report_date",
        "course",
        "trainees",
        "created_at",
        "updated_at",
    ];
    const ALLOWED_ROLES: &'static [&'static str] = REPORT_ROLES;

    type Create = CreateTrainingReportDto;
    type Update = UpdateTrainingReportDto;

    fn from_create(input: Self::Create) -> Self {
        Self {
            id: 0,
            report_date: input.report_date,
            course: input.course,
            skill_level: input.skill_level,
            gender: input.gender,
            trainees: input.trainees,
            sessions: input.sessions,
            completed: input.completed,
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
        if let Some(course) = patch.course {
            self.course = course;
        }
        if let Some(skill_level) = patch.skill_level {
            self.skill_level = skill_level;
        }
        if let Some(gender) = patch.gender {
            self.gender = gender;
        }
        if let Some(trainees) = patch.trainees {
            self.trainees = trainees;
        }
        if let Some(sessions) = patch.sessions {
            self.sessions = sessions;
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
    }

    fn push_values<'qb, 'args: 'qb>(
        &'args self,
        sep: &mut Separated<'qb, 'args, Postgres, &'static str>,
    ) {
        sep.push_bind(self.report_date);
        sep.push_bind(self.course.as_str());
        sep.push_bind(self.skill_level.as_str());
        sep.push_bind(self.gender.as_str());
        sep.push_bind(self.trainees);
        sep.push_bind(self.sessions);
        sep.push_bind(self.completed);
    }

    fn id(&self) -> i64 {
        self.id
    }
}
