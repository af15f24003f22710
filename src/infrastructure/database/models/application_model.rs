use diesel::prelude::*;

use crate::domain::entities::{ApplicationChanges, JobApplication, NewApplication};
use crate::domain::value_objects::Stage;
use crate::infrastructure::database::schema::applications;

#[derive(Debug, Queryable, Identifiable, Selectable)]
#[diesel(table_name = applications)]
#[diesel(primary_key(id))]
pub struct ApplicationModel {
    pub id: i64,
    pub job_posting_id: Option<i64>,
    pub company_name: String,
    pub role: String,
    pub applied_at: Option<String>,
    pub deadline_at: Option<String>,
    pub stage: String,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = applications)]
pub struct NewApplicationModel {
    pub job_posting_id: Option<i64>,
    pub company_name: String,
    pub role: String,
    pub applied_at: Option<String>,
    pub deadline_at: Option<String>,
    pub stage: String,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, AsChangeset)]
#[diesel(table_name = applications)]
pub struct UpdateApplicationModel {
    pub company_name: Option<String>,
    pub role: Option<String>,
    pub applied_at: Option<String>,
    pub deadline_at: Option<String>,
    pub stage: Option<String>,
    pub notes: Option<String>,
    pub updated_at: String,
}

impl NewApplicationModel {
    pub fn new(application: NewApplication, now: String) -> Self {
        Self {
            job_posting_id: application.job_posting_id,
            company_name: application.company_name,
            role: application.role,
            applied_at: application.applied_at,
            deadline_at: application.deadline_at,
            stage: application.stage.label().to_string(),
            notes: application.notes,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

impl UpdateApplicationModel {
    pub fn new(changes: ApplicationChanges, now: String) -> Self {
        Self {
            company_name: changes.company_name,
            role: changes.role,
            applied_at: changes.applied_at,
            deadline_at: changes.deadline_at,
            stage: changes.stage.map(|stage| stage.label().to_string()),
            notes: changes.notes,
            updated_at: now,
        }
    }
}

impl TryFrom<ApplicationModel> for JobApplication {
    type Error = String;

    fn try_from(model: ApplicationModel) -> Result<Self, Self::Error> {
        Ok(JobApplication {
            id: model.id,
            job_posting_id: model.job_posting_id,
            company_name: model.company_name,
            role: model.role,
            applied_at: model.applied_at,
            deadline_at: model.deadline_at,
            stage: Stage::from_string(&model.stage)?,
            notes: model.notes,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
