use serde::{Deserialize, Serialize};

use crate::domain::entities::{ApplicationChanges, JobApplication, NewApplication};
use crate::domain::value_objects::Stage;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDto {
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

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateApplicationRequestDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_posting_id: Option<i64>,
    pub company_name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateApplicationRequestDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deadline_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApplicationQueryDto {
    pub stage: Option<String>,
}

impl From<JobApplication> for ApplicationDto {
    fn from(app: JobApplication) -> Self {
        Self {
            id: app.id,
            job_posting_id: app.job_posting_id,
            company_name: app.company_name,
            role: app.role,
            applied_at: app.applied_at,
            deadline_at: app.deadline_at,
            stage: app.stage.label().to_string(),
            notes: app.notes,
            created_at: app.created_at,
            updated_at: app.updated_at,
        }
    }
}

impl TryFrom<CreateApplicationRequestDto> for NewApplication {
    type Error = String;

    fn try_from(request: CreateApplicationRequestDto) -> Result<Self, Self::Error> {
        let mut app = NewApplication::new(&request.company_name, &request.role)?;
        app.job_posting_id = request.job_posting_id;
        app.applied_at = request.applied_at;
        app.deadline_at = request.deadline_at;
        if let Some(stage) = request.stage {
            app.stage = Stage::from_string(&stage)?;
        }
        app.notes = request.notes;
        Ok(app)
    }
}

impl TryFrom<UpdateApplicationRequestDto> for ApplicationChanges {
    type Error = String;

    fn try_from(request: UpdateApplicationRequestDto) -> Result<Self, Self::Error> {
        let stage = request
            .stage
            .as_deref()
            .map(Stage::from_string)
            .transpose()?;

        ApplicationChanges {
            company_name: request.company_name,
            role: request.role,
            applied_at: request.applied_at,
            deadline_at: request.deadline_at,
            stage,
            notes: request.notes,
        }
        .normalized()
    }
}
