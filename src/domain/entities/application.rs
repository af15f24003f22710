use super::require_text;
use crate::domain::value_objects::Stage;

#[derive(Debug, Clone, PartialEq)]
pub struct JobApplication {
    pub id: i64,
    pub job_posting_id: Option<i64>,
    pub company_name: String,
    pub role: String,
    pub applied_at: Option<String>,
    pub deadline_at: Option<String>,
    pub stage: Stage,
    pub notes: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewApplication {
    pub job_posting_id: Option<i64>,
    pub company_name: String,
    pub role: String,
    pub applied_at: Option<String>,
    pub deadline_at: Option<String>,
    pub stage: Stage,
    pub notes: Option<String>,
}

impl NewApplication {
    pub fn new(company_name: &str, role: &str) -> Result<Self, String> {
        Ok(Self {
            job_posting_id: None,
            company_name: require_text("companyName", company_name)?,
            role: require_text("role", role)?,
            applied_at: None,
            deadline_at: None,
            stage: Stage::default(),
            notes: None,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationChanges {
    pub company_name: Option<String>,
    pub role: Option<String>,
    pub applied_at: Option<String>,
    pub deadline_at: Option<String>,
    pub stage: Option<Stage>,
    pub notes: Option<String>,
}

impl ApplicationChanges {
    pub fn stage(stage: Stage) -> Self {
        Self {
            stage: Some(stage),
            ..Default::default()
        }
    }

    pub fn normalized(self) -> Result<Self, String> {
        let company_name = match self.company_name {
            Some(value) => Some(require_text("companyName", &value)?),
            None => None,
        };
        let role = match self.role {
            Some(value) => Some(require_text("role", &value)?),
            None => None,
        };
        Ok(Self {
            company_name,
            role,
            ..self
        })
    }

    pub fn apply_to(&self, current: &JobApplication, now: &str) -> JobApplication {
        JobApplication {
            id: current.id,
            job_posting_id: current.job_posting_id,
            company_name: self
                .company_name
                .clone()
                .unwrap_or_else(|| current.company_name.clone()),
            role: self.role.clone().unwrap_or_else(|| current.role.clone()),
            applied_at: self.applied_at.clone().or_else(|| current.applied_at.clone()),
            deadline_at: self
                .deadline_at
                .clone()
                .or_else(|| current.deadline_at.clone()),
            stage: self.stage.unwrap_or(current.stage),
            notes: self.notes.clone().or_else(|| current.notes.clone()),
            created_at: current.created_at.clone(),
            updated_at: now.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn application() -> JobApplication {
        JobApplication {
            id: 3,
            job_posting_id: Some(9),
            company_name: "Agibot".to_string(),
            role: "Motion Control Intern".to_string(),
            applied_at: Some("2025-01-02".to_string()),
            deadline_at: None,
            stage: Stage::OnlineAssessment,
            notes: Some("referral".to_string()),
            created_at: "2025-01-02T00:00:00.000Z".to_string(),
            updated_at: "2025-01-02T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_new_application_defaults_to_applied() {
        let app = NewApplication::new(" Agibot ", " Intern ").unwrap();
        assert_eq!(app.company_name, "Agibot");
        assert_eq!(app.role, "Intern");
        assert_eq!(app.stage, Stage::Applied);
        assert!(NewApplication::new("Agibot", "").is_err());
    }

    #[test]
    fn test_stage_change_keeps_other_fields() {
        let updated = ApplicationChanges::stage(Stage::Rejected)
            .apply_to(&application(), "2025-02-01T00:00:00.000Z");

        assert_eq!(updated.stage, Stage::Rejected);
        assert_eq!(updated.job_posting_id, Some(9));
        assert_eq!(updated.notes.as_deref(), Some("referral"));
        assert_eq!(updated.applied_at.as_deref(), Some("2025-01-02"));
        assert_eq!(updated.updated_at, "2025-02-01T00:00:00.000Z");
    }
}
