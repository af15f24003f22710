use serde::{Deserialize, Serialize};

use crate::domain::entities::{Company, CompanyChanges, NewCompany};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyDto {
    pub id: i64,
    pub name: String,
    pub official_site: Option<String>,
    pub careers_url: Option<String>,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCompanyRequestDto {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_site: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub careers_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyRequestDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub official_site: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub careers_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

impl From<Company> for CompanyDto {
    fn from(company: Company) -> Self {
        Self {
            id: company.id,
            name: company.name,
            official_site: company.official_site,
            careers_url: company.careers_url,
            active: company.active,
            created_at: company.created_at,
            updated_at: company.updated_at,
        }
    }
}

impl TryFrom<CreateCompanyRequestDto> for NewCompany {
    type Error = String;

    fn try_from(request: CreateCompanyRequestDto) -> Result<Self, Self::Error> {
        NewCompany::new(
            &request.name,
            request.official_site,
            request.careers_url,
            request.active.unwrap_or(true),
        )
    }
}

impl TryFrom<UpdateCompanyRequestDto> for CompanyChanges {
    type Error = String;

    fn try_from(request: UpdateCompanyRequestDto) -> Result<Self, Self::Error> {
        CompanyChanges {
            name: request.name,
            official_site: request.official_site,
            careers_url: request.careers_url,
            active: request.active,
        }
        .normalized()
    }
}
