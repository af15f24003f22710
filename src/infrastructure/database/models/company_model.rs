use diesel::prelude::*;

use crate::domain::entities::{Company, CompanyChanges, NewCompany};
use crate::infrastructure::database::schema::companies;

#[derive(Debug, Queryable, Identifiable, Selectable)]
#[diesel(table_name = companies)]
#[diesel(primary_key(id))]
pub struct CompanyModel {
    pub id: i64,
    pub name: String,
    pub official_site: Option<String>,
    pub careers_url: Option<String>,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = companies)]
pub struct NewCompanyModel {
    pub name: String,
    pub official_site: Option<String>,
    pub careers_url: Option<String>,
    pub active: bool,
    pub created_at: String,
    pub updated_at: String,
}

/// `None` fields are left out of the UPDATE statement.
#[derive(Debug, AsChangeset)]
#[diesel(table_name = companies)]
pub struct UpdateCompanyModel {
    pub name: Option<String>,
    pub official_site: Option<String>,
    pub careers_url: Option<String>,
    pub active: Option<bool>,
    pub updated_at: String,
}

impl NewCompanyModel {
    pub fn new(company: NewCompany, now: String) -> Self {
        Self {
            name: company.name,
            official_site: company.official_site,
            careers_url: company.careers_url,
            active: company.active,
            created_at: now.clone(),
            updated_at: now,
        }
    }
}

impl UpdateCompanyModel {
    pub fn new(changes: CompanyChanges, now: String) -> Self {
        Self {
            name: changes.name,
            official_site: changes.official_site,
            careers_url: changes.careers_url,
            active: changes.active,
            updated_at: now,
        }
    }
}

impl From<CompanyModel> for Company {
    fn from(model: CompanyModel) -> Self {
        Company {
            id: model.id,
            name: model.name,
            official_site: model.official_site,
            careers_url: model.careers_url,
            active: model.active,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
