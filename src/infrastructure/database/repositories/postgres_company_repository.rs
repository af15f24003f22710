use async_trait::async_trait;
use diesel::prelude::*;

use super::detach_applications;
use crate::domain::entities::{Company, CompanyChanges, NewCompany};
use crate::domain::repositories::{CompanyRepository, RepositoryError};
use crate::domain::value_objects::timestamp::now_iso;
use crate::infrastructure::database::connection::{DbPool, run_in_transaction};
use crate::infrastructure::database::models::{CompanyModel, NewCompanyModel, UpdateCompanyModel};
use crate::infrastructure::database::schema::{companies, job_postings};

pub struct PostgresCompanyRepository {
    pool: DbPool,
}

impl PostgresCompanyRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn ensure_name_free(
    conn: &mut PgConnection,
    name: &str,
    except_id: Option<i64>,
) -> Result<(), RepositoryError> {
    let mut query = companies::table
        .filter(companies::name.eq(name))
        .select(companies::id)
        .into_boxed();
    if let Some(id) = except_id {
        query = query.filter(companies::id.ne(id));
    }

    match query.first::<i64>(conn).optional()? {
        Some(_) => Err(RepositoryError::ValidationError(format!(
            "company name '{}' already exists",
            name
        ))),
        None => Ok(()),
    }
}

#[async_trait]
impl CompanyRepository for PostgresCompanyRepository {
    async fn find_all(&self) -> Result<Vec<Company>, RepositoryError> {
        let models = run_in_transaction(&self.pool, |conn| {
            Ok(companies::table
                .order(companies::id.asc())
                .select(CompanyModel::as_select())
                .load(conn)?)
        })
        .await?;

        Ok(models.into_iter().map(Company::from).collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Company>, RepositoryError> {
        let model = run_in_transaction(&self.pool, move |conn| {
            Ok(companies::table
                .find(id)
                .select(CompanyModel::as_select())
                .first(conn)
                .optional()?)
        })
        .await?;

        Ok(model.map(Company::from))
    }

    async fn create(&self, company: NewCompany) -> Result<Company, RepositoryError> {
        let new_model = NewCompanyModel::new(company, now_iso());

        let model = run_in_transaction(&self.pool, move |conn| {
            ensure_name_free(conn, &new_model.name, None)?;
            Ok(diesel::insert_into(companies::table)
                .values(&new_model)
                .returning(CompanyModel::as_returning())
                .get_result(conn)?)
        })
        .await?;

        Ok(model.into())
    }

    async fn update(&self, id: i64, changes: CompanyChanges) -> Result<Option<Company>, RepositoryError> {
        let update_model = UpdateCompanyModel::new(changes, now_iso());

        let model = run_in_transaction(&self.pool, move |conn| {
            if let Some(name) = &update_model.name {
                ensure_name_free(conn, name, Some(id))?;
            }
            Ok(diesel::update(companies::table.find(id))
                .set(&update_model)
                .returning(CompanyModel::as_returning())
                .get_result(conn)
                .optional()?)
        })
        .await?;

        Ok(model.map(Company::from))
    }

    async fn delete(&self, id: i64) -> Result<bool, RepositoryError> {
        let now = now_iso();

        run_in_transaction(&self.pool, move |conn| {
            let job_ids: Vec<i64> = job_postings::table
                .filter(job_postings::company_id.eq(id))
                .select(job_postings::id)
                .load(conn)?;
            detach_applications(conn, &job_ids, &now)?;

            diesel::delete(job_postings::table.filter(job_postings::company_id.eq(id)))
                .execute(conn)?;
            let deleted = diesel::delete(companies::table.find(id)).execute(conn)?;
            Ok(deleted > 0)
        })
        .await
    }
}
