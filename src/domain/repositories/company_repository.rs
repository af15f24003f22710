use async_trait::async_trait;

use super::RepositoryError;
use crate::domain::entities::{Company, CompanyChanges, NewCompany};

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<Company>, RepositoryError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Company>, RepositoryError>;
    /// Fails with `ValidationError` when the name is already taken.
    async fn create(&self, company: NewCompany) -> Result<Company, RepositoryError>;
    async fn update(&self, id: i64, changes: CompanyChanges) -> Result<Option<Company>, RepositoryError>;
    /// Removes the company together with its job postings.
    async fn delete(&self, id: i64) -> Result<bool, RepositoryError>;
}
