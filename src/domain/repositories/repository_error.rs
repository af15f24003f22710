#[derive(Debug, Clone, PartialEq)]
pub enum RepositoryError {
    NotFound(String),
    ValidationError(String),
    DatabaseError(String),
}

impl RepositoryError {
    pub fn not_found(entity: &str, id: i64) -> Self {
        RepositoryError::NotFound(format!("{} {} not found", entity, id))
    }
}

impl std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RepositoryError::NotFound(msg) => write!(f, "{}", msg),
            RepositoryError::ValidationError(msg) => write!(f, "{}", msg),
            RepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for RepositoryError {}
