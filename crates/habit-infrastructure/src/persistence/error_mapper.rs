use habit_domain::shared::DomainError;

/// Maps sqlx errors onto domain errors, tagged with the table or operation.
pub struct RepositoryErrorMapper;

impl RepositoryErrorMapper {
    pub fn map_sqlx_error(err: sqlx::Error, context: &str) -> DomainError {
        match err {
            sqlx::Error::RowNotFound => DomainError::NotFound(format!("{}: row not found", context)),
            sqlx::Error::PoolTimedOut => {
                DomainError::Timeout(format!("{}: database pool timed out", context))
            }
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                DomainError::DataIntegrity(format!("{}: {}", context, db_err.message()))
            }
            other => DomainError::Repository(format!("{}: {}", context, other)),
        }
    }
}
