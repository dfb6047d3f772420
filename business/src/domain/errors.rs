/// Repository errors for the domain layer.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// A transaction could not be opened or committed.
    #[error("repository.persistence")]
    Persistence,
    /// A statement failed while the store was reachable.
    #[error("repository.database_error")]
    DatabaseError,
}
