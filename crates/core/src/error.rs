use crate::repository::RepositoryError;
use crate::types::GameId;

/// Business-level errors returned by the catalog service.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Duplicate game: '{name}' is already registered for publisher '{publisher}'")]
    DuplicateGame { name: String, publisher: String },

    #[error("Game not found: {id}")]
    GameNotFound { id: GameId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}
