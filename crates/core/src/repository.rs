//! Storage port for games.
//!
//! Adapters live in `gamecatalog-db`. Signatures carry no driver types so the
//! service can be exercised against any implementation.

use async_trait::async_trait;

use crate::game::Game;
use crate::pagination::PageRequest;
use crate::types::GameId;

/// Errors surfaced by a [`GameRepository`] implementation.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    /// The targeted game does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A game with the same `(name, publisher)` pair is already stored.
    #[error("Already exists: {0}")]
    AlreadyExists(String),

    /// Backend failure (connection, query, pool closed).
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Persistence operations for [`Game`] records.
///
/// Implementations must enforce `(name, publisher)` uniqueness on `insert`
/// and `update`, reporting violations as [`RepositoryError::AlreadyExists`].
#[async_trait]
pub trait GameRepository: Send + Sync {
    /// One page of games ordered by name, publisher, then id.
    async fn get_page(&self, page: PageRequest) -> Result<Vec<Game>, RepositoryError>;

    /// Look up a game by id. `Ok(None)` when absent.
    async fn get_by_id(&self, id: GameId) -> Result<Option<Game>, RepositoryError>;

    /// All games matching the exact `(name, publisher)` pair.
    async fn find_by_name_and_publisher(
        &self,
        name: &str,
        publisher: &str,
    ) -> Result<Vec<Game>, RepositoryError>;

    /// Store a new game.
    async fn insert(&self, game: &Game) -> Result<(), RepositoryError>;

    /// Overwrite a stored game. `Err(NotFound)` if its id is unknown.
    async fn update(&self, game: &Game) -> Result<(), RepositoryError>;

    /// Delete a game. `Err(NotFound)` if its id is unknown.
    async fn delete_by_id(&self, id: GameId) -> Result<(), RepositoryError>;

    /// Cheap reachability probe used by the health endpoint.
    async fn ping(&self) -> Result<(), RepositoryError>;

    /// Release the underlying connections. Later calls may fail with
    /// [`RepositoryError::Storage`].
    async fn close(&self);
}
