//! Catalog service - business rules over a [`GameRepository`].

use std::sync::Arc;

use crate::error::CoreError;
use crate::game::{validate_price, Game, GameInput, GameView};
use crate::pagination::PageRequest;
use crate::repository::{GameRepository, RepositoryError};
use crate::types::GameId;

/// Stateless orchestration of catalog operations.
///
/// Each call performs its repository reads and writes in sequence. The
/// duplicate check in [`create`](Self::create) and the existence checks in
/// the mutating calls are separate round trips from the write that follows;
/// uniqueness under concurrent writers is the repository's job, and a
/// violation it reports is surfaced as [`CoreError::DuplicateGame`].
#[derive(Clone)]
pub struct CatalogService {
    repo: Arc<dyn GameRepository>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn GameRepository>) -> Self {
        Self { repo }
    }

    /// The repository this service writes to.
    pub fn repository(&self) -> &Arc<dyn GameRepository> {
        &self.repo
    }

    /// One page of games, in repository order.
    pub async fn list(&self, page: PageRequest) -> Result<Vec<GameView>, CoreError> {
        let games = self.repo.get_page(page).await?;
        tracing::debug!(
            page = page.page(),
            page_size = page.page_size(),
            count = games.len(),
            "Listed games"
        );
        Ok(games.into_iter().map(GameView::from).collect())
    }

    /// A single game, or `None` if no game has this id.
    pub async fn get(&self, id: GameId) -> Result<Option<GameView>, CoreError> {
        Ok(self.repo.get_by_id(id).await?.map(GameView::from))
    }

    /// Register a new game under a freshly generated id.
    pub async fn create(&self, input: GameInput) -> Result<GameView, CoreError> {
        input.check()?;

        let existing = self
            .repo
            .find_by_name_and_publisher(&input.name, &input.publisher)
            .await?;
        if !existing.is_empty() {
            return Err(CoreError::DuplicateGame {
                name: input.name,
                publisher: input.publisher,
            });
        }

        let game = Game::new(input);
        self.repo
            .insert(&game)
            .await
            .map_err(|e| write_error(e, &game))?;

        tracing::info!(game_id = %game.id, name = %game.name, publisher = %game.publisher, "Game created");
        Ok(GameView::from(game))
    }

    /// Replace name, publisher and price of an existing game.
    pub async fn update(&self, id: GameId, input: GameInput) -> Result<(), CoreError> {
        input.check()?;

        let mut game = self.existing(id).await?;
        game.apply(input);
        self.repo
            .update(&game)
            .await
            .map_err(|e| write_error(e, &game))?;

        tracing::info!(game_id = %id, "Game updated");
        Ok(())
    }

    /// Change only the price of an existing game.
    pub async fn update_price(&self, id: GameId, price: f64) -> Result<(), CoreError> {
        validate_price(price)?;

        let mut game = self.existing(id).await?;
        game.price = price;
        self.repo
            .update(&game)
            .await
            .map_err(|e| write_error(e, &game))?;

        tracing::info!(game_id = %id, price, "Game price updated");
        Ok(())
    }

    /// Delete an existing game.
    pub async fn remove(&self, id: GameId) -> Result<(), CoreError> {
        self.existing(id).await?;
        self.repo.delete_by_id(id).await.map_err(|e| match e {
            RepositoryError::NotFound(_) => CoreError::GameNotFound { id },
            other => CoreError::Repository(other),
        })?;

        tracing::info!(game_id = %id, "Game removed");
        Ok(())
    }

    async fn existing(&self, id: GameId) -> Result<Game, CoreError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or(CoreError::GameNotFound { id })
    }
}

/// Map a failed insert/update onto the business error it represents.
fn write_error(err: RepositoryError, game: &Game) -> CoreError {
    match err {
        RepositoryError::AlreadyExists(_) => CoreError::DuplicateGame {
            name: game.name.clone(),
            publisher: game.publisher.clone(),
        },
        RepositoryError::NotFound(_) => CoreError::GameNotFound { id: game.id },
        other => CoreError::Repository(other),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
