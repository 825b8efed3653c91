//! PostgreSQL implementation of [`GameRepository`].

use async_trait::async_trait;
use gamecatalog_core::game::Game;
use gamecatalog_core::pagination::PageRequest;
use gamecatalog_core::repository::{GameRepository, RepositoryError};
use gamecatalog_core::types::GameId;

use crate::models::game::GameRow;
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, publisher, price";

/// Unique constraint guarding `(name, publisher)`.
const UNIQUE_NAME_PUBLISHER: &str = "uq_games_name_publisher";

/// Stores games in the `games` table.
pub struct PgGameRepository {
    pool: DbPool,
}

impl PgGameRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl GameRepository for PgGameRepository {
    async fn get_page(&self, page: PageRequest) -> Result<Vec<Game>, RepositoryError> {
        let query = format!(
            "SELECT {COLUMNS} FROM games ORDER BY name, publisher, id LIMIT $1 OFFSET $2"
        );
        let offset = i64::try_from(page.offset())
            .map_err(|_| RepositoryError::Storage(format!("offset out of range: {}", page.offset())))?;
        let rows = sqlx::query_as::<_, GameRow>(&query)
            .bind(i64::from(page.page_size()))
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(rows.into_iter().map(Game::from).collect())
    }

    async fn get_by_id(&self, id: GameId) -> Result<Option<Game>, RepositoryError> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE id = $1");
        let row = sqlx::query_as::<_, GameRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(row.map(Game::from))
    }

    async fn find_by_name_and_publisher(
        &self,
        name: &str,
        publisher: &str,
    ) -> Result<Vec<Game>, RepositoryError> {
        let query = format!("SELECT {COLUMNS} FROM games WHERE name = $1 AND publisher = $2");
        let rows = sqlx::query_as::<_, GameRow>(&query)
            .bind(name)
            .bind(publisher)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;
        Ok(rows.into_iter().map(Game::from).collect())
    }

    async fn insert(&self, game: &Game) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO games (id, name, publisher, price) VALUES ($1, $2, $3, $4)")
            .bind(game.id)
            .bind(&game.name)
            .bind(&game.publisher)
            .bind(game.price)
            .execute(&self.pool)
            .await
            .map_err(|e| write_error(e, game))?;
        Ok(())
    }

    async fn update(&self, game: &Game) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE games SET name = $2, publisher = $3, price = $4, updated_at = NOW()
             WHERE id = $1",
        )
        .bind(game.id)
        .bind(&game.name)
        .bind(&game.publisher)
        .bind(game.price)
        .execute(&self.pool)
        .await
        .map_err(|e| write_error(e, game))?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Game with id {}", game.id)));
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: GameId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM games WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(storage_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound(format!("Game with id {id}")));
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        crate::health_check(&self.pool).await.map_err(storage_error)
    }

    async fn close(&self) {
        self.pool.close().await;
        tracing::info!("Database connection pool closed");
    }
}

fn storage_error(err: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(err.to_string())
}

/// Classify a failed write. A violation of the `(name, publisher)` unique
/// constraint (PostgreSQL code 23505) becomes `AlreadyExists`.
fn write_error(err: sqlx::Error, game: &Game) -> RepositoryError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.code().as_deref() == Some("23505")
            && db_err.constraint() == Some(UNIQUE_NAME_PUBLISHER)
        {
            return RepositoryError::AlreadyExists(format!(
                "Game '{}' for publisher '{}'",
                game.name, game.publisher
            ));
        }
    }
    storage_error(err)
}
