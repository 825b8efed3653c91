//! Process-local implementation of [`GameRepository`].

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use gamecatalog_core::game::Game;
use gamecatalog_core::pagination::PageRequest;
use gamecatalog_core::repository::{GameRepository, RepositoryError};
use gamecatalog_core::types::GameId;
use tokio::sync::RwLock;

/// Keeps games in a map behind a [`RwLock`].
///
/// Uniqueness of `(name, publisher)` is re-checked under the write lock, so
/// concurrent inserts of the same pair cannot both succeed.
#[derive(Default)]
pub struct InMemoryGameRepository {
    games: RwLock<HashMap<GameId, Game>>,
    closed: AtomicBool,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn ensure_open(&self) -> Result<(), RepositoryError> {
        if self.closed.load(Ordering::Acquire) {
            Err(RepositoryError::Storage("repository is closed".into()))
        } else {
            Ok(())
        }
    }
}

fn same_pair(a: &Game, b: &Game) -> bool {
    a.id != b.id && a.name == b.name && a.publisher == b.publisher
}

#[async_trait]
impl GameRepository for InMemoryGameRepository {
    async fn get_page(&self, page: PageRequest) -> Result<Vec<Game>, RepositoryError> {
        self.ensure_open()?;
        let games = self.games.read().await;
        let mut sorted: Vec<&Game> = games.values().collect();
        sorted.sort_by(|a, b| {
            a.name
                .cmp(&b.name)
                .then_with(|| a.publisher.cmp(&b.publisher))
                .then_with(|| a.id.cmp(&b.id))
        });
        let skip = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        Ok(sorted
            .into_iter()
            .skip(skip)
            .take(page.page_size() as usize)
            .cloned()
            .collect())
    }

    async fn get_by_id(&self, id: GameId) -> Result<Option<Game>, RepositoryError> {
        self.ensure_open()?;
        Ok(self.games.read().await.get(&id).cloned())
    }

    async fn find_by_name_and_publisher(
        &self,
        name: &str,
        publisher: &str,
    ) -> Result<Vec<Game>, RepositoryError> {
        self.ensure_open()?;
        Ok(self
            .games
            .read()
            .await
            .values()
            .filter(|g| g.name == name && g.publisher == publisher)
            .cloned()
            .collect())
    }

    async fn insert(&self, game: &Game) -> Result<(), RepositoryError> {
        self.ensure_open()?;
        let mut games = self.games.write().await;
        if games.contains_key(&game.id) {
            return Err(RepositoryError::AlreadyExists(format!("Game with id {}", game.id)));
        }
        if games.values().any(|g| same_pair(g, game)) {
            return Err(RepositoryError::AlreadyExists(format!(
                "Game '{}' for publisher '{}'",
                game.name, game.publisher
            )));
        }
        games.insert(game.id, game.clone());
        Ok(())
    }

    async fn update(&self, game: &Game) -> Result<(), RepositoryError> {
        self.ensure_open()?;
        let mut games = self.games.write().await;
        if !games.contains_key(&game.id) {
            return Err(RepositoryError::NotFound(format!("Game with id {}", game.id)));
        }
        if games.values().any(|g| same_pair(g, game)) {
            return Err(RepositoryError::AlreadyExists(format!(
                "Game '{}' for publisher '{}'",
                game.name, game.publisher
            )));
        }
        games.insert(game.id, game.clone());
        Ok(())
    }

    async fn delete_by_id(&self, id: GameId) -> Result<(), RepositoryError> {
        self.ensure_open()?;
        self.games
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| RepositoryError::NotFound(format!("Game with id {id}")))
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        self.ensure_open()
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::Release);
        tracing::info!("In-memory game repository closed");
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use assert_matches::assert_matches;

    use super::*;

    fn game(name: &str, publisher: &str) -> Game {
        Game {
            id: GameId::new_v4(),
            name: name.to_string(),
            publisher: publisher.to_string(),
            price: 10.0,
        }
    }

    #[tokio::test]
    async fn insert_and_get_by_id() {
        let repo = InMemoryGameRepository::new();
        let g = game("Chrono Trigger", "Square");
        repo.insert(&g).await.unwrap();
        assert_eq!(repo.get_by_id(g.id).await.unwrap(), Some(g));
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_pair() {
        let repo = InMemoryGameRepository::new();
        repo.insert(&game("Chrono Trigger", "Square")).await.unwrap();
        assert_matches!(
            repo.insert(&game("Chrono Trigger", "Square")).await,
            Err(RepositoryError::AlreadyExists(_))
        );
    }

    #[tokio::test]
    async fn concurrent_inserts_of_same_pair_store_one_record() {
        let repo = Arc::new(InMemoryGameRepository::new());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let repo = Arc::clone(&repo);
                tokio::spawn(async move { repo.insert(&game("Chrono Trigger", "Square")).await })
            })
            .collect();

        let mut ok = 0;
        for handle in handles {
            if handle.await.unwrap().is_ok() {
                ok += 1;
            }
        }

        assert_eq!(ok, 1);
        let matches = repo
            .find_by_name_and_publisher("Chrono Trigger", "Square")
            .await
            .unwrap();
        assert_eq!(matches.len(), 1);
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let repo = InMemoryGameRepository::new();
        assert_matches!(
            repo.update(&game("Chrono Trigger", "Square")).await,
            Err(RepositoryError::NotFound(_))
        );
    }

    #[tokio::test]
    async fn update_into_existing_pair_is_rejected() {
        let repo = InMemoryGameRepository::new();
        repo.insert(&game("Chrono Trigger", "Square")).await.unwrap();
        let mut other = game("Chrono Cross", "Square");
        repo.insert(&other).await.unwrap();

        other.name = "Chrono Trigger".into();

        assert_matches!(
            repo.update(&other).await,
            Err(RepositoryError::AlreadyExists(_))
        );
    }

    #[tokio::test]
    async fn update_keeping_own_pair_succeeds() {
        let repo = InMemoryGameRepository::new();
        let mut g = game("Chrono Trigger", "Square");
        repo.insert(&g).await.unwrap();
        g.price = 20.0;
        repo.update(&g).await.unwrap();
        assert_eq!(repo.get_by_id(g.id).await.unwrap().unwrap().price, 20.0);
    }

    #[tokio::test]
    async fn pages_are_ordered_by_name_then_publisher() {
        let repo = InMemoryGameRepository::new();
        repo.insert(&game("Zelda", "Nintendo")).await.unwrap();
        repo.insert(&game("Tetris", "Sega")).await.unwrap();
        repo.insert(&game("Tetris", "Nintendo")).await.unwrap();

        let page = repo
            .get_page(PageRequest::new(1, 2).unwrap())
            .await
            .unwrap();
        let names: Vec<_> = page
            .iter()
            .map(|g| (g.name.as_str(), g.publisher.as_str()))
            .collect();
        assert_eq!(names, [("Tetris", "Nintendo"), ("Tetris", "Sega")]);

        let rest = repo
            .get_page(PageRequest::new(2, 2).unwrap())
            .await
            .unwrap();
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].name, "Zelda");
    }

    #[tokio::test]
    async fn page_past_the_end_is_empty() {
        let repo = InMemoryGameRepository::new();
        repo.insert(&game("Zelda", "Nintendo")).await.unwrap();
        let page = repo
            .get_page(PageRequest::new(5, 10).unwrap())
            .await
            .unwrap();
        assert!(page.is_empty());
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let repo = InMemoryGameRepository::new();
        let g = game("Zelda", "Nintendo");
        repo.insert(&g).await.unwrap();
        repo.delete_by_id(g.id).await.unwrap();
        assert!(repo.get_by_id(g.id).await.unwrap().is_none());
        assert_matches!(
            repo.delete_by_id(g.id).await,
            Err(RepositoryError::NotFound(_))
        );
    }

    #[tokio::test]
    async fn closed_repository_rejects_calls() {
        let repo = InMemoryGameRepository::new();
        assert!(repo.ping().await.is_ok());
        repo.close().await;
        assert_matches!(repo.ping().await, Err(RepositoryError::Storage(_)));
        assert_matches!(
            repo.get_by_id(GameId::new_v4()).await,
            Err(RepositoryError::Storage(_))
        );
    }
}
