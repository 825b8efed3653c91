mod memory_game_repo;
mod pg_game_repo;

pub use memory_game_repo::InMemoryGameRepository;
pub use pg_game_repo::PgGameRepository;
