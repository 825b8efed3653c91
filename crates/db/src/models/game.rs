//! Row mapping for the `games` table.

use gamecatalog_core::game::Game;
use gamecatalog_core::types::GameId;
use sqlx::FromRow;

/// A row from the `games` table. Timestamps stay in the database.
#[derive(Debug, Clone, FromRow)]
pub struct GameRow {
    pub id: GameId,
    pub name: String,
    pub publisher: String,
    pub price: f64,
}

impl From<GameRow> for Game {
    fn from(row: GameRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            publisher: row.publisher,
            price: row.price,
        }
    }
}
