//! Game entity, the validated input shape, and the view projection.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::CoreError;
use crate::types::GameId;

/// Lowest accepted price.
pub const MIN_PRICE: f64 = 1.0;

/// Highest accepted price.
pub const MAX_PRICE: f64 = 1000.0;

/// A persisted catalog entry.
///
/// `(name, publisher)` is unique across the catalog. The `id` never changes
/// once assigned.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: GameId,
    pub name: String,
    pub publisher: String,
    pub price: f64,
}

impl Game {
    /// Build a new game with a freshly generated id.
    pub fn new(input: GameInput) -> Self {
        Self {
            id: GameId::new_v4(),
            name: input.name,
            publisher: input.publisher,
            price: input.price,
        }
    }

    /// Overwrite every user-editable field from `input`.
    pub fn apply(&mut self, input: GameInput) {
        self.name = input.name;
        self.publisher = input.publisher;
        self.price = input.price;
    }
}

/// Fields supplied by callers on create and full update.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GameInput {
    #[validate(length(
        min = 3,
        max = 100,
        message = "name must be between 3 and 100 characters"
    ))]
    pub name: String,

    #[validate(length(
        min = 1,
        max = 100,
        message = "publisher must be between 1 and 100 characters"
    ))]
    pub publisher: String,

    #[validate(range(
        min = 1.0,
        max = 1000.0,
        message = "price must be between 1 and 1000"
    ))]
    pub price: f64,
}

impl GameInput {
    /// Run the field rules, folding any violations into [`CoreError::Validation`].
    pub fn check(&self) -> Result<(), CoreError> {
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))?;
        validate_price(self.price)
    }
}

/// Reject prices outside `[MIN_PRICE, MAX_PRICE]`, including NaN.
pub fn validate_price(price: f64) -> Result<(), CoreError> {
    if (MIN_PRICE..=MAX_PRICE).contains(&price) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "price must be between {MIN_PRICE} and {MAX_PRICE}, got {price}"
        )))
    }
}

/// The shape returned to API callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameView {
    pub id: GameId,
    pub name: String,
    pub publisher: String,
    pub price: f64,
}

impl From<Game> for GameView {
    fn from(game: Game) -> Self {
        Self {
            id: game.id,
            name: game.name,
            publisher: game.publisher,
            price: game.price,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
