/// Games are keyed by a UUID generated by the service at creation time.
pub type GameId = uuid::Uuid;
