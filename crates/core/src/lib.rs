//! Domain types and business rules for the game catalog.

pub mod error;
pub mod game;
pub mod pagination;
pub mod repository;
pub mod service;
pub mod types;
