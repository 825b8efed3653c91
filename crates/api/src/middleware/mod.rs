//! Request extractors that turn rejections into [`AppError`](crate::error::AppError).
//!
//! - [`extract::ApiPath`] -- `Path` with JSON 400 rejections.
//! - [`extract::ApiQuery`] -- `Query` with JSON 400 rejections.
//! - [`extract::ValidJson`] -- `Json` body that must also pass its `validator` rules.

pub mod extract;
