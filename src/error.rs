//! Error types for the fallible edges of the game
//!
//! The simulation itself is total; only storage, tuning files and skin
//! acquisition can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid tuning: {0}")]
    InvalidTuning(String),

    #[error("hero image generation failed: {0}")]
    SkinGeneration(String),

    #[error("generated image is not a base64 data URI")]
    InvalidSkinImage,
}

pub type Result<T> = std::result::Result<T, Error>;
