pub mod client;
pub mod docgen;
pub mod health;
pub mod research;
pub mod speech;
pub mod tutor;
pub mod vision;
pub mod wire;
pub mod writing;

pub use client::{BackendError, GeminiClient, DEFAULT_API_URL, TEXT_MODEL};
