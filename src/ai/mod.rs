pub mod client;
pub mod inference;
pub mod keys;

pub use client::{AiError, GroqClient};
pub use keys::KeyRing;
