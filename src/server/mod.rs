pub mod error;
mod routes;

pub use routes::{router, SharedClassifier};
