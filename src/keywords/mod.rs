pub mod corpus;
pub mod scan;

pub use corpus::KeywordCorpus;
pub use scan::{scan, Category};
