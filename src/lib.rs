pub mod analysis;
pub mod config;
pub mod enrichment;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod prompt;
pub mod server;

pub use error::{Error, Result};
