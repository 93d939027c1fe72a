pub mod config;
pub mod error;
pub mod server;
pub mod summarizer;
pub mod telemetry;

pub use error::{Error, Result};
