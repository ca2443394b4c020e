pub mod config;
pub mod pipeline;
pub mod processor;
pub mod rules;
pub mod walker;

pub use config::Config;
pub use pipeline::{RunSummary, run};
