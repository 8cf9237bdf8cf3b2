// Module declarations
pub mod client;
pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod filtering;
pub mod logging;
pub mod models;
pub mod outputs;
pub mod placer;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use client::{GitHubClient, ProjectsApi};
pub use config::{Inputs, InputsBuilder};
pub use context::TriggerContext;
pub use error::{PlacerError, PlacerResult};
pub use outputs::{GithubOutputFile, LogOutputs, OutputSink};
pub use placer::{BoardItemPlacer, PlacementOutcome, PlacementReport};
