#[cfg(feature = "cli")]
pub mod cli;
pub mod harvest;
pub mod subjects;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use harvest::{HarvestConfig, HttpErrorPolicy};
pub use subjects::SubjectList;
