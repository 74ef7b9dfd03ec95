pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{LocalStorage, OpenLibraryClient};
pub use config::{HarvestConfig, HttpErrorPolicy, SubjectList};
pub use crate::core::{etl::EtlEngine, etl::RunSummary, pipeline::SubjectPipeline};
pub use domain::model::{Book, BookCatalog};
pub use utils::error::{EtlError, Result};
