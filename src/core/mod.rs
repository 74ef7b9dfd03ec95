pub mod aggregator;
pub mod etl;
pub mod pipeline;
pub mod recommend;
pub mod writer;

pub use crate::domain::model::{Book, BookCatalog, SubjectWorks, Work};
pub use crate::domain::ports::{BookSource, Pipeline, Storage};
pub use crate::utils::error::Result;
