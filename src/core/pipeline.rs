use crate::config::harvest::HarvestConfig;
use crate::config::subjects::SubjectList;
use crate::core::{aggregator, writer};
use crate::domain::model::{BookCatalog, SubjectWorks};
use crate::domain::ports::{BookSource, Pipeline, Storage};
use crate::utils::error::Result;

/// Load subjects → fetch each → flatten into books → write one JSON document.
pub struct SubjectPipeline<S: Storage, B: BookSource> {
    storage: S,
    source: B,
    subjects: SubjectList,
    config: HarvestConfig,
}

impl<S: Storage, B: BookSource> SubjectPipeline<S, B> {
    pub fn new(storage: S, source: B, subjects: SubjectList, config: HarvestConfig) -> Self {
        Self {
            storage,
            source,
            subjects,
            config,
        }
    }

    pub fn subjects(&self) -> &SubjectList {
        &self.subjects
    }
}

#[async_trait::async_trait]
impl<S: Storage, B: BookSource> Pipeline for SubjectPipeline<S, B> {
    async fn extract(&self) -> Result<Vec<SubjectWorks>> {
        aggregator::fetch_all(&self.source, &self.subjects).await
    }

    async fn transform(&self, data: Vec<SubjectWorks>) -> Result<BookCatalog> {
        Ok(BookCatalog::new(aggregator::aggregate(data)))
    }

    async fn load(&self, catalog: BookCatalog) -> Result<String> {
        let output_path = self.config.output_path().to_string();
        writer::write_catalog(&self.storage, &output_path, &catalog).await?;
        Ok(output_path)
    }
}
