use crate::domain::model::{BookCatalog, SubjectWorks, Work};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Where the works of one subject come from.
#[async_trait]
pub trait BookSource: Send + Sync {
    async fn fetch_works(&self, subject: &str) -> Result<Vec<Work>>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<SubjectWorks>>;
    async fn transform(&self, data: Vec<SubjectWorks>) -> Result<BookCatalog>;
    async fn load(&self, catalog: BookCatalog) -> Result<String>;
}
