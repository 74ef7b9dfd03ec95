use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub output_path: String,
    pub subject_count: usize,
    pub book_count: usize,
}

pub struct EtlEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> EtlEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load in sequence. Nothing is written unless
    /// every subject was fetched.
    pub async fn run(&self) -> Result<RunSummary> {
        tracing::info!("🚀 Starting harvest");

        let batches = self.pipeline.extract().await?;
        let subject_count = batches.len();
        tracing::info!("📥 Extracted {} subjects", subject_count);

        let catalog = self.pipeline.transform(batches).await?;
        let book_count = catalog.len();
        tracing::info!("🔧 Flattened into {} books", book_count);

        let output_path = self.pipeline.load(catalog).await?;
        println!("Saved {} books to {}!", book_count, output_path);
        tracing::info!("💾 Output saved to: {}", output_path);

        Ok(RunSummary {
            output_path,
            subject_count,
            book_count,
        })
    }
}
