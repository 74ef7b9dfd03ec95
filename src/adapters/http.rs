use crate::config::harvest::{HarvestConfig, HttpErrorPolicy};
use crate::domain::model::{SubjectPage, Work};
use crate::domain::ports::BookSource;
use crate::utils::error::{EtlError, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Fetches `/subjects/{subject}.json?limit=N` from an Open Library compatible host.
pub struct OpenLibraryClient {
    client: Client,
    config: HarvestConfig,
}

impl OpenLibraryClient {
    pub fn new(config: HarvestConfig) -> Result<Self> {
        let mut builder = Client::builder();

        // 只有在配置中指定時才設定超時
        if let Some(timeout) = config.source.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(timeout));
        }

        Ok(Self {
            client: builder.build()?,
            config,
        })
    }
}

#[async_trait]
impl BookSource for OpenLibraryClient {
    async fn fetch_works(&self, subject: &str) -> Result<Vec<Work>> {
        let url = self.config.subject_url(subject);

        tracing::debug!("Making API request to: {}", url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            match self.config.http_error_policy() {
                HttpErrorPolicy::Fail => {
                    return Err(EtlError::HttpStatusError {
                        subject: subject.to_string(),
                        status: status.as_u16(),
                    });
                }
                HttpErrorPolicy::Lenient => {
                    tracing::warn!(
                        "⚠️ Subject '{}' returned HTTP {}, decoding body anyway",
                        subject,
                        status
                    );
                }
            }
        }

        let body = response.bytes().await?;
        let page: SubjectPage = serde_json::from_slice(&body)?;
        let works = page.into_works();

        tracing::debug!("Subject '{}' returned {} works", subject, works.len());
        Ok(works)
    }
}
