//! Application orchestration for the command-line uploader.

use crate::media::{Client, MediaService};
use crate::models::{Config, UploadKind, UploadResult};
use crate::Result;
use std::path::Path;
use tracing::info;

/// Drives a [`MediaService`] on behalf of the CLI.
pub struct App {
    media: Box<dyn MediaService>,
}

impl App {
    /// Build an app around an existing service, e.g. a mock in tests.
    pub fn with_service(media: Box<dyn MediaService>) -> Self {
        Self { media }
    }

    /// Construct an app from environment configuration (`Config::from_env`).
    pub fn new() -> Result<Self> {
        let config = Config::from_env()?;
        let client = Client::from_config(&config)?;
        info!(
            "Using cloud {} via {}",
            client.cloud_name(),
            client.base_url()
        );

        Ok(Self::with_service(Box::new(client)))
    }

    /// Uploads the file at `path`. Without a name the service picks one.
    pub async fn upload_file(
        &self,
        path: &Path,
        name: Option<&str>,
        kind: UploadKind,
    ) -> Result<UploadResult> {
        let mut file = tokio::fs::File::open(path).await?;
        info!("Uploading {} as {}", path.display(), kind);

        self.media
            .upload(&mut file, name.unwrap_or_default(), kind)
            .await
    }

    pub async fn delete(&self, name: &str, kind: UploadKind) -> Result<()> {
        self.media.delete(name, kind).await
    }
}
